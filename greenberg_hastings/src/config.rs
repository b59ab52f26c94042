// config.rs - Runtime defaults for the stepping driver and the window

use egui::Color32;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct Config {
    pub sim: SimConfig,
    pub gfx: GfxConfig,
}

#[derive(Debug)]
pub struct SimConfig {
    /// Minimum wall-clock time between two generations.
    pub refresh_interval: Duration,
    /// Amount added or removed by the speed commands.
    pub interval_step: Duration,
}
impl Default for SimConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_millis(25),
            interval_step: Duration::from_millis(25),
        }
    }
}

#[derive(Debug)]
pub struct GfxConfig {
    pub window_size: [f32; 2],
    pub background_color: Color32,
    pub recovering_color: Color32,
    pub excited_color: Color32,
    pub grid_line_color: Color32,
    pub cursor_running_color: Color32,
    pub cursor_paused_color: Color32,
}
impl Default for GfxConfig {
    fn default() -> Self {
        Self {
            window_size: [640.0, 640.0],
            background_color: Color32::BLACK,
            recovering_color: Color32::from_rgb(128, 128, 128),
            excited_color: Color32::WHITE,
            grid_line_color: Color32::from_rgb(51, 153, 77),
            cursor_running_color: Color32::from_rgb(0, 102, 153),
            cursor_paused_color: Color32::from_rgb(153, 0, 0),
        }
    }
}
