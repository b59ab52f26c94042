// ui.rs - egui front end: turns input into driver commands and paints the grid

use eframe::egui;
use egui::{Pos2, Rect, Sense, Stroke, Vec2};
use std::time::Instant;

use crate::AutomatonApp;
use crate::driver::{Command, RunState};
use crate::grid::{self, CellState};

/// Side length of a square cell that fits the whole grid into `available`.
pub fn cell_size(available: Vec2) -> f32 {
    (available.x / grid::WIDTH as f32).min(available.y / grid::HEIGHT as f32)
}

/// Grid cell under `pos`, with `origin` the top-left corner of the grid.
/// Positions past the last row or column are clamped onto the grid.
pub fn cell_at(origin: Pos2, cell_size: f32, pos: Pos2) -> Option<(usize, usize)> {
    if cell_size <= 0.0 || pos.x < origin.x || pos.y < origin.y {
        return None;
    }
    let x = ((pos.x - origin.x) / cell_size) as usize;
    let y = ((pos.y - origin.y) / cell_size) as usize;
    Some((x.min(grid::WIDTH - 1), y.min(grid::HEIGHT - 1)))
}

fn cell_rect(origin: Pos2, cell_size: f32, x: usize, y: usize) -> Rect {
    Rect::from_min_size(
        egui::pos2(origin.x + x as f32 * cell_size, origin.y + y as f32 * cell_size),
        Vec2::splat(cell_size),
    )
}

impl AutomatonApp {
    /// Translates this frame's keyboard input into commands.
    fn read_keys(&mut self, ctx: &egui::Context) {
        let (clear, slower, faster) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::C),
                i.key_pressed(egui::Key::Minus),
                i.key_pressed(egui::Key::PlusEquals),
            )
        });
        if clear {
            self.driver.push(Command::Clear);
        }
        if slower {
            self.driver.push(Command::SlowDown);
        }
        if faster {
            self.driver.push(Command::SpeedUp);
        }
    }

    fn paint_grid(&self, painter: &egui::Painter, origin: Pos2, size: f32, hovered: Option<(usize, usize)>) {
        let gfx = &self.gfx;
        let paused = self.driver.is_paused();

        // Grid lines only while paused
        if paused {
            let stroke = Stroke::new(1.0, gfx.grid_line_color);
            let extent = Vec2::new(size * grid::WIDTH as f32, size * grid::HEIGHT as f32);
            for col in 0..=grid::WIDTH {
                let x = origin.x + col as f32 * size;
                painter.line_segment([egui::pos2(x, origin.y), egui::pos2(x, origin.y + extent.y)], stroke);
            }
            for row in 0..=grid::HEIGHT {
                let y = origin.y + row as f32 * size;
                painter.line_segment([egui::pos2(origin.x, y), egui::pos2(origin.x + extent.x, y)], stroke);
            }
        }

        let automaton = self.driver.automaton();
        for y in 0..grid::HEIGHT {
            for x in 0..grid::WIDTH {
                let color = match automaton.state(x, y) {
                    Some(CellState::Recovering) => gfx.recovering_color,
                    Some(CellState::Excited) => gfx.excited_color,
                    Some(CellState::Resting) | None => continue,
                };
                painter.rect_filled(cell_rect(origin, size, x, y), 0.0, color);
            }
        }

        if let Some((x, y)) = hovered {
            let color = if paused { gfx.cursor_paused_color } else { gfx.cursor_running_color };
            painter.rect_filled(cell_rect(origin, size, x, y), 0.0, color);
        }
    }

    fn status_line(&self) -> String {
        let automaton = self.driver.automaton();
        let state = match self.driver.state() {
            RunState::Running => "Running",
            RunState::Paused => "Paused",
        };
        format!(
            "Generation: {} | Interval: {} ms | {} | Excited: {}  Recovering: {}",
            self.driver.generation(),
            self.driver.refresh_interval().as_millis(),
            state,
            automaton.count(CellState::Excited),
            automaton.count(CellState::Recovering),
        )
    }

    /// One frame: keys, then the driver, then the status bar and the grid.
    /// Pointer commands are read while painting and so apply on the next frame.
    fn show(&mut self, ctx: &egui::Context) {
        self.read_keys(ctx);
        self.driver.update(Instant::now());

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_line());
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.gfx.background_color))
            .show(ctx, |ui| {
                let size = cell_size(ui.available_size());
                let total_size = Vec2::new(size * grid::WIDTH as f32, size * grid::HEIGHT as f32);
                let (response, painter) = ui.allocate_painter(total_size, Sense::click());
                let origin = response.rect.min;

                let hovered = response.hover_pos().and_then(|pos| cell_at(origin, size, pos));
                if response.clicked() {
                    if let Some((x, y)) = hovered {
                        self.driver.push(Command::Excite { x, y });
                    }
                }
                if response.secondary_clicked() {
                    self.driver.push(Command::TogglePause);
                }

                self.paint_grid(&painter, origin, size, hovered);
            });
    }
}

impl eframe::App for AutomatonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);

        // Keep polling the clock even without input
        ctx.request_repaint();
    }
}
