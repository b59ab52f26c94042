// driver.rs - Decides when the automaton advances in graphical mode

use log::{debug, info, warn};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::automaton::Automaton;
use crate::config::SimConfig;
use crate::grid;

/// Intents produced by the presentation layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Excite { x: usize, y: usize },
    Clear,
    TogglePause,
    /// Shortens the refresh interval.
    SpeedUp,
    /// Lengthens the refresh interval.
    SlowDown,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

/// Owns the automaton and paces its generations by wall-clock time.
pub struct Driver {
    automaton: Automaton,
    state: RunState,
    refresh_interval: Duration,
    interval_step: Duration,
    last_tick: Instant,
    generation: u64,
    pending: VecDeque<Command>,
}

impl Driver {
    pub fn new(automaton: Automaton, config: &SimConfig, now: Instant) -> Self {
        Self {
            automaton,
            state: RunState::Running,
            refresh_interval: config.refresh_interval,
            interval_step: config.interval_step,
            last_tick: now,
            generation: 0,
            pending: VecDeque::new(),
        }
    }

    /// Queues a command to be applied on the next `update`.
    pub fn push(&mut self, command: Command) {
        self.pending.push_back(command);
    }

    /// One iteration of the graphical loop: drains the queued commands in
    /// order, then ticks if running and the interval has elapsed. Returns
    /// whether a generation was computed.
    pub fn update(&mut self, now: Instant) -> bool {
        self.apply_commands();
        self.tick_if_due(now)
    }

    pub fn apply_commands(&mut self) {
        while let Some(command) = self.pending.pop_front() {
            self.apply(command);
        }
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Excite { x, y } => {
                if x < grid::WIDTH && y < grid::HEIGHT {
                    self.automaton.excite(x, y);
                } else {
                    warn!("Ignoring excite outside the grid at ({}, {})", x, y);
                }
            }
            Command::Clear => {
                self.automaton.initialize();
                self.generation = 0;
                info!("Grid cleared");
            }
            Command::TogglePause => {
                self.state = match self.state {
                    RunState::Running => RunState::Paused,
                    RunState::Paused => RunState::Running,
                };
                info!("Simulation {:?}", self.state);
            }
            Command::SpeedUp => {
                self.refresh_interval = self.refresh_interval.saturating_sub(self.interval_step);
                debug!("Refresh interval now {:?}", self.refresh_interval);
            }
            Command::SlowDown => {
                self.refresh_interval += self.interval_step;
                debug!("Refresh interval now {:?}", self.refresh_interval);
            }
        }
    }

    /// Ticks at most once, and only while running with at least
    /// `refresh_interval` elapsed since the previous tick.
    pub fn tick_if_due(&mut self, now: Instant) -> bool {
        if self.state == RunState::Paused {
            return false;
        }
        if now.saturating_duration_since(self.last_tick) < self.refresh_interval {
            return false;
        }
        self.last_tick = now;
        self.tick();
        true
    }

    /// Computes one generation unconditionally.
    pub fn tick(&mut self) {
        self.automaton.tick();
        self.generation += 1;
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState;

    fn driver_at(start: Instant) -> Driver {
        Driver::new(Automaton::new(), &SimConfig::default(), start)
    }

    #[test]
    fn test_starts_running() {
        let driver = driver_at(Instant::now());
        assert_eq!(driver.state(), RunState::Running);
        assert_eq!(driver.generation(), 0);
        assert_eq!(driver.refresh_interval(), Duration::from_millis(25));
    }

    #[test]
    fn test_ticks_only_after_interval() {
        let start = Instant::now();
        let mut driver = driver_at(start);

        assert!(!driver.update(start + Duration::from_millis(10)));
        assert!(driver.update(start + Duration::from_millis(25)));
        assert_eq!(driver.generation(), 1);

        // Measured from the last tick, not from the start
        assert!(!driver.update(start + Duration::from_millis(40)));
        assert!(driver.update(start + Duration::from_millis(50)));
        assert_eq!(driver.generation(), 2);
    }

    #[test]
    fn test_paused_never_ticks() {
        let start = Instant::now();
        let mut driver = driver_at(start);
        driver.push(Command::Excite { x: 3, y: 3 });
        driver.push(Command::TogglePause);

        assert!(!driver.update(start + Duration::from_secs(10)));
        assert!(driver.is_paused());
        assert_eq!(driver.generation(), 0);
        // Excitation still lands while paused
        assert_eq!(driver.automaton().state(3, 3), Some(CellState::Excited));
        assert_eq!(driver.automaton().count(CellState::Excited), 1);

        driver.push(Command::TogglePause);
        assert!(driver.update(start + Duration::from_secs(11)));
        assert_eq!(driver.state(), RunState::Running);
        assert_eq!(driver.automaton().state(3, 3), Some(CellState::Recovering));
    }

    #[test]
    fn test_speed_clamps_at_zero() {
        let start = Instant::now();
        let mut driver = driver_at(start);
        driver.push(Command::SpeedUp);
        driver.push(Command::SpeedUp);
        driver.apply_commands();
        assert_eq!(driver.refresh_interval(), Duration::ZERO);

        // Uncapped: ticks on every update
        assert!(driver.update(start));
        assert!(driver.update(start));

        driver.push(Command::SlowDown);
        driver.push(Command::SlowDown);
        driver.apply_commands();
        assert_eq!(driver.refresh_interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_commands_apply_before_tick() {
        let start = Instant::now();
        let mut driver = driver_at(start);
        driver.push(Command::Excite { x: 10, y: 10 });
        assert!(driver.update(start + Duration::from_millis(25)));
        assert_eq!(driver.automaton().state(10, 10), Some(CellState::Recovering));
        assert_eq!(driver.automaton().count(CellState::Excited), 4);
    }

    #[test]
    fn test_commands_apply_in_order() {
        let start = Instant::now();
        let mut driver = driver_at(start);
        driver.push(Command::Excite { x: 1, y: 1 });
        driver.push(Command::Clear);
        driver.push(Command::Excite { x: 2, y: 2 });
        driver.apply_commands();
        assert_eq!(driver.automaton().state(1, 1), Some(CellState::Resting));
        assert_eq!(driver.automaton().state(2, 2), Some(CellState::Excited));
    }

    #[test]
    fn test_clear_resets_generation() {
        let start = Instant::now();
        let mut driver = driver_at(start);
        driver.push(Command::Excite { x: 5, y: 5 });
        driver.update(start + Duration::from_millis(30));
        assert_eq!(driver.generation(), 1);

        driver.push(Command::Clear);
        driver.apply_commands();
        assert_eq!(driver.generation(), 0);
        assert_eq!(driver.automaton().count(CellState::Resting), grid::WIDTH * grid::HEIGHT);
    }

    #[test]
    fn test_out_of_range_excite_is_dropped() {
        let mut driver = driver_at(Instant::now());
        driver.push(Command::Excite { x: grid::WIDTH, y: 0 });
        driver.push(Command::Excite { x: 0, y: grid::HEIGHT });
        driver.apply_commands();
        assert_eq!(driver.automaton().count(CellState::Excited), 0);
    }
}
