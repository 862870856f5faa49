use glam::Vec2;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GridConfig, TimingConfig};
use crate::constants::RANDOM_FILL_PROBABILITY;
use crate::grid::GridState;
use crate::utils::clamped_cell_under_pointer;

pub type SimRng = StdRng;

/// Commands and pointer state gathered from the window for one frame.
/// Key commands are edge-triggered (set on press, consumed by the frame);
/// the paint flags mirror the held state of the mouse buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub pointer: Option<Vec2>,
    pub paint_alive: bool,
    pub paint_dead: bool,
    pub toggle_running: bool,
    pub clear_board: bool,
    pub reseed_board: bool,
    pub speed_up: bool,
    pub slow_down: bool,
}

/// Owns the step cadence: the interval between generations, the time the
/// last generation ran, and the run/pause flag. The run state changes only
/// through an explicit toggle command; a pointer edit merely skips stepping
/// for the frame it happens in.
pub struct SimulationController {
    timing: TimingConfig,
    interval_secs: f64,
    last_step_time: f64,
    running: bool,
    generation: u64,
    rng: SimRng,
}

impl SimulationController {
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            interval_secs: timing
                .initial_interval_secs
                .clamp(timing.fastest_interval_secs, timing.slowest_interval_secs),
            timing,
            last_step_time: 0.0,
            running: true,
            generation: 0,
            rng: SimRng::from_entropy(),
        }
    }

    pub fn interval_secs(&self) -> f64 {
        self.interval_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Moves the interval by `delta_secs`, clamped to the configured bounds.
    pub fn adjust_interval(&mut self, delta_secs: f64) {
        self.interval_secs = (self.interval_secs + delta_secs).clamp(
            self.timing.fastest_interval_secs,
            self.timing.slowest_interval_secs,
        );
        info!("Step interval: {:.3}s", self.interval_secs);
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
        info!(
            "Simulation {}",
            if self.running { "running" } else { "paused" }
        );
    }

    /// Returns true when a generation is due: the simulation is running, no
    /// live edit happened this frame, and the interval has elapsed since the
    /// last step. Resets the step clock on success; the caller must then
    /// invoke [`GridState::step`].
    pub fn tick(&mut self, now: f64, edit_in_progress: bool) -> bool {
        if !self.running || edit_in_progress {
            return false;
        }
        if now - self.last_step_time < self.interval_secs {
            return false;
        }
        self.last_step_time = now;
        true
    }

    /// Applies one frame's worth of input to the board and to the timing
    /// state, then runs a generation if one is due. Returns whether a step
    /// ran.
    pub fn advance_frame(
        &mut self,
        grid: &mut GridState,
        grid_config: &GridConfig,
        input: &FrameInput,
        now: f64,
    ) -> bool {
        if input.slow_down {
            self.adjust_interval(self.timing.adjust_step_secs);
        }
        if input.speed_up {
            self.adjust_interval(-self.timing.adjust_step_secs);
        }
        if input.toggle_running {
            self.toggle_running();
        }
        if input.clear_board {
            grid.clear();
            self.generation = 0;
            info!("Board cleared");
        }
        if input.reseed_board {
            grid.fill_random(&mut self.rng, RANDOM_FILL_PROBABILITY);
            self.generation = 0;
            info!("Board reseeded, {} cells alive", grid.live_count());
        }

        let mut edit_in_progress = false;
        if input.paint_alive || input.paint_dead {
            if let Some(pointer) = input.pointer {
                let (col, row) = clamped_cell_under_pointer(pointer, grid_config);
                // Left button wins when both are held.
                grid.set_cell(col, row, input.paint_alive);
                edit_in_progress = true;
            }
        }

        if self.tick(now, edit_in_progress) {
            grid.step();
            self.generation += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SimulationController {
        SimulationController::new(TimingConfig::default())
    }

    fn small_grid() -> (GridState, GridConfig) {
        let config = GridConfig::for_viewport(50, 50, 10);
        (GridState::from_config(&config), config)
    }

    #[test]
    fn interval_clamps_at_the_slow_bound() {
        let timing = TimingConfig::default();
        let mut controller = controller();
        for _ in 0..200 {
            controller.adjust_interval(timing.adjust_step_secs);
        }
        assert_eq!(controller.interval_secs(), timing.slowest_interval_secs);
    }

    #[test]
    fn interval_clamps_at_the_fast_bound() {
        let timing = TimingConfig::default();
        let mut controller = controller();
        for _ in 0..200 {
            controller.adjust_interval(-timing.adjust_step_secs);
        }
        assert_eq!(controller.interval_secs(), timing.fastest_interval_secs);
    }

    #[test]
    fn tick_fires_only_after_the_interval_elapses() {
        let mut controller = controller();
        assert!(!controller.tick(0.1, false));
        assert!(controller.tick(0.25, false));
        // The clock reset on the successful tick.
        assert!(!controller.tick(0.3, false));
        assert!(controller.tick(0.5, false));
    }

    #[test]
    fn tick_never_fires_while_paused() {
        let mut controller = controller();
        controller.toggle_running();
        assert!(!controller.tick(100.0, false));
        controller.toggle_running();
        assert!(controller.tick(100.0, false));
    }

    #[test]
    fn edit_suppresses_the_tick_without_stopping_the_clock() {
        let mut controller = controller();
        assert!(!controller.tick(1.0, true));
        // Next frame without an edit steps immediately.
        assert!(controller.tick(1.016, false));
    }

    #[test]
    fn painting_edits_the_cell_under_the_pointer() {
        let (mut grid, config) = small_grid();
        let mut controller = controller();

        let input = FrameInput {
            pointer: Some(Vec2::new(25.0, 15.0)),
            paint_alive: true,
            ..Default::default()
        };
        let stepped = controller.advance_frame(&mut grid, &config, &input, 10.0);

        assert!(grid.is_alive(2, 1));
        // The live edit held the step back even though the interval elapsed.
        assert!(!stepped);
    }

    #[test]
    fn paint_alive_wins_over_paint_dead() {
        let (mut grid, config) = small_grid();
        let mut controller = controller();

        let input = FrameInput {
            pointer: Some(Vec2::new(5.0, 5.0)),
            paint_alive: true,
            paint_dead: true,
            ..Default::default()
        };
        controller.advance_frame(&mut grid, &config, &input, 0.0);
        assert!(grid.is_alive(0, 0));
    }

    #[test]
    fn clear_command_empties_the_board() {
        let (mut grid, config) = small_grid();
        let mut controller = controller();
        grid.stamp(&[(1, 1), (2, 2), (3, 3)]);

        let input = FrameInput {
            clear_board: true,
            ..Default::default()
        };
        controller.advance_frame(&mut grid, &config, &input, 0.0);
        assert_eq!(grid.live_count(), 0);
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn advance_frame_steps_a_due_generation() {
        let (mut grid, config) = small_grid();
        let mut controller = controller();
        grid.stamp(&[(2, 1), (2, 2), (2, 3)]);

        let stepped = controller.advance_frame(&mut grid, &config, &FrameInput::default(), 1.0);
        grid.classify_and_collapse();

        assert!(stepped);
        assert_eq!(controller.generation(), 1);
        let alive: Vec<_> = grid.alive_cells().collect();
        assert_eq!(alive, vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn speed_commands_move_the_interval() {
        let timing = TimingConfig::default();
        let (mut grid, config) = small_grid();
        let mut controller = controller();

        let input = FrameInput {
            slow_down: true,
            ..Default::default()
        };
        controller.advance_frame(&mut grid, &config, &input, 0.0);
        assert!(
            (controller.interval_secs()
                - (timing.initial_interval_secs + timing.adjust_step_secs))
                .abs()
                < 1e-12
        );

        let input = FrameInput {
            speed_up: true,
            ..Default::default()
        };
        controller.advance_frame(&mut grid, &config, &input, 0.0);
        assert!((controller.interval_secs() - timing.initial_interval_secs).abs() < 1e-12);
    }
}
