//! Fixed-timestep game loop.
//!
//! Frame times go into an accumulator that is drained in fixed 60 Hz steps,
//! so simulation results do not depend on how frames are sliced.

use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Longest frame time accepted in one go (4 FPS). Anything longer is clamped
/// and the simulation falls behind wall-clock time instead of catching up.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Accumulator and counters for a fixed-rate simulation.
#[derive(Debug, Default)]
pub struct GameLoop {
    accumulator: f64,
    total_sim_time: f64,
    frame_count: u64,
    update_count: u64,
}

impl GameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame of `frame_time` seconds and run as many fixed steps as
    /// fit. `update_fn(FIXED_DT, total_sim_time)` runs once per step. Returns
    /// the number of steps run.
    pub fn advance(&mut self, frame_time: f64, mut update_fn: impl FnMut(f64, f64)) -> u32 {
        let frame_time = if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            MAX_FRAME_TIME
        } else {
            frame_time.max(0.0)
        };

        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT, self.total_sim_time);
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            self.update_count += 1;
            steps += 1;
        }

        self.frame_count += 1;
        steps
    }

    /// Fraction of a step left in the accumulator, in `[0.0, 1.0)`.
    pub fn alpha(&self) -> f64 {
        if self.accumulator > 0.0 {
            self.accumulator / FIXED_DT
        } else {
            0.0
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Simulated seconds, a whole number of steps.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_dt_value() {
        assert!(
            (FIXED_DT - 1.0 / 60.0).abs() < f64::EPSILON * 10.0,
            "FIXED_DT should equal 1/60"
        );
    }

    #[test]
    fn test_single_step() {
        let mut game_loop = GameLoop::new();
        let mut updates = 0u32;
        let steps = game_loop.advance(FIXED_DT, |_, _| updates += 1);
        assert_eq!(steps, 1);
        assert_eq!(updates, 1);
        assert!(game_loop.alpha() < 1e-9);
    }

    #[test]
    fn test_multiple_steps_report_sim_time() {
        let mut game_loop = GameLoop::new();
        let mut times = Vec::new();
        game_loop.advance(3.0 * FIXED_DT + 1e-9, |dt, t| {
            assert_eq!(dt, FIXED_DT);
            times.push(t);
        });
        assert_eq!(times.len(), 3);
        assert_eq!(times[0], 0.0);
        assert!((times[2] - 2.0 * FIXED_DT).abs() < 1e-12);
        assert!((game_loop.total_sim_time() - 3.0 * FIXED_DT).abs() < 1e-12);
    }

    #[test]
    fn test_partial_frame_accumulates() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.advance(0.5 * FIXED_DT, |_, _| {}), 0);
        assert!((game_loop.alpha() - 0.5).abs() < 1e-10);
        assert_eq!(game_loop.advance(0.6 * FIXED_DT, |_, _| {}), 1);
        assert!((game_loop.alpha() - 0.1).abs() < 1e-9);
        assert_eq!(game_loop.frame_count(), 2);
    }

    #[test]
    fn test_max_frame_time_clamp() {
        let mut game_loop = GameLoop::new();
        let steps = game_loop.advance(1.0, |_, _| {});
        let max_steps = (MAX_FRAME_TIME / FIXED_DT).ceil() as u32;
        assert!(steps <= max_steps, "expected at most {max_steps} steps, got {steps}");
        assert!(steps > 0);
    }

    #[test]
    fn test_zero_and_negative_frame_time() {
        let mut game_loop = GameLoop::new();
        assert_eq!(game_loop.advance(0.0, |_, _| {}), 0);
        assert_eq!(game_loop.advance(-1.0, |_, _| {}), 0);
        assert_eq!(game_loop.alpha(), 0.0);
        assert_eq!(game_loop.update_count(), 0);
    }

    #[test]
    fn test_slicing_does_not_change_step_count() {
        let frame_times = [0.017, 0.015, 0.020, 0.016, 0.033, 0.008, 0.018];
        let mut sliced = GameLoop::new();
        for &ft in &frame_times {
            sliced.advance(ft, |_, _| {});
        }
        let mut whole = GameLoop::new();
        whole.advance(frame_times.iter().sum(), |_, _| {});

        assert_eq!(sliced.update_count(), whole.update_count());
        assert!((sliced.alpha() - whole.alpha()).abs() < 1e-9);
    }

    #[test]
    fn test_default_is_empty() {
        let game_loop = GameLoop::default();
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(game_loop.update_count(), 0);
        assert_eq!(game_loop.total_sim_time(), 0.0);
    }
}
