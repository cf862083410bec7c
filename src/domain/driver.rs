//! Frame driver threading the player's position from one frame to the next.

use std::time::Duration;

use super::{engine, HeldDirections, Movement, MovementConfig, ObstacleSnapshot, Position};

/// Turns absolute frame timestamps into elapsed time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameClock {
    last: Option<Duration>,
}

impl FrameClock {
    /// Elapsed time since the previous tick. The first tick and a clock going backwards yield
    /// zero.
    pub fn tick(&mut self, now: Duration) -> Duration {
        let elapsed = self
            .last
            .map(|last| now.saturating_sub(last))
            .unwrap_or_default();
        self.last = Some(now);
        elapsed
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Driver {
    position: Position,
    clock: FrameClock,
}

impl Driver {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            clock: FrameClock::default(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves the player to `position` and restarts the clock.
    pub fn teleport(&mut self, position: Position) {
        self.position = position;
        self.clock.reset();
    }

    /// Advances the player to the frame at `now`.
    pub fn advance(
        &mut self,
        now: Duration,
        held: HeldDirections,
        config: &MovementConfig,
        obstacles: &ObstacleSnapshot,
    ) -> Movement {
        let elapsed = self.clock.tick(now);
        let movement = engine::resolve(self.position, held, elapsed, config, obstacles);
        self.position = movement.position;
        movement
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::domain::{Direction, Resolution};
    use crate::tests::{rect, snapshot};

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(Duration::from_secs(42)), Duration::ZERO);
    }

    #[rstest]
    #[case::forward(Duration::from_millis(100), Duration::from_millis(116), Duration::from_millis(16))]
    #[case::same(Duration::from_millis(100), Duration::from_millis(100), Duration::ZERO)]
    #[case::backwards(Duration::from_millis(100), Duration::from_millis(50), Duration::ZERO)]
    fn test_tick(#[case] first: Duration, #[case] second: Duration, #[case] expected: Duration) {
        let mut clock = FrameClock::default();
        clock.tick(first);
        assert_eq!(clock.tick(second), expected);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::default();
        clock.tick(Duration::from_secs(1));
        clock.reset();
        assert_eq!(clock.tick(Duration::from_secs(5)), Duration::ZERO);
    }

    #[test]
    fn test_driver_threads_position() {
        let config = MovementConfig::default();
        let obstacles = snapshot(&[("rock", rect(300.0, 200.0, 120.0, 80.0))]);
        let held = HeldDirections::NONE.with(Direction::Right);
        let mut driver = Driver::new(Position::new(100.0, 100.0));

        let first = driver.advance(Duration::from_millis(1000), held, &config, &obstacles);
        assert_eq!(first.resolution, Resolution::Free);
        assert_eq!(driver.position(), Position::new(100.0, 100.0));

        driver.advance(Duration::from_millis(1250), held, &config, &obstacles);
        driver.advance(Duration::from_millis(1500), held, &config, &obstacles);
        assert_abs_diff_eq!(driver.position().x(), 225.0);
        assert_abs_diff_eq!(driver.position().y(), 100.0);
    }

    #[test]
    fn test_teleport_restarts_clock() {
        let config = MovementConfig::default();
        let held = HeldDirections::NONE.with(Direction::Down);
        let mut driver = Driver::new(Position::new(0.0, 0.0));
        driver.advance(Duration::from_secs(1), held, &config, &ObstacleSnapshot::default());

        driver.teleport(Position::new(10.0, 10.0));
        driver.advance(Duration::from_secs(9), held, &config, &ObstacleSnapshot::default());
        assert_eq!(driver.position(), Position::new(10.0, 10.0));
    }
}
