//! Directions held by the player during a frame.

use std::slice::Iter;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn iter() -> Iter<'static, Direction> {
        static DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];
        DIRECTIONS.iter()
    }

    /// Maps a browser style key name (`ArrowUp`, `w`, ...) to a direction. Unknown keys are
    /// `None` so callers can drop them.
    pub fn from_key_name(name: &str) -> Option<Direction> {
        match name.to_ascii_lowercase().as_str() {
            "arrowup" | "w" => Some(Direction::Up),
            "arrowdown" | "s" => Some(Direction::Down),
            "arrowleft" | "a" => Some(Direction::Left),
            "arrowright" | "d" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Unit contribution to the raw `(dx, dy)` axis; y grows downwards.
    pub fn unit(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Immutable per-frame snapshot of which directions are held.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct HeldDirections {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldDirections {
    pub const NONE: HeldDirections = HeldDirections {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    pub const fn new(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    pub fn from_key_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        names
            .into_iter()
            .filter_map(Direction::from_key_name)
            .collect()
    }

    pub fn with(self, direction: Direction) -> Self {
        let mut held = self;
        held.set(direction, true);
        held
    }

    pub fn set(&mut self, direction: Direction, pressed: bool) {
        match direction {
            Direction::Up => self.up = pressed,
            Direction::Down => self.down = pressed,
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
        }
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }

    /// Sum of the unit contributions of all held directions. Opposite directions cancel out.
    pub fn axis(&self) -> (f64, f64) {
        Direction::iter()
            .filter(|d| self.is_held(**d))
            .map(|d| d.unit())
            .fold((0.0, 0.0), |(dx, dy), (ux, uy)| {
                (dx + f64::from(ux), dy + f64::from(uy))
            })
    }
}

impl FromIterator<Direction> for HeldDirections {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        iter.into_iter()
            .fold(HeldDirections::NONE, |held, direction| held.with(direction))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("ArrowUp", Some(Direction::Up))]
    #[case("ArrowDown", Some(Direction::Down))]
    #[case("ArrowLeft", Some(Direction::Left))]
    #[case("ArrowRight", Some(Direction::Right))]
    #[case("W", Some(Direction::Up))]
    #[case("d", Some(Direction::Right))]
    #[case("Enter", None)]
    #[case("", None)]
    fn test_direction_from_key_name(#[case] name: &str, #[case] expected: Option<Direction>) {
        assert_eq!(Direction::from_key_name(name), expected);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let held = HeldDirections::from_key_names(["Shift", "ArrowLeft", "Escape"]);
        assert_eq!(held, HeldDirections::new(false, false, true, false));
    }

    #[rstest]
    #[case::none(HeldDirections::NONE, (0.0, 0.0))]
    #[case::up(HeldDirections::new(true, false, false, false), (0.0, -1.0))]
    #[case::down_right(HeldDirections::new(false, true, false, true), (1.0, 1.0))]
    #[case::left_right(HeldDirections::new(false, false, true, true), (0.0, 0.0))]
    #[case::all(HeldDirections::new(true, true, true, true), (0.0, 0.0))]
    #[case::up_down_left(HeldDirections::new(true, true, true, false), (-1.0, 0.0))]
    fn test_axis(#[case] held: HeldDirections, #[case] expected: (f64, f64)) {
        assert_eq!(held.axis(), expected);
    }

    #[test]
    fn test_collect_directions() {
        let held: HeldDirections = [Direction::Up, Direction::Right, Direction::Up]
            .into_iter()
            .collect();
        assert!(held.is_held(Direction::Up));
        assert!(held.is_held(Direction::Right));
        assert!(!held.is_held(Direction::Down));
        assert!(!held.is_empty());
        assert!(HeldDirections::default().is_empty());
    }

    #[test]
    fn test_set_release() {
        let mut held = HeldDirections::NONE.with(Direction::Down);
        held.set(Direction::Down, false);
        assert_eq!(held, HeldDirections::NONE);
    }
}
