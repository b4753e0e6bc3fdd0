use std::fmt;

use crate::error::{GeometryError, Result};
use crate::math::Direction;

/// A world axis. `None` is accepted by lookups only to be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    #[default]
    None,
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Index into `[x, y, z]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnspecifiedOrientation`] for `Axis::None`.
    pub fn index(self) -> Result<usize> {
        match self {
            Self::X => Ok(0),
            Self::Y => Ok(1),
            Self::Z => Ok(2),
            Self::None => Err(GeometryError::UnspecifiedOrientation { parameter: "axis" }.into()),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        };
        f.write_str(name)
    }
}

/// One of the six axis-aligned directions, named after the matching
/// [`Direction`] constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardinalOrientation {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
    Forward,
    Backward,
}

impl CardinalOrientation {
    pub const ALL: [Self; 6] = [
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
        Self::Forward,
        Self::Backward,
    ];

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::None => Axis::None,
            Self::Left | Self::Right => Axis::X,
            Self::Up | Self::Down => Axis::Y,
            Self::Forward | Self::Backward => Axis::Z,
        }
    }

    /// `+1.0` or `-1.0` along [`axis`](Self::axis); `0.0` for `None`.
    #[must_use]
    pub const fn axis_sign(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Left | Self::Up | Self::Forward => 1.0,
            Self::Right | Self::Down | Self::Backward => -1.0,
        }
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::None => Direction::NONE,
            Self::Left => Direction::LEFT,
            Self::Right => Direction::RIGHT,
            Self::Up => Direction::UP,
            Self::Down => Direction::DOWN,
            Self::Forward => Direction::FORWARD,
            Self::Backward => Direction::BACKWARD,
        }
    }

    /// The orientation along `axis` with the sign of `value`. Zero counts as
    /// positive.
    #[must_use]
    pub fn from_axis_and_sign(axis: Axis, value: f64) -> Self {
        let positive = value >= 0.0;
        match (axis, positive) {
            (Axis::None, _) => Self::None,
            (Axis::X, true) => Self::Left,
            (Axis::X, false) => Self::Right,
            (Axis::Y, true) => Self::Up,
            (Axis::Y, false) => Self::Down,
            (Axis::Z, true) => Self::Forward,
            (Axis::Z, false) => Self::Backward,
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn axis_index_rejects_none() {
        assert_eq!(Axis::Y.index().unwrap(), 1);
        assert!(Axis::None.index().is_err());
    }

    #[test]
    fn cardinals_match_direction_constants() {
        for side in CardinalOrientation::ALL {
            let direction = side.direction();
            let index = side.axis().index().unwrap();
            let components = [direction.x(), direction.y(), direction.z()];
            assert_eq!(components[index], side.axis_sign());
            assert_eq!(side.opposite().direction(), direction.reversed());
            assert_eq!(CardinalOrientation::from_axis_and_sign(side.axis(), side.axis_sign()), side);
        }
        assert!(CardinalOrientation::None.direction().is_none());
    }
}
