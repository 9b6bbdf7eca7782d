use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// One of the eight compass buckets a drag can resolve to.
///
/// Declaration order matters: when an angle is exactly between two
/// directions, the one declared first wins.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown direction {0:?}")]
pub struct ParseDirectionError(String);

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Reference angle in degrees, counter-clockwise from east.
    pub const fn angle(self) -> f64 {
        match self {
            Direction::North => 90.0,
            Direction::NorthEast => 45.0,
            Direction::East => 0.0,
            Direction::SouthEast => 315.0,
            Direction::South => 270.0,
            Direction::SouthWest => 225.0,
            Direction::West => 180.0,
            Direction::NorthWest => 135.0,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::NorthEast => "north_east",
            Direction::East => "east",
            Direction::SouthEast => "south_east",
            Direction::South => "south",
            Direction::SouthWest => "south_west",
            Direction::West => "west",
            Direction::NorthWest => "north_west",
        }
    }

    pub const fn abbreviation(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }

    /// Buckets an angle in degrees (any range) to the nearest direction.
    pub fn from_degrees(degrees: f64) -> Direction {
        let angle = normalize_degrees(degrees);
        let mut best = Direction::North;
        let mut best_distance = f64::INFINITY;
        for direction in Direction::iter() {
            let distance = circular_distance(angle, direction.angle());
            // Strict comparison keeps the earliest declared direction on ties.
            if distance < best_distance {
                best = direction;
                best_distance = distance;
            }
        }
        best
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase().replace('-', "_");
        Direction::iter()
            .find(|d| d.as_str() == needle || d.abbreviation().eq_ignore_ascii_case(&needle))
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

/// Classifies a pointer displacement into a compass direction.
///
/// The vector does not need to be normalized. The zero vector resolves to
/// [`Direction::East`] whatever the signs of its zeros.
pub fn classify(dx: f64, dy: f64) -> Direction {
    // atan2 gives ±180° for (-0.0, ±0.0).
    if dx == 0.0 && dy == 0.0 {
        return Direction::East;
    }
    Direction::from_degrees(dy.atan2(dx).to_degrees())
}

fn normalize_degrees(degrees: f64) -> f64 { degrees.rem_euclid(360.0) }

fn circular_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    diff.min(360.0 - diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(degrees: f64) -> (f64, f64) {
        let radians = degrees.to_radians();
        (radians.cos(), radians.sin())
    }

    #[test]
    fn axis_and_diagonal_vectors() {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_eq!(classify(1.0, 0.0), Direction::East);
        assert_eq!(classify(0.0, 1.0), Direction::North);
        assert_eq!(classify(-1.0, 0.0), Direction::West);
        assert_eq!(classify(0.0, -1.0), Direction::South);
        assert_eq!(classify(h, h), Direction::NorthEast);
        assert_eq!(classify(-h, h), Direction::NorthWest);
        assert_eq!(classify(-h, -h), Direction::SouthWest);
        assert_eq!(classify(h, -h), Direction::SouthEast);
    }

    #[test]
    fn every_direction_owns_its_sector() {
        for direction in Direction::iter() {
            let mut offset = -22.4;
            while offset <= 22.4 {
                let (dx, dy) = at(direction.angle() + offset);
                assert_eq!(classify(dx, dy), direction, "{direction} at offset {offset}");
                offset += 0.8;
            }
            let (dx, dy) = at(direction.angle() + 22.4);
            assert_eq!(classify(dx, dy), direction);
        }
    }

    #[test]
    fn exact_boundaries_go_to_the_earlier_declared_direction() {
        assert_eq!(Direction::from_degrees(22.5), Direction::NorthEast);
        assert_eq!(Direction::from_degrees(22.4), Direction::East);
        assert_eq!(Direction::from_degrees(22.6), Direction::NorthEast);

        assert_eq!(Direction::from_degrees(67.5), Direction::North);
        assert_eq!(Direction::from_degrees(292.5), Direction::SouthEast);
        assert_eq!(Direction::from_degrees(337.5), Direction::East);
        assert_eq!(Direction::from_degrees(337.4), Direction::SouthEast);
    }

    #[test]
    fn angles_outside_the_circle_are_normalized() {
        assert_eq!(Direction::from_degrees(-90.0), Direction::South);
        assert_eq!(Direction::from_degrees(450.0), Direction::North);
        assert_eq!(Direction::from_degrees(-1e-12), Direction::East);
        assert_eq!(Direction::from_degrees(359.9), Direction::East);
    }

    #[test]
    fn classify_ignores_positive_scaling() {
        let vectors = [(3.0, 1.0), (-2.0, 5.0), (-7.0, -0.5), (0.3, -4.0), (1.0, 1.0)];
        for (dx, dy) in vectors {
            let expected = classify(dx, dy);
            for k in [1e-3, 0.5, 2.0, 37.0, 1e6] {
                assert_eq!(classify(k * dx, k * dy), expected, "({dx}, {dy}) * {k}");
            }
        }
    }

    #[test]
    fn zero_vector_is_east() {
        assert_eq!(classify(0.0, 0.0), Direction::East);
        assert_eq!(classify(-0.0, 0.0), Direction::East);
        assert_eq!(classify(-0.0, -0.0), Direction::East);
        assert_eq!(classify(0.0, -0.0), Direction::East);
    }

    #[test]
    fn parses_long_and_short_names() {
        assert_eq!("north_east".parse(), Ok(Direction::NorthEast));
        assert_eq!("north-west".parse(), Ok(Direction::NorthWest));
        assert_eq!("SW".parse(), Ok(Direction::SouthWest));
        assert_eq!(" e ".parse(), Ok(Direction::East));
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn table_is_in_declaration_order() {
        let iterated: Vec<Direction> = Direction::iter().collect();
        assert_eq!(iterated, Direction::ALL.to_vec());
        for d in Direction::ALL {
            assert_eq!(Direction::from_degrees(d.angle()), d);
            let across = Direction::ALL[(d as usize + 4) % 8];
            assert_eq!(Direction::from_degrees(d.angle() + 180.0), across);
        }
    }
}
