use std::fmt;
use std::str::FromStr;

use super::LifeError;

/// Named live-cell shapes that can be stamped onto a grid.
///
/// Offsets are relative to the anchor cell, which sits near the middle of
/// each shape so a stamp lands centered on the click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum PatternName {
    /// Glider - simplest spaceship, moves diagonally
    #[default]
    Glider,
    /// Blinker - period 2 oscillator
    Blinker,
    /// Lightweight Spaceship (LWSS)
    Lwss,
    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    RPentomino,
}

const GLIDER: &[(isize, isize)] = &[
    (0, -1),
    (1, 0),
    (-1, 1), (0, 1), (1, 1),
];

const BLINKER: &[(isize, isize)] = &[(-1, 0), (0, 0), (1, 0)];

const LWSS: &[(isize, isize)] = &[
    (-1, -1), (2, -1),
    (-2, 0),
    (-2, 1), (2, 1),
    (-2, 2), (-1, 2), (0, 2), (1, 2),
];

const R_PENTOMINO: &[(isize, isize)] = &[
    (0, -1), (1, -1),
    (-1, 0), (0, 0),
    (0, 1),
];

impl PatternName {
    /// Get all available patterns
    pub const fn all() -> [PatternName; 4] {
        [
            PatternName::Glider,
            PatternName::Blinker,
            PatternName::Lwss,
            PatternName::RPentomino,
        ]
    }

    pub const fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            PatternName::Glider => GLIDER,
            PatternName::Blinker => BLINKER,
            PatternName::Lwss => LWSS,
            PatternName::RPentomino => R_PENTOMINO,
        }
    }

    /// Catalog key
    pub const fn key(self) -> &'static str {
        match self {
            PatternName::Glider => "glider",
            PatternName::Blinker => "blinker",
            PatternName::Lwss => "lwss",
            PatternName::RPentomino => "rPentomino",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PatternName::Glider => "Glider",
            PatternName::Blinker => "Blinker",
            PatternName::Lwss => "LWSS",
            PatternName::RPentomino => "R-pentomino",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            PatternName::Glider => "Moves diagonally (period 4)",
            PatternName::Blinker => "Oscillator (period 2)",
            PatternName::Lwss => "Lightweight Spaceship (period 4)",
            PatternName::RPentomino => "Methuselah - stabilizes at gen 1103",
        }
    }

    /// Bounding box (width, height) of the shape
    pub fn size(self) -> (usize, usize) {
        let offsets = self.offsets();
        let span = |axis: fn(&(isize, isize)) -> isize| {
            let min = offsets.iter().map(axis).min().unwrap_or(0);
            let max = offsets.iter().map(axis).max().unwrap_or(-1);
            (max - min + 1) as usize
        };
        (span(|o| o.0), span(|o| o.1))
    }

    /// Next pattern in catalog order, wrapping around
    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|&p| p == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

impl FromStr for PatternName {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|pattern| pattern.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| LifeError::UnknownPattern(s.to_string()))
    }
}

impl fmt::Display for PatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
