use std::fmt;
use std::str::FromStr;

use super::{Cell, LifeError};

/// Birth/survival table indexed by live-neighbor count 0..=8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleTable {
    pub born: [bool; 9],
    pub survive: [bool; 9],
}

impl RuleTable {
    /// Build a table from B/S neighbor counts. Counts above 8 are ignored.
    pub const fn from_counts(born: &[u8], survive: &[u8]) -> Self {
        Self {
            born: Self::mask(born),
            survive: Self::mask(survive),
        }
    }

    const fn mask(counts: &[u8]) -> [bool; 9] {
        let mut table = [false; 9];
        let mut i = 0;
        while i < counts.len() {
            if counts[i] <= 8 {
                table[counts[i] as usize] = true;
            }
            i += 1;
        }
        table
    }

    /// Apply rule to compute next cell state
    #[inline]
    pub fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        let n = neighbors as usize;
        let alive = match current {
            Cell::Alive => self.survive[n],
            Cell::Dead => self.born[n],
        };
        Cell::from_alive(alive)
    }

    /// B/S notation, e.g. `B36/S23`
    pub fn notation(&self) -> String {
        let digits = |table: &[bool; 9]| -> String {
            table
                .iter()
                .enumerate()
                .filter(|&(_, &on)| on)
                .map(|(n, _)| char::from(b'0' + n as u8))
                .collect()
        };
        format!("B{}/S{}", digits(&self.born), digits(&self.survive))
    }
}

/// Fixed catalog of rule presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum RulePreset {
    /// Conway's Game of Life (B3/S23)
    #[default]
    Conway,
    /// HighLife (B36/S23), known for its replicator
    HighLife,
    /// Seeds (B2/S), every live cell dies each generation
    Seeds,
}

const CONWAY: RuleTable = RuleTable::from_counts(&[3], &[2, 3]);
const HIGHLIFE: RuleTable = RuleTable::from_counts(&[3, 6], &[2, 3]);
const SEEDS: RuleTable = RuleTable::from_counts(&[2], &[]);

impl RulePreset {
    /// Get all available presets
    pub const fn all() -> [RulePreset; 3] {
        [RulePreset::Conway, RulePreset::HighLife, RulePreset::Seeds]
    }

    pub const fn table(self) -> &'static RuleTable {
        match self {
            RulePreset::Conway => &CONWAY,
            RulePreset::HighLife => &HIGHLIFE,
            RulePreset::Seeds => &SEEDS,
        }
    }

    /// Catalog key
    pub const fn key(self) -> &'static str {
        match self {
            RulePreset::Conway => "conway",
            RulePreset::HighLife => "highlife",
            RulePreset::Seeds => "seeds",
        }
    }

    /// Display name for UI
    pub const fn name(self) -> &'static str {
        match self {
            RulePreset::Conway => "Conway",
            RulePreset::HighLife => "HighLife",
            RulePreset::Seeds => "Seeds",
        }
    }

    /// Short description
    pub const fn description(self) -> &'static str {
        match self {
            RulePreset::Conway => "B3/S23 - Classic",
            RulePreset::HighLife => "B36/S23 - Replicators",
            RulePreset::Seeds => "B2/S - Exploding",
        }
    }

    /// Next preset in catalog order, wrapping around
    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|&r| r == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

impl FromStr for RulePreset {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|preset| preset.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| LifeError::UnknownRulePreset(s.to_string()))
    }
}

impl fmt::Display for RulePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
