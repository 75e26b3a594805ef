//! Edge policy: how coordinates past the border are resolved.

/// Topology of the grid border.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Toroidal: coordinates wrap modulo the dimension.
    #[default]
    Wrap,
    /// Clipped: off-grid coordinates do not exist.
    Bounded,
}

impl EdgePolicy {
    /// Map the `wrapEdges` toggle onto a policy.
    pub const fn from_wrap(wrap_edges: bool) -> Self {
        if wrap_edges { EdgePolicy::Wrap } else { EdgePolicy::Bounded }
    }

    /// Resolve one axis coordinate against a dimension.
    ///
    /// Returns `None` when the coordinate falls off a bounded grid, or when
    /// the dimension is zero.
    #[inline]
    pub fn normalize(self, coord: isize, dim: usize) -> Option<usize> {
        if dim == 0 {
            return None;
        }
        match self {
            EdgePolicy::Wrap => Some(coord.rem_euclid(dim as isize) as usize),
            EdgePolicy::Bounded => (coord >= 0 && (coord as usize) < dim).then_some(coord as usize),
        }
    }

    /// Resolve both axes; either one falling off skips the whole point.
    #[inline]
    pub fn resolve(self, x: isize, y: isize, cols: usize, rows: usize) -> Option<(usize, usize)> {
        Some((self.normalize(x, cols)?, self.normalize(y, rows)?))
    }

    /// Resolve `coord + delta` without overflowing near the `isize` limits.
    pub fn shift(self, coord: isize, delta: isize, dim: usize) -> Option<usize> {
        if dim == 0 {
            return None;
        }
        let target = coord as i128 + delta as i128;
        match self {
            EdgePolicy::Wrap => Some(target.rem_euclid(dim as i128) as usize),
            EdgePolicy::Bounded => (0..dim as i128).contains(&target).then_some(target as usize),
        }
    }

    /// Distinct in-grid coordinates covered by `center - radius ..= center + radius`.
    ///
    /// Bounded spans are clipped to the grid; wrapped spans covering the whole
    /// axis collapse to every coordinate once.
    pub fn span(self, center: isize, radius: isize, dim: usize) -> Vec<usize> {
        if dim == 0 || radius < 0 {
            return Vec::new();
        }
        let (center, radius, dim) = (center as i128, radius as i128, dim as i128);
        match self {
            EdgePolicy::Wrap if 2 * radius + 1 >= dim => (0..dim as usize).collect(),
            EdgePolicy::Wrap => (center - radius..=center + radius)
                .map(|c| c.rem_euclid(dim) as usize)
                .collect(),
            EdgePolicy::Bounded => {
                let lo = (center - radius).max(0);
                let hi = (center + radius).min(dim - 1);
                (lo..=hi).map(|c| c as usize).collect()
            }
        }
    }
}

impl From<bool> for EdgePolicy {
    fn from(wrap_edges: bool) -> Self {
        Self::from_wrap(wrap_edges)
    }
}
