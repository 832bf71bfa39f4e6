//! Per-child edge offsets along a panel's stacking axis.
//!
//! Scroll viewers snap to these offsets. The tracker is recomputed on every
//! arrange pass and reports whether anything differs from the previous pass,
//! so that the owning panel raises its notification only on real changes.

use alloc::vec::Vec;

/// Far-edge offsets (right or bottom) of each child, in child order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapPoints {
    points: Vec<f32>,
}

impl SnapPoints {
    /// An empty tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Grows with zeroes or truncates from the end to hold exactly `count`
    /// entries. Returns true if the length changed.
    pub fn resize(&mut self, count: usize) -> bool {
        let changed = self.points.len() != count;
        self.points.resize(count, 0.0);
        changed
    }

    /// Stores `value` at `index`. Returns true if it differs from the value
    /// recorded there by the previous pass.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds; call [`resize`](Self::resize) first.
    pub fn record(&mut self, index: usize, value: f32) -> bool {
        let slot = &mut self.points[index];
        #[allow(clippy::float_cmp)]
        let changed = *slot != value;
        *slot = value;
        changed
    }

    /// The recorded offsets.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.points
    }

    /// Number of recorded offsets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no offsets are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_reports_count_changes() {
        let mut snap = SnapPoints::new();

        assert!(!snap.resize(0));
        assert!(snap.resize(3));
        assert_eq!(snap.as_slice(), &[0.0, 0.0, 0.0]);
        assert!(!snap.resize(3));
        assert!(snap.resize(1));
        assert_eq!(snap.len(), 1);
    }

    #[test]
    fn test_record_reports_differences_only() {
        let mut snap = SnapPoints::new();
        snap.resize(2);

        assert!(snap.record(0, 50.0));
        assert!(!snap.record(0, 50.0));
        assert!(!snap.record(1, 0.0));
        assert!(snap.record(1, 84.0));
        assert_eq!(snap.as_slice(), &[50.0, 84.0]);
    }

    #[test]
    fn test_truncation_keeps_leading_entries() {
        let mut snap = SnapPoints::new();
        snap.resize(3);
        snap.record(0, 1.0);
        snap.record(1, 2.0);
        snap.record(2, 3.0);

        snap.resize(2);

        assert_eq!(snap.as_slice(), &[1.0, 2.0]);
    }
}
