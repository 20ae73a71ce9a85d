use crate::value::ProgressValue;
use tracing::{debug, trace};

/// Owns the progress of every section and enforces `sum(values) <= capacity`.
///
/// The invariant is upheld on every write: a section can only be given what
/// is left after all *other* sections' current values. Out-of-range indices
/// are ignored on write and read as zero, so a stale index during a reload
/// never panics.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressAllocator<V: ProgressValue> {
    values:   Vec<V>,
    /// Optional per-section cap (e.g. a section's own step budget).
    limits:   Vec<Option<V>>,
    capacity: V,
    /// Bumped on every write that changes a stored value.
    revision: u64,
}

impl<V: ProgressValue> Default for ProgressAllocator<V> {
    fn default() -> Self {
        Self {
            values:   Vec::new(),
            limits:   Vec::new(),
            capacity: V::ZERO,
            revision: 0,
        }
    }
}

impl ProgressAllocator<f32> {
    /// `section_count` sections sharing a normalised capacity of `1.0`.
    pub fn fractional(section_count: usize) -> Self {
        Self::new(section_count, 1.0)
    }
}

impl ProgressAllocator<i32> {
    /// `section_count` sections sharing `total_steps` whole steps.
    pub fn stepped(section_count: usize, total_steps: i32) -> Self {
        Self::new(section_count, total_steps)
    }
}

impl<V: ProgressValue> ProgressAllocator<V> {
    pub fn new(section_count: usize, capacity: V) -> Self {
        let mut allocator = Self::default();
        allocator.configure(section_count, capacity);
        allocator
    }

    /// Resize to `section_count` sections, all at zero, and set the capacity.
    ///
    /// A negative (or NaN) capacity becomes zero. Section limits are cleared.
    pub fn configure(&mut self, section_count: usize, capacity: V) {
        self.values.clear();
        self.values.resize(section_count, V::ZERO);
        self.limits.clear();
        self.limits.resize(section_count, None);
        self.capacity = capacity.non_negative();
        self.revision = self.revision.wrapping_add(1);

        debug!(sections = section_count, capacity = ?self.capacity, "progress allocator configured");
    }

    /// Store `value` for `section`, clamped to `[0, remaining]` and to the
    /// section's limit if one is set.
    ///
    /// Replaces the previous value. No-op when `section` is out of range.
    pub fn set_progress(&mut self, section: usize, value: V) {
        if section >= self.values.len() {
            trace!(section, sections = self.values.len(), "set_progress ignored: index out of range");
            return;
        }

        let remaining = self.capacity.minus(self.sum_excluding(section)).non_negative();
        let mut clamped = min(value.non_negative(), remaining);
        if let Some(limit) = self.limits[section] {
            clamped = min(clamped, limit);
        }
        let clamped = self.fit_within_capacity(section, clamped);

        if clamped != value {
            trace!(section, requested = ?value, stored = ?clamped, "progress clamped");
        }

        if self.values[section] != clamped {
            self.values[section] = clamped;
            self.revision = self.revision.wrapping_add(1);
        }
    }

    /// Move `section` by `delta` (negative retreats), through the same clamp.
    pub fn advance(&mut self, section: usize, delta: V) {
        let current = self.progress(section);
        self.set_progress(section, current.plus(delta));
    }

    /// Stored value for `section`; zero when out of range.
    pub fn progress(&self, section: usize) -> V {
        self.values.get(section).copied().unwrap_or(V::ZERO)
    }

    /// Sum of every section's value.
    pub fn total_progress(&self) -> V {
        self.values.iter().fold(V::ZERO, |acc, &v| acc.plus(v))
    }

    /// Zero every section one at a time, so each intermediate state is
    /// itself a valid allocation.
    pub fn reset_progress(&mut self) {
        for section in 0..self.values.len() {
            self.set_progress(section, V::ZERO);
        }
    }

    /// Store `fraction` of the whole capacity for `section`.
    ///
    /// Step allocators round the converted value down to a whole step.
    pub fn set_fraction(&mut self, section: usize, fraction: f32) {
        self.set_progress(section, V::from_ratio(fraction, self.capacity));
    }

    /// Cap `section` independently of the shared capacity. `None` removes the cap.
    ///
    /// A value already above the new cap is pulled down to it.
    pub fn set_section_limit(&mut self, section: usize, limit: Option<V>) {
        let Some(slot) = self.limits.get_mut(section) else {
            return;
        };
        *slot = limit.map(ProgressValue::non_negative);

        let current = self.progress(section);
        self.set_progress(section, current);
    }

    pub fn section_limit(&self, section: usize) -> Option<V> {
        self.limits.get(section).copied().flatten()
    }

    #[inline]
    pub fn section_count(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn capacity(&self) -> V {
        self.capacity
    }

    /// Capacity not yet claimed by any section.
    pub fn remaining(&self) -> V {
        self.capacity.minus(self.total_progress()).non_negative()
    }

    pub fn is_complete(&self) -> bool {
        !self.values.is_empty() && self.remaining() == V::ZERO
    }

    /// All stored values in index order.
    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// `section`'s share of the capacity (its share of the track width).
    pub fn fraction(&self, section: usize) -> f32 {
        self.progress(section).ratio(self.capacity)
    }

    /// Per-section fractions, ready to hand to the layout pass.
    pub fn fractions(&self) -> Vec<f32> {
        self.values.iter().map(|v| v.ratio(self.capacity)).collect()
    }

    /// Changes whenever a stored value changes; hosts compare it to decide
    /// whether a new layout pass is due.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Shrink `value` until the total, summed in index order exactly as
    /// [`total_progress`](Self::total_progress) does, stays within capacity.
    ///
    /// `remaining` is computed in a different order, so fractional values can
    /// land a rounding step too high. Terminates because `value` strictly
    /// decreases and zero always fits.
    fn fit_within_capacity(&self, section: usize, mut value: V) -> V {
        loop {
            let total = self.total_with(section, value);
            if total <= self.capacity || value == V::ZERO {
                return value;
            }
            let trimmed = value.minus(total.minus(self.capacity)).non_negative();
            value = if trimmed < value { trimmed } else { value.step_down() };
        }
    }

    /// Index-order total with `section` holding `value`.
    fn total_with(&self, section: usize, value: V) -> V {
        self.values.iter().enumerate().fold(V::ZERO, |acc, (i, &v)| {
            acc.plus(if i == section { value } else { v })
        })
    }

    fn sum_excluding(&self, section: usize) -> V {
        self.values
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != section)
            .fold(V::ZERO, |acc, (_, &v)| acc.plus(v))
    }
}

fn min<V: PartialOrd>(a: V, b: V) -> V {
    if b < a {
        b
    } else {
        a
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn last_section_fills_exactly_the_remainder() {
        let mut alloc = ProgressAllocator::fractional(3);
        alloc.set_progress(0, 0.2);
        alloc.set_progress(1, 0.3);
        alloc.set_progress(2, 1000.0);
        assert!(approx(alloc.progress(2), 0.5));
        assert!(approx(alloc.total_progress(), 1.0));
    }

    #[test]
    fn filling_the_remainder_never_overshoots() {
        let mut alloc = ProgressAllocator::fractional(5);
        for (i, &v) in [0.32775852, 0.18494308, 0.17585403, 0.11361015].iter().enumerate() {
            alloc.set_progress(i, v);
        }
        alloc.set_progress(4, 1000.0);
        assert!(alloc.total_progress() <= alloc.capacity());
        assert!(alloc.progress(4) > 0.19);

        alloc.set_progress(0, 1000.0);
        assert!(alloc.total_progress() <= alloc.capacity());
    }

    #[test]
    fn negative_value_clamps_to_zero() {
        let mut alloc = ProgressAllocator::fractional(2);
        alloc.set_progress(0, 0.4);
        alloc.set_progress(0, -5.0);
        assert_eq!(alloc.progress(0), 0.0);
    }

    #[test]
    fn nan_value_clamps_to_zero() {
        let mut alloc = ProgressAllocator::fractional(1);
        alloc.set_progress(0, f32::NAN);
        assert_eq!(alloc.progress(0), 0.0);
    }

    #[test]
    fn set_replaces_rather_than_adds() {
        let mut alloc = ProgressAllocator::fractional(2);
        alloc.set_progress(0, 0.6);
        alloc.set_progress(0, 0.1);
        assert!(approx(alloc.progress(0), 0.1));
    }

    #[test]
    fn section_can_reclaim_its_own_value() {
        let mut alloc = ProgressAllocator::fractional(2);
        alloc.set_progress(0, 0.5);
        alloc.set_progress(1, 0.5);
        alloc.set_progress(0, 0.5);
        assert!(approx(alloc.progress(0), 0.5));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut alloc = ProgressAllocator::fractional(2);
        let before = alloc.revision();
        alloc.set_progress(7, 0.5);
        alloc.advance(7, 0.5);
        assert_eq!(alloc.progress(7), 0.0);
        assert_eq!(alloc.total_progress(), 0.0);
        assert_eq!(alloc.revision(), before);
    }

    #[test]
    fn advance_moves_both_directions() {
        let mut alloc = ProgressAllocator::stepped(2, 10);
        alloc.advance(0, 4);
        alloc.advance(0, 3);
        assert_eq!(alloc.progress(0), 7);
        alloc.advance(0, -10);
        assert_eq!(alloc.progress(0), 0);
    }

    #[test]
    fn advance_stops_at_capacity() {
        let mut alloc = ProgressAllocator::stepped(2, 10);
        alloc.set_progress(1, 6);
        alloc.advance(0, 9);
        assert_eq!(alloc.progress(0), 4);
        assert!(alloc.is_complete());
    }

    #[test]
    fn reset_zeroes_every_section() {
        let mut alloc = ProgressAllocator::fractional(3);
        alloc.set_progress(0, 0.3);
        alloc.set_progress(1, 0.3);
        alloc.set_progress(2, 0.3);
        alloc.reset_progress();
        assert_eq!(alloc.total_progress(), 0.0);
        assert!(alloc.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn configure_discards_previous_state() {
        let mut alloc = ProgressAllocator::stepped(2, 10);
        alloc.set_progress(0, 5);
        alloc.set_section_limit(1, Some(2));
        alloc.configure(4, 20);
        assert_eq!(alloc.section_count(), 4);
        assert_eq!(alloc.capacity(), 20);
        assert_eq!(alloc.total_progress(), 0);
        assert_eq!(alloc.section_limit(1), None);
    }

    #[test]
    fn negative_capacity_becomes_zero() {
        let mut alloc = ProgressAllocator::new(2, -3.0f32);
        alloc.set_progress(0, 0.5);
        assert_eq!(alloc.capacity(), 0.0);
        assert_eq!(alloc.progress(0), 0.0);
        assert_eq!(alloc.fraction(0), 0.0);
    }

    #[test]
    fn section_limit_caps_below_remaining() {
        let mut alloc = ProgressAllocator::stepped(3, 12);
        alloc.set_section_limit(0, Some(4));
        alloc.set_progress(0, 10);
        assert_eq!(alloc.progress(0), 4);
        assert_eq!(alloc.remaining(), 8);
    }

    #[test]
    fn tightening_a_limit_pulls_the_value_down() {
        let mut alloc = ProgressAllocator::stepped(1, 10);
        alloc.set_progress(0, 8);
        alloc.set_section_limit(0, Some(3));
        assert_eq!(alloc.progress(0), 3);
    }

    #[test]
    fn step_fraction_rounds_down() {
        let mut alloc = ProgressAllocator::stepped(2, 10);
        alloc.set_fraction(0, 0.55);
        assert_eq!(alloc.progress(0), 5);
        assert_eq!(alloc.fraction(0), 0.5);
    }

    #[test]
    fn fractions_follow_capacity() {
        let mut alloc = ProgressAllocator::stepped(2, 8);
        alloc.set_progress(0, 2);
        alloc.set_progress(1, 6);
        assert_eq!(alloc.fractions(), vec![0.25, 0.75]);
    }

    #[test]
    fn revision_changes_only_on_effective_writes() {
        let mut alloc = ProgressAllocator::fractional(1);
        let start = alloc.revision();
        alloc.set_progress(0, 0.0);
        assert_eq!(alloc.revision(), start);
        alloc.set_progress(0, 0.25);
        assert_eq!(alloc.revision(), start + 1);
    }
}
