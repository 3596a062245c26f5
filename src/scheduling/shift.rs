use crate::scheduling::time::are_consecutive_from_one;

/// A validated, contiguous run of slot positions starting at position 1.
///
/// Advisor slot configuration is only meaningful when the claimed positions
/// form `[1, 2, ..., n]`; a multi-slot service can then be matched against the
/// run length. Construction goes through [`ShiftClaim::from_positions`] so an
/// invalid configuration is unrepresentable as a claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftClaim {
    slots: usize,
}

impl ShiftClaim {
    /// Build a claim from an advisor's configured positions.
    ///
    /// Returns `None` when the positions have gaps, do not start at 1, or are
    /// empty (an advisor with no configured slots holds no claim).
    pub fn from_positions(positions: &[i32]) -> Option<Self> {
        if positions.is_empty() {
            return None;
        }
        let mut deduped = positions.to_vec();
        deduped.sort_unstable();
        deduped.dedup();
        if !are_consecutive_from_one(&deduped) {
            return None;
        }
        Some(Self {
            slots: deduped.len(),
        })
    }

    /// Number of contiguous slots the claim covers, always at least 1.
    pub fn slot_count(&self) -> usize {
        self.slots
    }

    /// Whether a service occupying `required` consecutive slots starting at
    /// 1-based position `first` fits entirely within this claim.
    pub fn covers(&self, first: i32, required: u32) -> bool {
        first >= 1 && first as i64 + required as i64 - 1 <= self.slots as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_gaps_and_offsets() {
        assert!(ShiftClaim::from_positions(&[1, 3]).is_none());
        assert!(ShiftClaim::from_positions(&[2, 3, 4]).is_none());
        assert!(ShiftClaim::from_positions(&[]).is_none());
    }

    #[test]
    fn accepts_contiguous_runs_in_any_order() {
        let claim = ShiftClaim::from_positions(&[4, 2, 1, 3]).unwrap();
        assert_eq!(claim.slot_count(), 4);
    }

    #[test]
    fn duplicate_positions_collapse() {
        let claim = ShiftClaim::from_positions(&[1, 1, 2, 2]).unwrap();
        assert_eq!(claim.slot_count(), 2);
    }

    #[test]
    fn every_claim_covers_at_least_one_slot() {
        let claim = ShiftClaim::from_positions(&[1]).unwrap();
        assert_eq!(claim.slot_count(), 1);
        assert!(claim.covers(1, 1));
    }

    #[test]
    fn coverage_respects_the_run_length() {
        let claim = ShiftClaim::from_positions(&[1, 2, 3]).unwrap();
        assert!(claim.covers(1, 3));
        assert!(claim.covers(3, 1));
        assert!(!claim.covers(3, 2));
        assert!(!claim.covers(0, 1));
        assert!(!claim.covers(4, 1));
    }
}
