//! The repair run's counters.

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Three monotonically nondecreasing counters accumulated over a repair run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub merged: usize,
    pub nm_fixed: usize,
    pub holes_filled: usize,
}

impl Add for Report {
    type Output = Report;

    fn add(self, rhs: Report) -> Report {
        Report {
            merged: self.merged + rhs.merged,
            nm_fixed: self.nm_fixed + rhs.nm_fixed,
            holes_filled: self.holes_filled + rhs.holes_filled,
        }
    }
}

impl std::iter::Sum for Report {
    fn sum<I: Iterator<Item = Report>>(iter: I) -> Self {
        iter.fold(Report::default(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_componentwise() {
        let a = Report { merged: 1, nm_fixed: 2, holes_filled: 3 };
        let b = Report { merged: 10, nm_fixed: 20, holes_filled: 30 };
        assert_eq!(a + b, Report { merged: 11, nm_fixed: 22, holes_filled: 33 });
    }

    #[test]
    fn sum_over_empty_is_default() {
        let total: Report = std::iter::empty().sum();
        assert_eq!(total, Report::default());
    }
}
