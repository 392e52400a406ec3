//! Numeric intervals with inclusive or exclusive bounds.

use std::fmt;
use std::ops::{Bound, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

/// A numeric interval rule.
///
/// Built from the standard range syntax or the named constructors. Integer
/// and floating-point values are both measured against the same interval.
///
/// # Examples
///
/// ```rust
/// use schemaful::schema::Interval;
///
/// let non_negative = Interval::at_least(0.0);
/// assert!(non_negative.contains(42.0));
/// assert!(!non_negative.contains(-1.0));
///
/// let unit: Interval = (0.0..=1.0).into();
/// assert!(unit.contains(1.0));
///
/// let open: Interval = (0.0..1.0).into();
/// assert!(!open.contains(1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    low: Bound<f64>,
    high: Bound<f64>,
}

impl Interval {
    /// Creates an interval from explicit bounds.
    #[must_use]
    pub const fn new(low: Bound<f64>, high: Bound<f64>) -> Self {
        Self { low, high }
    }

    /// The interval `[low, +inf)`.
    #[must_use]
    pub const fn at_least(low: f64) -> Self {
        Self::new(Bound::Included(low), Bound::Unbounded)
    }

    /// The interval `(-inf, high]`.
    #[must_use]
    pub const fn at_most(high: f64) -> Self {
        Self::new(Bound::Unbounded, Bound::Included(high))
    }

    /// The closed interval `[low, high]`.
    #[must_use]
    pub const fn closed(low: f64, high: f64) -> Self {
        Self::new(Bound::Included(low), Bound::Included(high))
    }

    /// The open interval `(low, high)`.
    #[must_use]
    pub const fn open(low: f64, high: f64) -> Self {
        Self::new(Bound::Excluded(low), Bound::Excluded(high))
    }

    /// Checks whether a number lies within the interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        let above = match self.low {
            Bound::Included(low) => value >= low,
            Bound::Excluded(low) => value > low,
            Bound::Unbounded => true,
        };
        let below = match self.high {
            Bound::Included(high) => value <= high,
            Bound::Excluded(high) => value < high,
            Bound::Unbounded => true,
        };
        above && below
    }
}

impl From<RangeInclusive<f64>> for Interval {
    fn from(range: RangeInclusive<f64>) -> Self {
        let (low, high) = range.into_inner();
        Self::closed(low, high)
    }
}

impl From<Range<f64>> for Interval {
    fn from(range: Range<f64>) -> Self {
        Self::new(Bound::Included(range.start), Bound::Excluded(range.end))
    }
}

impl From<RangeFrom<f64>> for Interval {
    fn from(range: RangeFrom<f64>) -> Self {
        Self::at_least(range.start)
    }
}

impl From<RangeToInclusive<f64>> for Interval {
    fn from(range: RangeToInclusive<f64>) -> Self {
        Self::at_most(range.end)
    }
}

impl From<RangeTo<f64>> for Interval {
    fn from(range: RangeTo<f64>) -> Self {
        Self::new(Bound::Unbounded, Bound::Excluded(range.end))
    }
}

impl From<RangeFull> for Interval {
    fn from(_: RangeFull) -> Self {
        Self::new(Bound::Unbounded, Bound::Unbounded)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.low {
            Bound::Included(low) => write!(f, "[{low}")?,
            Bound::Excluded(low) => write!(f, "({low}")?,
            Bound::Unbounded => f.write_str("(-inf")?,
        }
        f.write_str(", ")?;
        match self.high {
            Bound::Included(high) => write!(f, "{high}]"),
            Bound::Excluded(high) => write!(f, "{high})"),
            Bound::Unbounded => f.write_str("+inf)"),
        }
    }
}
