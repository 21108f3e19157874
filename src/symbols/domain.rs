//! Bounded ranges of integers, the values an integer symbol or expression may take.

/// A contiguous, inclusive, range of integers.
///
/// A domain whose maximum is less than its minimum is empty.
/// No value is possible for an expression with an empty domain, and so any constraint on such an expression is unsatisfiable.
///
/// ```rust
/// # use propkb::symbols::Domain;
/// let d = Domain::new(0, 3);
/// assert_eq!(d.size(), 4);
/// assert!(d.contains(3) && !d.contains(4));
/// assert_eq!(d.sum(&Domain::new(-2, 1)), Some(Domain::new(-2, 4)));
/// assert_eq!(Domain::from(1..=2), Domain::new(1, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Domain {
    min: i64,
    max: i64,
}

impl Domain {
    pub const fn new(min: i64, max: i64) -> Self {
        Domain { min, max }
    }

    /// The domain of exactly one value.
    pub const fn singleton(value: i64) -> Self {
        Domain {
            min: value,
            max: value,
        }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// The count of values in the domain, saturating at [usize::MAX].
    pub fn size(&self) -> usize {
        match self.max < self.min {
            true => 0,
            false => {
                let size = (self.max as i128) - (self.min as i128) + 1;
                usize::try_from(size).unwrap_or(usize::MAX)
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// The values of the domain, in increasing order.
    pub fn values(&self) -> std::ops::RangeInclusive<i64> {
        self.min..=self.max
    }

    /// The position of a value in the domain, counting from the minimum.
    pub fn index_of(&self, value: i64) -> Option<usize> {
        match self.contains(value) {
            true => usize::try_from(value.abs_diff(self.min)).ok(),
            false => None,
        }
    }

    /// The domain of the sum of a value from `self` and a value from `other`.
    ///
    /// None if some bound of the sum is not an i64.
    /// The sum of an empty domain is empty.
    pub fn sum(&self, other: &Domain) -> Option<Domain> {
        match self.is_empty() || other.is_empty() {
            true => Some(Domain::new(1, 0)),
            false => Some(Domain {
                min: self.min.checked_add(other.min)?,
                max: self.max.checked_add(other.max)?,
            }),
        }
    }
}

impl From<std::ops::RangeInclusive<i64>> for Domain {
    fn from(range: std::ops::RangeInclusive<i64>) -> Self {
        Domain::new(*range.start(), *range.end())
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}
