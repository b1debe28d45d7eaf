use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::scalar::Ordinal;

const WORDS: usize = 4;

/// Pascal `set of LOW..HIGH`, backed by a 256-bit bitmap.
///
/// Elements outside `LOW..=HIGH` (and always outside `0..=255`) are
/// silently ignored by [`include`](Self::include) and
/// [`exclude`](Self::exclude), and are never members.
///
/// Comparison follows Pascal: `a <= b` means *a is a subset of b*, so two
/// sets that are neither subset nor superset of each other are unordered.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PasSet<const LOW: i64 = 0, const HIGH: i64 = 255> {
    bits: [u64; WORDS],
}

impl<const LOW: i64, const HIGH: i64> PasSet<LOW, HIGH> {
    /// The empty set `[]`.
    pub const EMPTY: Self = Self { bits: [0; WORDS] };

    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// `[e1, e2, ...]`.
    pub fn from_elements<E: Ordinal>(elements: impl IntoIterator<Item = E>) -> Self {
        let mut set = Self::new();
        for element in elements {
            set.include(element);
        }
        set
    }

    /// `[low..high]`. Empty when `low > high`.
    pub fn from_range(low: impl Ordinal, high: impl Ordinal) -> Self {
        let mut set = Self::new();
        let low = low.ordinal().max(LOW).max(0);
        let high = high.ordinal().min(HIGH).min(255);
        for element in low..=high {
            set.include(element);
        }
        set
    }

    /// Bit position for `element`, if it is inside the set's range.
    fn slot(element: impl Ordinal) -> Option<(usize, u64)> {
        let value = element.ordinal();
        if value < LOW || value > HIGH {
            return None;
        }
        let value = u8::try_from(value).ok()?;
        Some((usize::from(value / 64), 1u64 << (value % 64)))
    }

    /// `Include(s, e)`.
    pub fn include(&mut self, element: impl Ordinal) {
        if let Some((word, mask)) = Self::slot(element) {
            self.bits[word] |= mask;
        }
    }

    /// `Exclude(s, e)`.
    pub fn exclude(&mut self, element: impl Ordinal) {
        if let Some((word, mask)) = Self::slot(element) {
            self.bits[word] &= !mask;
        }
    }

    /// `e in s`.
    pub fn contains(&self, element: impl Ordinal) -> bool {
        Self::slot(element).is_some_and(|(word, mask)| self.bits[word] & mask != 0)
    }

    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.bits
            .iter()
            .zip(&other.bits)
            .all(|(a, b)| a & !b == 0)
    }

    pub fn is_superset_of(&self, other: &Self) -> bool {
        other.is_subset_of(self)
    }

    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|w| *w == 0)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |&e| self.contains(e))
    }

    fn zip_with(self, other: Self, f: impl Fn(u64, u64) -> u64) -> Self {
        let mut bits = [0; WORDS];
        for (i, slot) in bits.iter_mut().enumerate() {
            *slot = f(self.bits[i], other.bits[i]);
        }
        Self { bits }
    }
}

impl<const LOW: i64, const HIGH: i64> Default for PasSet<LOW, HIGH> {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// `a + b`: union.
impl<const LOW: i64, const HIGH: i64> Add for PasSet<LOW, HIGH> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a | b)
    }
}

/// `a * b`: intersection.
impl<const LOW: i64, const HIGH: i64> Mul for PasSet<LOW, HIGH> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a & b)
    }
}

/// `a - b`: difference.
impl<const LOW: i64, const HIGH: i64> Sub for PasSet<LOW, HIGH> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a & !b)
    }
}

impl<const LOW: i64, const HIGH: i64> PartialOrd for PasSet<LOW, HIGH> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_subset_of(other), other.is_subset_of(self)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }
}

impl<const LOW: i64, const HIGH: i64> fmt::Debug for PasSet<LOW, HIGH> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// `Include(s, e)`.
pub fn include<const LOW: i64, const HIGH: i64>(
    set: &mut PasSet<LOW, HIGH>,
    element: impl Ordinal,
) {
    set.include(element);
}

/// `Exclude(s, e)`.
pub fn exclude<const LOW: i64, const HIGH: i64>(
    set: &mut PasSet<LOW, HIGH>,
    element: impl Ordinal,
) {
    set.exclude(element);
}

/// `e in s`.
pub fn in_set<const LOW: i64, const HIGH: i64>(
    set: &PasSet<LOW, HIGH>,
    element: impl Ordinal,
) -> bool {
    set.contains(element)
}
