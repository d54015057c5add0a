//! Road distance with a total order.
//!
//! Edge weights and accumulated path lengths are `f64` kilometres.  `f64` has
//! no total order, so it cannot key a `BinaryHeap` directly.  `Distance`
//! guarantees its value lies in `0 ..= MAX_KM`, which makes `f64::total_cmp`
//! agree with numeric order and lets the type implement `Ord`.
//!
//! With every segment at most `MAX_KM`, any path sum stays far below
//! `f64::MAX`, so accumulated route distances are finite.
//!
//! There is no infinite `Distance`: an unreachable destination is an absent
//! route, not a route of infinite length.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

use crate::{CoreError, CoreResult};

#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    /// Largest accepted single distance, one trillion kilometres.
    pub const MAX_KM: f64 = 1e12;

    /// Validate and wrap a raw kilometre value.
    ///
    /// Rejects negative values, NaN, infinities, and anything above
    /// [`MAX_KM`](Self::MAX_KM).
    pub fn new(km: f64) -> CoreResult<Self> {
        if (0.0..=Self::MAX_KM).contains(&km) {
            // Normalise -0.0 so that equal distances hash and compare equal.
            Ok(Self(km + 0.0))
        } else {
            Err(CoreError::InvalidDistance(km))
        }
    }

    #[inline]
    pub fn km(self) -> f64 {
        self.0
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Distance {
    type Output = Distance;

    /// Sums of bounded distances cannot overflow in practice; the clamp at
    /// `f64::MAX` only keeps the finiteness invariant unconditional.
    #[inline]
    fn add(self, rhs: Distance) -> Distance {
        let sum = self.0 + rhs.0;
        Distance(if sum.is_finite() { sum } else { f64::MAX })
    }
}

impl TryFrom<f64> for Distance {
    type Error = CoreError;

    fn try_from(km: f64) -> CoreResult<Self> {
        Self::new(km)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Distance {
    fn deserialize<D: serde::Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        let km = f64::deserialize(de)?;
        Distance::new(km).map_err(serde::de::Error::custom)
    }
}
