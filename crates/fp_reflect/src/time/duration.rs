use alloc::string::ToString;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;

use crate::convert::ConvertError;
use crate::time::{Count, Day, Hour, Milli, Minute, Second, TimeUnit, UnitKind, parse_quantity};

// -----------------------------------------------------------------------------
// DurationOf

/// A count of time units, with the unit fixed at the type level.
///
/// `R` is the representation of the count; integral representations truncate
/// when a value is converted from another unit.
///
/// Encodes as `"<count><suffix>"` and decodes from duration literals, see
/// [`parse_quantity`].
///
/// # Examples
///
/// ```
/// use fp_reflect::time::{Minutes, Seconds};
///
/// let timeout: Seconds = "2m".parse().unwrap();
/// assert_eq!(timeout.count(), 120);
/// assert_eq!(timeout.to_string(), "120s");
///
/// let interval: Minutes = "150s".parse().unwrap();
/// assert_eq!(interval.count(), 2);
///
/// let precise: Minutes<f64> = "150s".parse().unwrap();
/// assert_eq!(precise.count(), 2.5);
/// ```
pub struct DurationOf<U: TimeUnit, R: Count = i64> {
    count: R,
    _unit: PhantomData<fn() -> U>,
}

pub type Milliseconds<R = i64> = DurationOf<Milli, R>;
pub type Seconds<R = i64> = DurationOf<Second, R>;
pub type Minutes<R = i64> = DurationOf<Minute, R>;
pub type Hours<R = i64> = DurationOf<Hour, R>;
pub type Days<R = i64> = DurationOf<Day, R>;

impl<U: TimeUnit, R: Count> DurationOf<U, R> {
    #[inline]
    pub const fn new(count: R) -> Self {
        Self {
            count,
            _unit: PhantomData,
        }
    }

    #[inline]
    pub const fn count(&self) -> R {
        self.count
    }

    #[inline]
    pub const fn unit() -> UnitKind {
        U::KIND
    }

    /// Builds a duration from an amount of `U`, truncating for integral
    /// counts. Returns `None` if the count cannot hold it.
    #[inline]
    pub fn from_amount(amount: f64) -> Option<Self> {
        R::from_f64(amount).map(Self::new)
    }

    /// Converts to another unit, truncating for integral counts.
    ///
    /// ```
    /// use fp_reflect::time::{Hours, Minutes};
    ///
    /// let minutes: Minutes = Hours::<i64>::new(2).convert().unwrap();
    /// assert_eq!(minutes.count(), 120);
    /// ```
    pub fn convert<V: TimeUnit>(self) -> Option<DurationOf<V, R>> {
        DurationOf::from_amount(crate::time::convert_amount(
            self.count.to_f64(),
            U::KIND,
            V::KIND,
        ))
    }
}

impl<U: TimeUnit, R: Count> Clone for DurationOf<U, R> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: TimeUnit, R: Count> Copy for DurationOf<U, R> {}

impl<U: TimeUnit, R: Count> Default for DurationOf<U, R> {
    #[inline]
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<U: TimeUnit, R: Count> PartialEq for DurationOf<U, R> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count
    }
}

impl<U: TimeUnit, R: Count> PartialOrd for DurationOf<U, R> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.count.partial_cmp(&other.count)
    }
}

impl<U: TimeUnit, R: Count> From<R> for DurationOf<U, R> {
    #[inline]
    fn from(count: R) -> Self {
        Self::new(count)
    }
}

impl<U: TimeUnit, R: Count> fmt::Debug for DurationOf<U, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{}", self.count, U::KIND.suffix())
    }
}

impl<U: TimeUnit, R: Count> fmt::Display for DurationOf<U, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, U::KIND.suffix())
    }
}

impl<U: TimeUnit, R: Count> FromStr for DurationOf<U, R> {
    type Err = ConvertError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let amount = parse_quantity(text)?.amount_in(U::KIND);
        Self::from_amount(amount).ok_or_else(|| ConvertError::OutOfRange {
            input: text.to_string(),
            target: R::NAME,
        })
    }
}
