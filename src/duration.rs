use crate::{normalize, Error, Result, Unit};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// An immutable, non-negative span of time with millisecond precision.
///
/// Besides the millisecond count, a duration remembers a *preferred unit*
/// that is only used for display. Equality, ordering and hashing look at the
/// millisecond count alone, so `120s` and `2m` are the same duration.
///
/// Durations produced by arithmetic pick their preferred unit afresh, using
/// the largest unit that divides the result exactly (see [`normalize()`]).
///
/// ```
/// use spanlit::Duration;
///
/// let a: Duration = "60s".parse()?;
/// let b: Duration = "59m".parse()?;
///
/// assert_eq!("1h", (a + b).to_string());
/// assert_eq!("2w", "10d".parse::<Duration>()?.add_days(4).to_string());
/// assert_eq!("0S", "2h".parse::<Duration>()?.add_seconds(-7_201).to_string());
/// # Ok::<(), spanlit::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Duration {
    millis: u64,
    unit: Unit,
}

impl Duration {
    /// The empty duration, `0S`.
    pub const ZERO: Self = Self::from_parts(0, Unit::Milliseconds);

    pub(crate) const fn from_parts(millis: u64, unit: Unit) -> Self {
        Self { millis, unit }
    }

    /// Creates a duration of `value` units, keeping `unit` as the preferred unit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeValue`] if `value` is negative, and
    /// [`Error::Overflow`] if the millisecond count does not fit in a `u64`.
    pub fn new(value: i64, unit: Unit) -> Result<Self> {
        let Ok(value) = u64::try_from(value) else {
            return Err(Error::NegativeValue(value));
        };

        Self::scaled(value, unit)
    }

    fn scaled(n: u64, unit: Unit) -> Result<Self> {
        let millis = n.checked_mul(unit.millis()).ok_or(Error::Overflow)?;
        Ok(Self::from_parts(millis, unit))
    }

    /// Like [`Duration::new`], with the unit given as its suffix character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedUnitSuffix`] for an unknown suffix, otherwise
    /// the same errors as [`Duration::new`].
    pub fn with_suffix(value: i64, suffix: char) -> Result<Self> {
        Self::new(value, Unit::from_suffix(suffix)?)
    }

    /// Creates a duration from a raw millisecond count.
    ///
    /// The preferred unit is the largest unit that divides `millis` exactly.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        let (_, unit) = normalize(millis);
        Self::from_parts(millis, unit)
    }

    /// `n` milliseconds.
    #[must_use]
    pub const fn milliseconds(n: u64) -> Self {
        Self::from_parts(n, Unit::Milliseconds)
    }

    /// `n` seconds, keeping seconds as the preferred unit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the millisecond count does not fit in a `u64`.
    pub fn seconds(n: u64) -> Result<Self> {
        Self::scaled(n, Unit::Seconds)
    }

    /// `n` minutes, keeping minutes as the preferred unit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the millisecond count does not fit in a `u64`.
    pub fn minutes(n: u64) -> Result<Self> {
        Self::scaled(n, Unit::Minutes)
    }

    /// `n` hours, keeping hours as the preferred unit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the millisecond count does not fit in a `u64`.
    pub fn hours(n: u64) -> Result<Self> {
        Self::scaled(n, Unit::Hours)
    }

    /// `n` days, keeping days as the preferred unit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the millisecond count does not fit in a `u64`.
    pub fn days(n: u64) -> Result<Self> {
        Self::scaled(n, Unit::Days)
    }

    /// `n` weeks, keeping weeks as the preferred unit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the millisecond count does not fit in a `u64`.
    pub fn weeks(n: u64) -> Result<Self> {
        Self::scaled(n, Unit::Weeks)
    }

    /// The preferred display unit.
    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Numeric part of the compact form, i.e. the duration counted in its
    /// preferred unit (truncated).
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.in_unit(self.unit)
    }

    /// Returns `true` if the duration is empty.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.millis == 0
    }

    /// Whole `unit`s in this duration (truncated), ignoring the preferred unit.
    #[must_use]
    pub const fn in_unit(&self, unit: Unit) -> u64 {
        self.millis / unit.millis()
    }

    /// Compact form counted in `unit`, e.g. `"5400s"` for 90 minutes in seconds.
    #[must_use]
    pub fn compact_in(&self, unit: Unit) -> String {
        format!("{}{}", self.in_unit(unit), unit.suffix())
    }

    /// Compact form in the preferred unit, e.g. `"90m"`. Same as `to_string()`.
    #[must_use]
    pub fn compact_value(&self) -> String {
        self.to_string()
    }

    /// Long form in the preferred unit, e.g. `"90 Minutes"`.
    #[must_use]
    pub fn long_text(&self) -> String {
        format!("{} {}", self.value(), self.unit.name())
    }

    /// Raw millisecond count.
    #[must_use]
    pub const fn to_millis(&self) -> u64 {
        self.millis
    }

    /// Same as [`Duration::to_millis`].
    #[must_use]
    pub const fn as_millis(&self) -> u64 {
        self.millis
    }

    /// Whole seconds (truncated).
    #[must_use]
    pub const fn as_seconds(&self) -> u64 {
        self.in_unit(Unit::Seconds)
    }

    /// Whole minutes (truncated).
    #[must_use]
    pub const fn as_minutes(&self) -> u64 {
        self.in_unit(Unit::Minutes)
    }

    /// Whole hours (truncated).
    #[must_use]
    pub const fn as_hours(&self) -> u64 {
        self.in_unit(Unit::Hours)
    }

    /// Whole days (truncated).
    #[must_use]
    pub const fn as_days(&self) -> u64 {
        self.in_unit(Unit::Days)
    }

    /// Whole weeks (truncated).
    #[must_use]
    pub const fn as_weeks(&self) -> u64 {
        self.in_unit(Unit::Weeks)
    }

    /// Sum of both durations, saturating at `u64::MAX` milliseconds.
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Self::from_millis(self.millis.saturating_add(other.millis))
    }

    /// Difference of both durations, clamped at zero.
    #[must_use]
    pub fn saturating_sub(self, other: Self) -> Self {
        let millis = self.millis.checked_sub(other.millis).unwrap_or_else(|| {
            log::debug!("clamping {self} - {other} to zero");
            0
        });

        Self::from_millis(millis)
    }

    /// Adds `n` units; a negative `n` subtracts instead.
    #[must_use]
    pub fn add_in(self, unit: Unit, n: i64) -> Self {
        let delta = Self::from_millis(n.unsigned_abs().saturating_mul(unit.millis()));

        if n < 0 {
            self.saturating_sub(delta)
        } else {
            self.saturating_add(delta)
        }
    }

    /// Subtracts `n` units, clamping at zero; a negative `n` adds instead.
    #[must_use]
    pub fn subtract_in(self, unit: Unit, n: i64) -> Self {
        let delta = Self::from_millis(n.unsigned_abs().saturating_mul(unit.millis()));

        if n < 0 {
            self.saturating_add(delta)
        } else {
            self.saturating_sub(delta)
        }
    }

    /// Adds `n` milliseconds, see [`Duration::add_in`].
    #[must_use]
    pub fn add_milliseconds(self, n: i64) -> Self {
        self.add_in(Unit::Milliseconds, n)
    }

    /// Adds `n` seconds, see [`Duration::add_in`].
    #[must_use]
    pub fn add_seconds(self, n: i64) -> Self {
        self.add_in(Unit::Seconds, n)
    }

    /// Adds `n` minutes, see [`Duration::add_in`].
    #[must_use]
    pub fn add_minutes(self, n: i64) -> Self {
        self.add_in(Unit::Minutes, n)
    }

    /// Adds `n` hours, see [`Duration::add_in`].
    #[must_use]
    pub fn add_hours(self, n: i64) -> Self {
        self.add_in(Unit::Hours, n)
    }

    /// Adds `n` days, see [`Duration::add_in`].
    #[must_use]
    pub fn add_days(self, n: i64) -> Self {
        self.add_in(Unit::Days, n)
    }

    /// Adds `n` weeks, see [`Duration::add_in`].
    #[must_use]
    pub fn add_weeks(self, n: i64) -> Self {
        self.add_in(Unit::Weeks, n)
    }

    /// Subtracts `n` milliseconds, see [`Duration::subtract_in`].
    #[must_use]
    pub fn subtract_milliseconds(self, n: i64) -> Self {
        self.subtract_in(Unit::Milliseconds, n)
    }

    /// Subtracts `n` seconds, see [`Duration::subtract_in`].
    #[must_use]
    pub fn subtract_seconds(self, n: i64) -> Self {
        self.subtract_in(Unit::Seconds, n)
    }

    /// Subtracts `n` minutes, see [`Duration::subtract_in`].
    #[must_use]
    pub fn subtract_minutes(self, n: i64) -> Self {
        self.subtract_in(Unit::Minutes, n)
    }

    /// Subtracts `n` hours, see [`Duration::subtract_in`].
    #[must_use]
    pub fn subtract_hours(self, n: i64) -> Self {
        self.subtract_in(Unit::Hours, n)
    }

    /// Subtracts `n` days, see [`Duration::subtract_in`].
    #[must_use]
    pub fn subtract_days(self, n: i64) -> Self {
        self.subtract_in(Unit::Days, n)
    }

    /// Subtracts `n` weeks, see [`Duration::subtract_in`].
    #[must_use]
    pub fn subtract_weeks(self, n: i64) -> Self {
        self.subtract_in(Unit::Weeks, n)
    }

    /// Three-way comparison of the millisecond counts: `-1`, `0` or `1`.
    #[must_use]
    pub fn compare(&self, other: &Self) -> i8 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value(), self.unit.suffix())
    }
}

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.millis == other.millis
    }
}

impl Eq for Duration {}

impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Duration {
    fn cmp(&self, other: &Self) -> Ordering {
        self.millis.cmp(&other.millis)
    }
}

impl Hash for Duration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.millis.hash(state);
    }
}

// Text that is not a valid duration is simply unequal
impl PartialEq<str> for Duration {
    fn eq(&self, other: &str) -> bool {
        crate::parse(other).is_ok_and(|other| *self == other)
    }
}

impl PartialEq<&str> for Duration {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<String> for Duration {
    fn eq(&self, other: &String) -> bool {
        *self == **other
    }
}

impl PartialEq<Duration> for &str {
    fn eq(&self, other: &Duration) -> bool {
        *other == **self
    }
}

impl PartialEq<Duration> for str {
    fn eq(&self, other: &Duration) -> bool {
        *other == *self
    }
}

impl PartialEq<Duration> for String {
    fn eq(&self, other: &Duration) -> bool {
        *other == **self
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse(s)
    }
}

impl TryFrom<&str> for Duration {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        crate::parse(value)
    }
}

impl TryFrom<String> for Duration {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        crate::parse(&value)
    }
}

impl From<Duration> for String {
    fn from(value: Duration) -> Self {
        value.to_string()
    }
}

impl From<u64> for Duration {
    fn from(millis: u64) -> Self {
        Self::from_millis(millis)
    }
}

/// Interprets the integer as milliseconds.
impl TryFrom<i64> for Duration {
    type Error = Error;

    fn try_from(millis: i64) -> Result<Self> {
        u64::try_from(millis)
            .map(Self::from_millis)
            .map_err(|_| Error::NegativeValue(millis))
    }
}

impl From<Duration> for u64 {
    fn from(value: Duration) -> Self {
        value.millis
    }
}

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        Self::from_millis(value.millis)
    }
}

/// Truncates to whole milliseconds, saturating at `u64::MAX`.
impl From<std::time::Duration> for Duration {
    fn from(value: std::time::Duration) -> Self {
        Self::from_millis(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }
}

impl std::ops::Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl std::ops::Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
}

impl std::ops::AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::iter::Sum for Duration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl<'a> std::iter::Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
