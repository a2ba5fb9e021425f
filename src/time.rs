use crate::Duration;
use std::ops::{Add, Sub};
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Returns the current timestamp in milliseconds.
///
/// A clock set before the Unix epoch reads as `0`.
#[must_use]
pub fn timestamp() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| Duration::from(d).to_millis())
        .unwrap_or_default()
}

impl Duration {
    /// Shifts a point in time forward by this duration.
    ///
    /// Works with anything that can add a [`std::time::Duration`], such as
    /// [`SystemTime`] or [`std::time::Instant`].
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as `T + std::time::Duration`,
    /// e.g. when the result is not representable by the platform clock.
    ///
    /// ```
    /// use spanlit::Duration;
    /// use std::time::{Duration as StdDuration, UNIX_EPOCH};
    ///
    /// let d: Duration = "90m".parse()?;
    /// assert_eq!(UNIX_EPOCH + StdDuration::from_secs(5_400), d.add_to(UNIX_EPOCH));
    /// # Ok::<(), spanlit::Error>(())
    /// ```
    #[must_use]
    pub fn add_to<T>(self, time: T) -> T
    where
        T: Add<std::time::Duration, Output = T>,
    {
        time + std::time::Duration::from(self)
    }

    /// Shifts a point in time backward by this duration.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as `T - std::time::Duration`.
    #[must_use]
    pub fn subtract_from<T>(self, time: T) -> T
    where
        T: Sub<std::time::Duration, Output = T>,
    {
        time - std::time::Duration::from(self)
    }

    /// Shifts an epoch timestamp forward, saturating at `u64::MAX`.
    #[must_use]
    pub const fn add_to_timestamp(self, ts: Timestamp) -> Timestamp {
        ts.saturating_add(self.to_millis())
    }

    /// Shifts an epoch timestamp backward, saturating at the epoch.
    #[must_use]
    pub const fn subtract_from_timestamp(self, ts: Timestamp) -> Timestamp {
        ts.saturating_sub(self.to_millis())
    }
}

impl Add<Duration> for SystemTime {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        rhs.add_to(self)
    }
}

impl Sub<Duration> for SystemTime {
    type Output = Self;

    fn sub(self, rhs: Duration) -> Self {
        rhs.subtract_from(self)
    }
}
