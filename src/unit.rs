use crate::{Error, Result};

const SUFFIXES: &str = "Ssmhdw";

/// Returns `true` if `c` is one of the supported unit suffixes.
///
/// Suffixes are case-sensitive: `S` is milliseconds, `s` is seconds.
///
/// ```
/// assert!(spanlit::is_valid_unit_suffix('S'));
/// assert!(spanlit::is_valid_unit_suffix('w'));
/// assert!(!spanlit::is_valid_unit_suffix('M'));
/// ```
#[must_use]
pub fn is_valid_unit_suffix(c: char) -> bool {
    SUFFIXES.contains(c)
}

/// A fixed-length unit of time.
///
/// Calendar units (months, years) are deliberately absent, their length varies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Unit {
    /// `S`
    #[default]
    Milliseconds,

    /// `s`
    Seconds,

    /// `m`
    Minutes,

    /// `h`
    Hours,

    /// `d`
    Days,

    /// `w`
    Weeks,
}

impl Unit {
    /// All units, smallest first.
    pub const ALL: [Self; 6] = [
        Self::Milliseconds,
        Self::Seconds,
        Self::Minutes,
        Self::Hours,
        Self::Days,
        Self::Weeks,
    ];

    /// All units, largest first.
    pub const DESCENDING: [Self; 6] = [
        Self::Weeks,
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
        Self::Milliseconds,
    ];

    /// Length of one unit in milliseconds.
    #[must_use]
    pub const fn millis(self) -> u64 {
        match self {
            Self::Milliseconds => 1,
            Self::Seconds => 1_000,
            Self::Minutes => 60_000,
            Self::Hours => 3_600_000,
            Self::Days => 86_400_000,
            Self::Weeks => 604_800_000,
        }
    }

    /// Suffix character used in the compact notation.
    #[must_use]
    pub const fn suffix(self) -> char {
        match self {
            Self::Milliseconds => 'S',
            Self::Seconds => 's',
            Self::Minutes => 'm',
            Self::Hours => 'h',
            Self::Days => 'd',
            Self::Weeks => 'w',
        }
    }

    /// Capitalized plural name, as used by the long text form.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Milliseconds => "Milliseconds",
            Self::Seconds => "Seconds",
            Self::Minutes => "Minutes",
            Self::Hours => "Hours",
            Self::Days => "Days",
            Self::Weeks => "Weeks",
        }
    }

    /// Looks up the unit for a suffix character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedUnitSuffix`] if `c` is not a known suffix.
    pub fn from_suffix(c: char) -> Result<Self> {
        match c {
            'S' => Ok(Self::Milliseconds),
            's' => Ok(Self::Seconds),
            'm' => Ok(Self::Minutes),
            'h' => Ok(Self::Hours),
            'd' => Ok(Self::Days),
            'w' => Ok(Self::Weeks),
            _ => Err(Error::UnsupportedUnitSuffix(c)),
        }
    }

    /// Same as [`is_valid_unit_suffix`].
    #[must_use]
    pub fn is_valid_suffix(c: char) -> bool {
        is_valid_unit_suffix(c)
    }
}

impl TryFrom<char> for Unit {
    type Error = Error;

    fn try_from(value: char) -> Result<Self> {
        Self::from_suffix(value)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn conversion_table() {
        assert_eq!(1, Unit::Milliseconds.millis());
        assert_eq!(1_000, Unit::Seconds.millis());
        assert_eq!(60_000, Unit::Minutes.millis());
        assert_eq!(3_600_000, Unit::Hours.millis());
        assert_eq!(86_400_000, Unit::Days.millis());
        assert_eq!(604_800_000, Unit::Weeks.millis());
    }

    #[test]
    fn each_unit_is_a_whole_multiple_of_the_previous() {
        for pair in Unit::ALL.windows(2) {
            let [small, big] = pair else { unreachable!() };
            assert!(big.millis() > small.millis());
            assert_eq!(0, big.millis() % small.millis());
        }
    }

    #[test]
    fn descending_is_all_reversed() {
        let mut all = Unit::ALL;
        all.reverse();
        assert_eq!(all, Unit::DESCENDING);
    }

    #[test]
    fn suffix_lookup_is_case_sensitive() {
        assert_eq!(Ok(Unit::Milliseconds), Unit::from_suffix('S'));
        assert_eq!(Ok(Unit::Seconds), Unit::from_suffix('s'));
        assert_eq!(Err(Error::UnsupportedUnitSuffix('M')), Unit::from_suffix('M'));
        assert_eq!(Err(Error::UnsupportedUnitSuffix('H')), Unit::try_from('H'));
    }

    #[test]
    fn suffix_round_trip() {
        for unit in Unit::ALL {
            assert!(is_valid_unit_suffix(unit.suffix()));
            assert!(Unit::is_valid_suffix(unit.suffix()));
            assert_eq!(Ok(unit), Unit::from_suffix(unit.suffix()));
        }
    }

    #[test]
    fn rejects_foreign_suffixes() {
        for c in ['a', 'y', 'M', 'D', 'W', '0', ' ', 'µ'] {
            assert!(!is_valid_unit_suffix(c), "{c:?} should be rejected");
            assert!(!Unit::is_valid_suffix(c));
        }
    }

    #[test]
    fn display_uses_long_name() {
        assert_eq!("Minutes", Unit::Minutes.to_string());
        assert_eq!("Milliseconds", Unit::Milliseconds.to_string());
    }
}
