use crate::Unit;

/// Picks the largest unit that divides `millis` exactly.
///
/// Units are tried from weeks down to seconds; the first one that is no larger
/// than `millis` and leaves no remainder wins. Everything else, zero included,
/// falls through to milliseconds.
///
/// ```
/// use spanlit::{normalize, Unit};
///
/// assert_eq!((1, Unit::Hours), normalize(3_600_000));
/// assert_eq!((5_399, Unit::Seconds), normalize(5_399_000));
/// assert_eq!((0, Unit::Milliseconds), normalize(0));
/// ```
#[must_use]
pub fn normalize(millis: u64) -> (u64, Unit) {
    for unit in Unit::DESCENDING {
        let size = unit.millis();

        if millis >= size && millis % size == 0 {
            return (millis / size, unit);
        }
    }

    (millis, Unit::Milliseconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn zero_falls_through_to_millis() {
        assert_eq!((0, Unit::Milliseconds), normalize(0));
    }

    #[test]
    fn below_one_second() {
        assert_eq!((1, Unit::Milliseconds), normalize(1));
        assert_eq!((999, Unit::Milliseconds), normalize(999));
    }

    #[test]
    fn prefers_hours_over_minutes() {
        assert_eq!((1, Unit::Hours), normalize(3_600_000));
        assert_eq!((2, Unit::Hours), normalize(7_200_000));
    }

    #[test]
    fn no_larger_unit_divides() {
        assert_eq!((5_399, Unit::Seconds), normalize(5_399_000));
        assert_eq!((1_001, Unit::Milliseconds), normalize(1_001));
        assert_eq!((90, Unit::Minutes), normalize(5_400_000));
    }

    #[test]
    fn days_and_weeks() {
        assert_eq!((6, Unit::Days), normalize(6 * 86_400_000));
        assert_eq!((2, Unit::Weeks), normalize(14 * 86_400_000));
        assert_eq!((8, Unit::Days), normalize(8 * 86_400_000));
    }

    #[test]
    fn exact_unit_sizes() {
        for unit in Unit::ALL {
            assert_eq!((1, unit), normalize(unit.millis()));
        }
    }

    #[test]
    fn result_reconstructs_input() {
        for millis in [0, 1, 59_999, 60_000, 61_000, 86_399_999, 1_209_600_000, u64::MAX] {
            let (value, unit) = normalize(millis);
            assert_eq!(millis, value * unit.millis());
        }
    }
}
