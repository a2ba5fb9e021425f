mod span;

use crate::{Duration, Error, Result, Unit};
use nom::{
    character::complete::{anychar, digit1},
    combinator::eof,
};
use nom_locate::position;
use span::{Parse, ParseResult, Position, RawSpan};

/// `<digits><suffix>`, nothing before or after.
#[derive(Debug, Eq, PartialEq)]
struct CompactLiteral<'a> {
    digits: &'a str,
    suffix: char,
    suffix_position: Position,
}

impl<'a> Parse<'a> for CompactLiteral<'a> {
    fn parse(input: RawSpan<'a>) -> ParseResult<'a, Self> {
        let (input, digits) = digit1(input)?;
        let (input, pos) = position(input)?;
        let (input, suffix) = anychar(input)?;
        let (input, _) = eof(input)?;

        Ok((
            input,
            Self {
                digits: digits.fragment(),
                suffix,
                suffix_position: pos.into(),
            },
        ))
    }
}

fn syntax_error_column(err: &nom::Err<nom::error::Error<RawSpan<'_>>>) -> usize {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => Position::from(e.input).column,
        nom::Err::Incomplete(_) => 1,
    }
}

/// Parses a compact duration such as `90m`, `7d` or `250S`.
///
/// The grammar is exactly one or more ASCII digits followed by one suffix
/// character out of `S` (milliseconds), `s`, `m`, `h`, `d`, `w`. The text
/// must already be canonical: re-rendering the parsed number and suffix has to
/// reproduce it byte for byte, so `05m` or `+5m` are rejected.
///
/// The preferred unit of the result is the unit named by the suffix.
///
/// # Errors
///
/// Returns [`Error::UnsupportedUnitSuffix`] if the text is digits followed by
/// a single unknown suffix, and [`Error::InvalidFormat`] for anything else
/// that does not match the grammar.
///
/// # Examples
///
/// ```
/// let d = spanlit::parse("90m")?;
/// assert_eq!(5_400_000, d.as_millis());
/// assert_eq!("90m", d.to_string());
///
/// assert!(spanlit::parse("5mm").is_err());
/// # Ok::<(), spanlit::Error>(())
/// ```
pub fn parse(input: &str) -> Result<Duration> {
    let (_, literal) = CompactLiteral::parse_from_raw(input).map_err(|e| {
        let column = syntax_error_column(&e);
        log::trace!("rejected duration {input:?}: syntax error at column {column}");
        Error::invalid_format(input, column)
    })?;

    let unit = Unit::from_suffix(literal.suffix).inspect_err(|_| {
        log::trace!(
            "rejected duration {input:?}: unknown suffix {:?} at column {}",
            literal.suffix,
            literal.suffix_position.column,
        );
    })?;

    let Ok(value) = literal.digits.parse::<u64>() else {
        log::trace!("rejected duration {input:?}: number out of range");
        return Err(Error::invalid_format(input, 1));
    };

    if format!("{value}{}", unit.suffix()) != input {
        log::trace!("rejected duration {input:?}: not in canonical form");
        return Err(Error::invalid_format(input, 1));
    }

    let Some(millis) = value.checked_mul(unit.millis()) else {
        log::trace!("rejected duration {input:?}: overflows millisecond count");
        return Err(Error::invalid_format(input, 1));
    };

    Ok(Duration::from_parts(millis, unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn column_of(input: &str) -> usize {
        match parse(input) {
            Err(Error::InvalidFormat { column, .. }) => column,
            other => panic!("expected InvalidFormat for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn parse_literal_simple() {
        let (_, literal) = CompactLiteral::parse_from_raw("90m").unwrap();

        assert_eq!(
            CompactLiteral {
                digits: "90",
                suffix: 'm',
                suffix_position: Position { column: 3 },
            },
            literal
        );
    }

    #[test]
    fn parse_every_unit() {
        assert_eq!(250, parse("250S").unwrap().as_millis());
        assert_eq!(30_000, parse("30s").unwrap().as_millis());
        assert_eq!(5_400_000, parse("90m").unwrap().as_millis());
        assert_eq!(7_200_000, parse("2h").unwrap().as_millis());
        assert_eq!(604_800_000, parse("7d").unwrap().as_millis());
        assert_eq!(1_209_600_000, parse("2w").unwrap().as_millis());
    }

    #[test]
    fn keeps_suffix_as_preferred_unit() {
        let d = parse("120s").unwrap();
        assert_eq!(Unit::Seconds, d.unit());
        assert_eq!(120, d.value());

        let d = parse("0S").unwrap();
        assert_eq!(Unit::Milliseconds, d.unit());
        assert!(d.is_zero());

        let d = parse("0w").unwrap();
        assert_eq!(Unit::Weeks, d.unit());
        assert_eq!("0w", d.to_string());
    }

    #[test]
    fn canonical_input_round_trips() {
        for s in [
            "0S", "1S", "999S", "1s", "59s", "5399s", "1m", "90m", "1h", "25h", "6d", "7d", "2w",
            "52w",
        ] {
            assert_eq!(s, parse(s).unwrap().compact_value());
        }
    }

    #[test]
    fn too_short() {
        assert_eq!(1, column_of(""));
        assert_eq!(1, column_of("m"));
        assert_eq!(2, column_of("5"));
    }

    #[test]
    fn multi_char_suffix() {
        assert_eq!(3, column_of("5mm"));
        assert_eq!(4, column_of("10ms"));
        assert_eq!(3, column_of("1h "));
    }

    #[test]
    fn no_leading_digits() {
        assert_eq!(1, column_of("-5s"));
        assert_eq!(1, column_of("+5s"));
        assert_eq!(1, column_of(" 5s"));
        assert_eq!(1, column_of("h5"));
    }

    #[test]
    fn unsupported_suffix() {
        assert_eq!(Err(Error::UnsupportedUnitSuffix('a')), parse("6a"));
        assert_eq!(Err(Error::UnsupportedUnitSuffix('M')), parse("3M"));
        assert_eq!(Err(Error::UnsupportedUnitSuffix('y')), parse("1y"));
        assert_eq!(Err(Error::UnsupportedUnitSuffix('µ')), parse("5µ"));
    }

    #[test]
    fn leading_zeros_are_not_canonical() {
        assert_eq!(1, column_of("05m"));
        assert_eq!(1, column_of("00S"));
        assert_eq!(1, column_of("007d"));
    }

    #[test]
    fn number_out_of_range() {
        assert_eq!(1, column_of("18446744073709551616S"));
        assert_eq!(u64::MAX, parse("18446744073709551615S").unwrap().as_millis());
    }

    #[test]
    fn scaled_value_overflows() {
        assert_eq!(1, column_of("18446744073709551615s"));
        assert_eq!(1, column_of("30600000000w"));
    }

    #[test]
    fn error_keeps_input() {
        assert_eq!(
            Err(Error::InvalidFormat {
                input: "5mm".into(),
                column: 3,
            }),
            parse("5mm"),
        );
    }
}
