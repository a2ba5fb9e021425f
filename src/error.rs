/// Error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A numeric constructor received a negative count.
    NegativeValue(i64),

    /// The text is not a well-formed compact duration.
    InvalidFormat {
        /// The rejected input.
        input: String,

        /// 1-based column of the first offending character.
        column: usize,
    },

    /// The unit suffix is not one of `S`, `s`, `m`, `h`, `d`, `w`.
    UnsupportedUnitSuffix(char),

    /// The scaled millisecond count does not fit in 64 bits.
    Overflow,
}

impl Error {
    pub(crate) fn invalid_format(input: &str, column: usize) -> Self {
        Self::InvalidFormat {
            input: input.to_owned(),
            column,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeValue(n) => {
                write!(f, "duration cannot be negative (got {n})")
            }
            Self::InvalidFormat { input, column } => {
                write!(f, "invalid duration format {input:?} at column {column}")
            }
            Self::UnsupportedUnitSuffix(c) => {
                write!(f, "unsupported unit suffix {c:?}, expected one of S, s, m, h, d, w")
            }
            Self::Overflow => {
                write!(f, "duration overflows a 64-bit millisecond count")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;
