//! Human-friendly, immutable durations with a compact text notation.
//!
//! A [`Duration`] is an exact, non-negative count of milliseconds plus a
//! *preferred unit* used for display. Its compact form is an integer followed
//! by a single unit suffix:
//!
//! | Suffix | Unit         | Milliseconds |
//! |--------|--------------|--------------|
//! | `S`    | milliseconds | 1            |
//! | `s`    | seconds      | 1,000        |
//! | `m`    | minutes      | 60,000       |
//! | `h`    | hours        | 3,600,000    |
//! | `d`    | days         | 86,400,000   |
//! | `w`    | weeks        | 604,800,000  |
//!
//! Suffixes are case-sensitive. Months and years are not supported, their
//! length is not fixed.
//!
//! Equality, ordering and hashing only look at the millisecond count. Results
//! of arithmetic are expressed in the largest unit that divides them exactly,
//! and subtraction clamps at zero instead of going negative.
//!
//! ```
//! use spanlit::{Duration, Unit};
//!
//! let retention: Duration = "7d".parse()?;
//! assert_eq!(Unit::Days, retention.unit());
//! assert_eq!(168, retention.as_hours());
//! assert_eq!("7 Days", retention.long_text());
//!
//! // Equal values, different spelling
//! let a: Duration = "120s".parse()?;
//! let b: Duration = "2m".parse()?;
//! assert_eq!(a, b);
//! assert_ne!(a.to_string(), b.to_string());
//!
//! // Arithmetic re-normalizes
//! assert_eq!("2w", retention.add_days(7).to_string());
//! assert_eq!("0S", (a - retention).to_string());
//!
//! // Only the exact grammar is accepted
//! assert!("5mm".parse::<Duration>().is_err());
//! assert!("05m".parse::<Duration>().is_err());
//! # Ok::<(), spanlit::Error>(())
//! ```
//!
//! # Feature flags
//!
//! - `serde`: (de)serializes a [`Duration`] as its compact string, e.g. `"7d"`.
//!
//! # Integer interop
//!
//! Raw integers are always milliseconds. There is no seconds-based variant of
//! the format, so a count written by a seconds-based producer must be scaled
//! before it is handed to this crate.

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![warn(clippy::result_unit_err)]

mod duration;
mod error;
mod normalize;
mod parser;

#[cfg(feature = "serde")]
mod serde_impl;

mod time;
mod unit;

pub use duration::Duration;
pub use error::{Error, Result};
pub use normalize::normalize;
pub use parser::parse;
pub use time::{timestamp, Timestamp};
pub use unit::{is_valid_unit_suffix, Unit};
