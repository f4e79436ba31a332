//! Duration quantities.
//!
//! ## Menu
//!
//! - [`UnitKind`]: milliseconds, seconds, minutes, hours and days.
//! - [`DurationOf<U, R>`]: a count of unit `U` stored as `R`, with the aliases
//!   [`Milliseconds`], [`Seconds`], [`Minutes`], [`Hours`] and [`Days`].
//! - [`parse_quantity`]: the duration literal grammar.
//!
//! `core::time::Duration` is reflected too. A bare number decodes as seconds.

// -----------------------------------------------------------------------------
// Modules

mod count;
mod duration;
mod parse;
mod unit;

// -----------------------------------------------------------------------------
// Exports

pub use count::Count;
pub use duration::{Days, DurationOf, Hours, Milliseconds, Minutes, Seconds};
pub use parse::{Quantity, convert_amount, decode_amount, parse_quantity, split_quantity};
pub use unit::{Day, Hour, Milli, Minute, Second, TimeUnit, UnitKind};
