//! Expiry engine for the larder inventory tracker.
//!
//! Pure calendar-day arithmetic over `yyyy-MM-dd` date strings plus the
//! severity tiers derived from days-until-expiry. Everything here is
//! stateless; functions that depend on "today" take it explicitly, with
//! wrappers that default to the local calendar date.

pub mod dates;
pub mod severity;

pub use dates::*;
pub use severity::*;
