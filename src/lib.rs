// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Dates
//!
//! This crate converts between calendar timestamps and Julian Dates: the
//! continuous count of days since noon UT on 1 January 4713 BCE, whose
//! fractional part counts the time since the preceding noon UTC.
//! For example, 2000-01-01 12:00 UTC is JD 2451545.0 and 18:00 the same day
//! is JD 2451545.25.
//!
//! # Core types
//!
//! - [`JulianDate`] — the value type, built from any `chrono::DateTime`.
//! - [`CalendarFields`] — wall-clock fields, normalized and placed in a
//!   timezone by [`JulianDate::from_calendar`].
//! - [`zone`] — timezone lookup by IANA name or fixed offset.
//! - [`constants`] — the epochs and day lengths every formula uses.
//!
//! # Accessors
//!
//! | Method | Value |
//! |--------|-------|
//! | [`day`](JulianDate::day) | the Julian Date as `f64` |
//! | [`day_number`](JulianDate::day_number) | `floor(jd)` |
//! | [`day_fraction`](JulianDate::day_fraction) | `jd mod 1` in `[0, 1)` |
//! | [`day_fraction_duration`](JulianDate::day_fraction_duration) | the same as a `chrono::Duration` |
//! | [`unix_seconds`](JulianDate::unix_seconds) | seconds since 1970-01-01 UTC |
//! | [`unix_nanos`](JulianDate::unix_nanos) | nanoseconds since 1970-01-01 UTC |
//! | [`julian_centuries`](JulianDate::julian_centuries) | centuries since J2000.0 |
//! | [`to_datetime`](JulianDate::to_datetime) | back to `chrono::DateTime<Utc>` |
//!
//! Nanosecond-based results are unspecified outside roughly 1678–2262.
//!
//! ```
//! use julian::{CalendarFields, JulianDate};
//!
//! let jd = JulianDate::from_calendar_in(
//!     CalendarFields::date(2010, 2, 14).at(5, 21, 0),
//!     "America/Los_Angeles",
//! )?;
//! assert!((jd.day() - 2_455_242.05625).abs() < 1e-6);
//! # Ok::<(), julian::Error>(())
//! ```

mod calendar;
pub mod constants;
mod date;
mod error;
pub mod zone;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::CalendarFields;
pub use date::JulianDate;
pub use error::{Error, Result};
