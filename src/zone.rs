// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Timezone lookup.
//!
//! Named zones come from the IANA database bundled by `chrono-tz`; fixed
//! offsets are plain `chrono::FixedOffset` values.  Both implement
//! `chrono::TimeZone` and can be passed to
//! [`JulianDate::from_calendar`](crate::JulianDate::from_calendar).

use chrono::FixedOffset;
use chrono_tz::{Tz, TZ_VARIANTS};
use log::debug;

use crate::error::{Error, Result};

/// Resolve an IANA timezone name such as `"America/Los_Angeles"`.
///
/// Surrounding whitespace is ignored and the match falls back to a
/// case-insensitive scan of the database.  A blank name is a missing zone,
/// never an implicit UTC.
pub fn lookup(name: &str) -> Result<Tz> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::MissingTimeZone);
    }
    if let Ok(tz) = name.parse::<Tz>() {
        return Ok(tz);
    }
    TZ_VARIANTS
        .iter()
        .find(|tz| tz.name().eq_ignore_ascii_case(name))
        .copied()
        .ok_or_else(|| {
            debug!("timezone {name:?} not found in the tz database");
            Error::UnknownTimeZone(name.to_string())
        })
}

/// Fixed offset of `offset_seconds` east of UTC (negative for west).
pub fn fixed(offset_seconds: i32) -> Result<FixedOffset> {
    FixedOffset::east_opt(offset_seconds).ok_or(Error::InvalidOffset(offset_seconds))
}
