// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Construction of a [`JulianDate`] from calendar fields in a timezone.
//!
//! Fields may lie outside their usual ranges and are normalized first:
//! month 13 of 2010 is January 2011, 32 January is 1 February, and a
//! negative hour counts back into the previous day.  The normalized wall
//! time is then placed in the timezone.
//!
//! # Daylight-saving transitions
//!
//! A transition either skips wall times (in the United States, 2:15 on
//! 13 March 2011 never happened) or repeats them (1:15 on 6 November 2011
//! happened twice).  For such inputs the returned date is correct in one of
//! the two offsets involved in the transition, but which one is not
//! guaranteed.  These inputs never fail.

use chrono::{
    DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone,
};
use log::debug;

use crate::constants::NANOS_PER_DAY;
use crate::date::JulianDate;
use crate::error::{Error, Result};
use crate::zone;

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;

/// Wall-clock calendar fields, not yet tied to a timezone.
///
/// Months and days are 1-based.  Every field except `year` accepts any
/// value; out-of-range values roll over into the next larger field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CalendarFields {
    pub year: i32,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    pub nanosecond: i64,
}

impl CalendarFields {
    /// Midnight at the start of `year-month-day`.
    pub const fn date(year: i32, month: i64, day: i64) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            nanosecond: 0,
        }
    }

    /// Replace the time of day.
    pub const fn at(self, hour: i64, minute: i64, second: i64) -> Self {
        Self {
            hour,
            minute,
            second,
            ..self
        }
    }

    /// Replace the nanosecond field.
    pub const fn with_nanosecond(self, nanosecond: i64) -> Self {
        Self { nanosecond, ..self }
    }

    /// Roll out-of-range fields into a proper wall time.
    ///
    /// Fails with [`Error::FieldOverflow`] when the result leaves the
    /// calendar range supported by `chrono`.
    pub fn normalize(&self) -> Result<NaiveDateTime> {
        let months = i128::from(self.year) * 12 + i128::from(self.month) - 1;
        let year = i32::try_from(months.div_euclid(12)).map_err(|_| Error::FieldOverflow)?;
        // rem_euclid(12) is in 0..12
        let month = months.rem_euclid(12) as u32 + 1;
        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1).ok_or(Error::FieldOverflow)?;

        let nanos = (i128::from(self.day) - 1) * i128::from(NANOS_PER_DAY)
            + i128::from(self.hour) * NANOS_PER_HOUR
            + i128::from(self.minute) * NANOS_PER_MINUTE
            + i128::from(self.second) * NANOS_PER_SECOND
            + i128::from(self.nanosecond);
        let seconds = i64::try_from(nanos.div_euclid(NANOS_PER_SECOND))
            .map_err(|_| Error::FieldOverflow)?;
        let subsec = nanos.rem_euclid(NANOS_PER_SECOND) as i64;
        let elapsed = TimeDelta::try_seconds(seconds)
            .and_then(|delta| delta.checked_add(&TimeDelta::nanoseconds(subsec)))
            .ok_or(Error::FieldOverflow)?;

        first_of_month
            .and_time(NaiveTime::MIN)
            .checked_add_signed(elapsed)
            .ok_or(Error::FieldOverflow)
    }
}

impl JulianDate {
    /// Julian Date of the wall time `fields` in timezone `tz`.
    ///
    /// Fields are normalized with [`CalendarFields::normalize`] first.  A
    /// wall time skipped or repeated by a DST transition yields a date that
    /// is correct in one of the two offsets involved, without a guarantee
    /// of which.
    ///
    /// ```
    /// use julian::{CalendarFields, JulianDate};
    ///
    /// // 32 January is 1 February
    /// let a = JulianDate::from_calendar(CalendarFields::date(2010, 1, 32), &chrono::Utc).unwrap();
    /// let b = JulianDate::from_calendar(CalendarFields::date(2010, 2, 1), &chrono::Utc).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn from_calendar<Tz: TimeZone>(fields: CalendarFields, tz: &Tz) -> Result<Self> {
        let local = fields.normalize()?;
        let instant = resolve_local(tz, &local)?;
        Ok(Self::from_datetime(&instant))
    }

    /// Like [`from_calendar`](Self::from_calendar), with the zone given by
    /// IANA name.
    ///
    /// A blank name fails with [`Error::MissingTimeZone`] and an unknown one
    /// with [`Error::UnknownTimeZone`].
    pub fn from_calendar_in(fields: CalendarFields, zone_name: &str) -> Result<Self> {
        let tz = zone::lookup(zone_name)?;
        Self::from_calendar(fields, &tz)
    }
}

/// Place a wall time in `tz`, resolving DST gaps and overlaps.
fn resolve_local<Tz: TimeZone>(tz: &Tz, local: &NaiveDateTime) -> Result<DateTime<Tz>> {
    match tz.from_local_datetime(local) {
        LocalResult::Single(datetime) => Ok(datetime),
        LocalResult::Ambiguous(earliest, _) => {
            debug!("wall time {local} is repeated by a DST transition; using the earlier instant");
            Ok(earliest)
        }
        LocalResult::None => {
            // Skipped wall time: apply the offset in effect at the same
            // reading on the UTC clock.
            let offset = tz.offset_from_utc_datetime(local).fix();
            let shift = TimeDelta::try_seconds(i64::from(offset.local_minus_utc()))
                .ok_or(Error::FieldOverflow)?;
            let utc = local
                .checked_sub_signed(shift)
                .ok_or(Error::FieldOverflow)?;
            debug!("wall time {local} is skipped by a DST transition; resolved to {utc} UTC");
            Ok(tz.from_utc_datetime(&utc))
        }
    }
}
