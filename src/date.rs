// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The [`JulianDate`] value type.
//!
//! A [`JulianDate`] stores a single [`Days`] quantity: the number of days
//! (and fraction of a day) elapsed since noon UT on 1 January 4713 BCE in the
//! proleptic Julian calendar.  The fractional part counts the time since the
//! preceding noon UTC, so midnight dates end in `.5`.
//!
//! Conversions to and from `chrono` instants go through the Unix epoch,
//! which sits at exactly [`JD_UNIX_EPOCH`].
//!
//! # Precision
//!
//! An `f64` near JD 2.4 million resolves about 40 µs, so a round trip
//! through [`JulianDate`] may move an instant by a few tens of microseconds.
//! The nanosecond-based operations ([`JulianDate::unix_nanos`] and
//! [`JulianDate::to_datetime`]) are only meaningful while the instant fits a
//! signed 64-bit nanosecond counter, i.e. roughly between the years 1678 and
//! 2262.  Outside that window their result is unspecified.

use chrono::{DateTime, Duration, TimeZone, Utc};
use qtty::{Centuries, Days, Simplify};
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::{
    DAYS_PER_JULIAN_CENTURY, JD_J2000, JD_UNIX_EPOCH, NANOS_PER_DAY, SECONDS_PER_DAY,
};

const NANOS_PER_SECOND: i128 = 1_000_000_000;

// ═══════════════════════════════════════════════════════════════════════════
// JulianDate
// ═══════════════════════════════════════════════════════════════════════════

/// A Julian Date: continuous day count since the start of the Julian Period.
///
/// The struct is `Copy` and layout-identical to an `f64`.  Values compare
/// and order as real numbers; later instants always map to larger dates.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use julian::JulianDate;
///
/// let jd = JulianDate::from_datetime(&Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap());
/// assert_eq!(jd.day(), 2_457_754.5);
/// assert_eq!(jd.day_number(), 2_457_754);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate {
    quantity: Days,
}

impl JulianDate {
    /// The Unix epoch, 1970-01-01T00:00:00 UTC (JD 2 440 587.5).
    pub const UNIX_EPOCH: Self = Self::new(JD_UNIX_EPOCH);

    /// J2000.0 epoch: 2000-01-01T12:00:00  (JD 2 451 545.0).
    pub const J2000: Self = Self::new(JD_J2000);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(DAYS_PER_JULIAN_CENTURY);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw day count.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// Julian Date of an absolute instant.
    ///
    /// The offset carried by `datetime` does not matter, only the instant
    /// it names.  Nanoseconds since the Unix epoch are accumulated in `i128`,
    /// so this is total over the whole range `chrono` can represent.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        let nanos = i128::from(datetime.timestamp()) * NANOS_PER_SECOND
            + i128::from(datetime.timestamp_subsec_nanos());
        Self::new(nanos as f64 / NANOS_PER_DAY as f64 + JD_UNIX_EPOCH)
    }

    /// Julian Date of the current system time.
    pub fn now() -> Self {
        Self::from_datetime(&Utc::now())
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// The Julian day as a plain `f64`.
    #[inline]
    pub const fn day(&self) -> f64 {
        self.value()
    }

    /// Integer Julian day number, `floor(jd)`.
    #[inline]
    pub fn day_number(&self) -> i64 {
        self.value().floor() as i64
    }

    /// Fraction of the day elapsed since the preceding noon UTC.
    ///
    /// Always in `[0, 1)`, also for dates before the Julian Period.
    pub fn day_fraction(&self) -> f64 {
        let fraction = self.value().rem_euclid(1.0);
        // rem_euclid may round a tiny negative remainder up to 1.0
        if fraction < 1.0 {
            fraction
        } else {
            0.0
        }
    }

    /// [`day_fraction`](Self::day_fraction) as a duration since noon UTC.
    pub fn day_fraction_duration(&self) -> Duration {
        Duration::nanoseconds((self.day_fraction() * NANOS_PER_DAY as f64) as i64)
    }

    /// Julian centuries since J2000.0 (used by nutation, precession, sidereal time).
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    // ── Unix time ─────────────────────────────────────────────────────

    /// Whole seconds since the Unix epoch, truncated toward zero.
    #[inline]
    pub fn unix_seconds(&self) -> i64 {
        ((self.value() - JD_UNIX_EPOCH) * SECONDS_PER_DAY as f64) as i64
    }

    /// Nanoseconds since the Unix epoch, truncated toward zero.
    ///
    /// The result is unspecified when the instant cannot be represented by
    /// an `i64` nanosecond count (before ~1678 or after ~2262).  The current
    /// implementation saturates at `i64::MIN` / `i64::MAX`; callers must not
    /// rely on that.
    #[inline]
    pub fn unix_nanos(&self) -> i64 {
        ((self.value() - JD_UNIX_EPOCH) * NANOS_PER_DAY as f64) as i64
    }

    // ── chrono helpers ────────────────────────────────────────────────

    /// Convert to a `chrono::DateTime<Utc>` through the nanosecond counter.
    ///
    /// Shares the range limit of [`unix_nanos`](Self::unix_nanos): outside
    /// ~1678–2262 the returned instant is unspecified.  Use
    /// [`to_utc`](Self::to_utc) for dates beyond that window.
    pub fn to_datetime(&self) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_nanos(self.unix_nanos())
    }

    /// Same instant as [`to_datetime`](Self::to_datetime), shown in `tz`.
    pub fn to_datetime_in<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        self.to_datetime().with_timezone(tz)
    }

    /// Convert to a `chrono::DateTime<Utc>` without the nanosecond window.
    ///
    /// Returns `None` if the value falls outside chrono's representable range
    /// or is not finite.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let seconds_since_epoch = (self.value() - JD_UNIX_EPOCH) * SECONDS_PER_DAY as f64;
        if !seconds_since_epoch.is_finite() {
            return None;
        }
        let secs = seconds_since_epoch.floor();
        let nanos = ((seconds_since_epoch - secs) * 1e9) as u32;
        DateTime::<Utc>::from_timestamp(secs as i64, nanos.min(999_999_999))
    }

    // ── min / max ─────────────────────────────────────────────────────

    /// Element-wise minimum.
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        Self::from_days(self.quantity.min_const(other.quantity))
    }

    /// Element-wise maximum.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        Self::from_days(self.quantity.max_const(other.quantity))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

impl std::fmt::Display for JulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {}", self.value())
    }
}

#[cfg(feature = "serde")]
impl Serialize for JulianDate {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl AddAssign<Days> for JulianDate {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl Sub<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl SubAssign<Days> for JulianDate {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl Sub for JulianDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── Conversions ───────────────────────────────────────────────────────────

impl<Tz: TimeZone> From<DateTime<Tz>> for JulianDate {
    #[inline]
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::from_datetime(&datetime)
    }
}

impl From<Days> for JulianDate {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<JulianDate> for Days {
    #[inline]
    fn from(jd: JulianDate) -> Self {
        jd.quantity
    }
}

impl From<JulianDate> for f64 {
    #[inline]
    fn from(jd: JulianDate) -> Self {
        jd.value()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    const EPSILON: f64 = 1e-6;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn unix_epoch_maps_exactly() {
        let jd = JulianDate::from_datetime(&DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(jd, JulianDate::UNIX_EPOCH);
        assert_eq!(jd.value(), 2_440_587.5);
    }

    #[test]
    fn midnight_dates_end_in_half() {
        let cases = [
            (utc(2017, 1, 1, 0, 0, 0), 2_457_754.5),
            (utc(1990, 1, 1, 0, 0, 0), 2_447_892.5),
            (utc(1998, 7, 4, 0, 0, 0), 2_450_998.5),
        ];
        for (dt, want) in cases {
            let jd = JulianDate::from_datetime(&dt);
            assert!((jd.value() - want).abs() < EPSILON, "{dt}: {jd}");
            assert!((jd.day_fraction() - 0.5).abs() < 1e-8);
        }
    }

    #[test]
    fn offset_does_not_change_the_instant() {
        let pst = FixedOffset::west_opt(8 * 3600).unwrap();
        let local = pst.with_ymd_and_hms(2010, 2, 14, 5, 21, 0).unwrap();
        let jd = JulianDate::from(local);
        assert!((jd.value() - 2_455_242.05625).abs() < EPSILON);
        assert_eq!(jd, JulianDate::from_datetime(&local.with_timezone(&Utc)));
    }

    #[test]
    fn j2000_is_noon() {
        let jd = JulianDate::from_datetime(&utc(2000, 1, 1, 12, 0, 0));
        assert_eq!(jd, JulianDate::J2000);
        assert_eq!(jd.day_fraction(), 0.0);
        assert_eq!(jd.julian_centuries().value(), 0.0);
    }

    #[test]
    fn datetime_roundtrip() {
        let dt = DateTime::from_timestamp(1_266_124_860, 123_456_789).unwrap();
        let back = JulianDate::from_datetime(&dt).to_datetime();
        let delta_ns = back.timestamp_nanos_opt().unwrap() - dt.timestamp_nanos_opt().unwrap();
        assert!(delta_ns.abs() < 50_000, "roundtrip error: {} ns", delta_ns);
    }

    #[test]
    fn to_datetime_in_keeps_instant() {
        let tz = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let jd = JulianDate::new(2_457_754.5);
        let local = jd.to_datetime_in(&tz);
        assert_eq!(local.with_timezone(&Utc), utc(2017, 1, 1, 0, 0, 0));
        assert_eq!(local.offset().local_minus_utc(), 19_800);
    }

    #[test]
    fn to_utc_reaches_beyond_nanosecond_window() {
        // 1582-10-15, before the i64 nanosecond counter starts
        let jd = JulianDate::new(2_299_160.5);
        let dt = jd.to_utc().expect("in chrono range");
        assert_eq!(dt, utc(1582, 10, 15, 0, 0, 0));
        assert!(JulianDate::new(f64::NAN).to_utc().is_none());
        assert!(JulianDate::new(1e15).to_utc().is_none());
    }

    #[test]
    fn unix_seconds_truncate_toward_zero() {
        let jd = JulianDate::UNIX_EPOCH + Days::new(1.5 / 86_400.0);
        assert_eq!(jd.unix_seconds(), 1);
        let jd = JulianDate::UNIX_EPOCH - Days::new(1.5 / 86_400.0);
        assert_eq!(jd.unix_seconds(), -1);
        assert_eq!(JulianDate::new(2_457_754.5).unix_seconds(), 1_483_228_800);
    }

    #[test]
    fn unix_nanos_near_epoch() {
        let jd = JulianDate::UNIX_EPOCH + Days::new(0.5);
        assert_eq!(jd.unix_nanos(), 43_200_000_000_000);
        assert_eq!(JulianDate::UNIX_EPOCH.unix_nanos(), 0);
    }

    #[test]
    fn day_fraction_duration_measures_from_noon() {
        let jd = JulianDate::from_datetime(&utc(2010, 2, 14, 5, 21, 0));
        assert!((jd.day_fraction() - 0.72292).abs() < 1e-5);
        // 05:21 is 17 h 21 min after the preceding noon
        let expected = Duration::hours(17) + Duration::minutes(21);
        let delta = jd.day_fraction_duration() - expected;
        assert!(delta.num_microseconds().unwrap().abs() < 50);
    }

    #[test]
    fn day_fraction_of_negative_dates() {
        let jd = JulianDate::new(-0.25);
        assert!((jd.day_fraction() - 0.75).abs() < 1e-12);
        assert_eq!(jd.day_number(), -1);
        assert_eq!(JulianDate::new(-1e-20).day_fraction(), 0.0);
    }

    #[test]
    fn day_number_and_day() {
        let jd = JulianDate::new(2_455_241.722917);
        assert_eq!(jd.day_number(), 2_455_241);
        assert_eq!(jd.day(), 2_455_241.722917);
        assert_eq!(f64::from(jd), 2_455_241.722917);
    }

    #[test]
    fn julian_centuries_from_j2000() {
        let jd = JulianDate::J2000 + Days::new(36_525.0 * 3.0);
        assert!((jd.julian_centuries().value() - 3.0).abs() < 1e-12);
        let jd = JulianDate::J2000 - Days::new(36_525.0 / 2.0);
        assert!((jd.julian_centuries().value() + 0.5).abs() < 1e-12);
    }

    #[test]
    fn const_min_max() {
        const A: JulianDate = JulianDate::new(10.0);
        const B: JulianDate = JulianDate::new(14.0);
        const MIN: JulianDate = A.min(B);
        const MAX: JulianDate = A.max(B);
        assert_eq!(MIN.quantity(), Days::new(10.0));
        assert_eq!(MAX.quantity(), Days::new(14.0));
    }

    #[test]
    fn add_assign_sub_assign() {
        let mut jd = JulianDate::new(2_451_545.0);
        jd += Days::new(1.0);
        assert_eq!(jd.quantity(), Days::new(2_451_546.0));
        jd -= Days::new(0.5);
        assert_eq!(jd.quantity(), Days::new(2_451_545.5));
        assert_eq!(jd - JulianDate::J2000, Days::new(0.5));
    }

    #[test]
    fn into_days() {
        let jd = JulianDate::new(2_451_547.5);
        let days: Days = jd.into();
        assert_eq!(days, Days::new(2_451_547.5));
        assert_eq!(JulianDate::from(days), jd);
    }

    #[test]
    fn display() {
        assert_eq!(JulianDate::new(2_451_545.5).to_string(), "JD 2451545.5");
    }

    #[test]
    fn now_is_after_2020() {
        assert!(JulianDate::now() > JulianDate::new(2_458_849.5));
    }
}
