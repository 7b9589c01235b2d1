// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Numeric constants shared by every Julian Date formula.

/// Seconds in one (UT) day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Nanoseconds in one (UT) day.
pub const NANOS_PER_DAY: i64 = SECONDS_PER_DAY * 1_000_000_000;

/// Julian Date of the Unix epoch, 1970-01-01T00:00:00 UTC.
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// Julian Date of the J2000.0 epoch, 2000-01-01T12:00:00.
pub const JD_J2000: f64 = 2_451_545.0;

/// Length of a Julian century in days.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
