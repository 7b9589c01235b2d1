// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use thiserror::Error;

/// Errors raised while building a [`JulianDate`](crate::JulianDate) from
/// calendar fields or resolving a timezone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No timezone was supplied where one is required.
    #[error("missing timezone: a calendar date needs an explicit zone")]
    MissingTimeZone,

    /// The name is not present in the IANA timezone database.
    #[error("unknown timezone: {0}")]
    UnknownTimeZone(String),

    /// A fixed UTC offset outside ±24 hours.
    #[error("invalid UTC offset: {0} s")]
    InvalidOffset(i32),

    /// Normalized calendar fields fall outside the representable calendar.
    #[error("calendar fields overflow the representable date range")]
    FieldOverflow,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
