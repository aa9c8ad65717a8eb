//! Ready-made strategies for dates and URLs.
//!
//! Dates have two competing wire forms, so both are offered over the same
//! domain type (`chrono::DateTime<Utc>`):
//!
//! - [`DateKey`]: floating-point seconds since 2001-01-01T00:00:00Z
//! - [`Iso8601DateKey`]: an ISO-8601 / RFC 3339 date-time string
//!
//! [`UrlKey`] reads a string as an absolute `url::Url`.

#[cfg(feature = "chrono")]
use chrono::{DateTime, SecondsFormat, Utc};

use crate::key::{JsonValueKey, KeyedStorage};

/// Unix timestamp of the reference date 2001-01-01T00:00:00Z.
#[cfg(feature = "chrono")]
pub const REFERENCE_DATE_UNIX_SECONDS: i64 = 978_307_200;

/// Dates stored as seconds (with fraction) since the reference date.
#[cfg(feature = "chrono")]
pub struct DateKey;

#[cfg(feature = "chrono")]
impl JsonValueKey for DateKey {
    type Raw = f64;
    type Value = DateTime<Utc>;

    fn value_from(raw: f64) -> Option<DateTime<Utc>> {
        if !raw.is_finite() {
            return None;
        }
        let whole = raw.floor();
        // Anything this far out is beyond chrono's range anyway.
        if whole.abs() > 1e15 {
            return None;
        }
        let mut secs = whole as i64;
        let mut nanos = ((raw - whole) * 1e9).round() as u32;
        if nanos >= 1_000_000_000 {
            secs += 1;
            nanos -= 1_000_000_000;
        }
        DateTime::<Utc>::from_timestamp(secs.checked_add(REFERENCE_DATE_UNIX_SECONDS)?, nanos)
    }

    fn raw_value_for(value: &DateTime<Utc>) -> f64 {
        let secs = value.timestamp() - REFERENCE_DATE_UNIX_SECONDS;
        secs as f64 + f64::from(value.timestamp_subsec_nanos()) / 1e9
    }
}

/// Dates stored as ISO-8601 text, written as `YYYY-MM-DDTHH:MM:SSZ`.
///
/// Any RFC 3339 offset is accepted on read and normalized to UTC. Writing
/// truncates to whole seconds.
///
/// Only years 0000 through 9999 round-trip. Outside that range chrono writes
/// an expanded year such as `+12000-01-01T00:00:00Z`, which RFC 3339 parsing
/// rejects, so the stored text reads back as `None`.
#[cfg(feature = "chrono")]
pub struct Iso8601DateKey;

#[cfg(feature = "chrono")]
impl JsonValueKey for Iso8601DateKey {
    type Raw = String;
    type Value = DateTime<Utc>;

    fn value_from(raw: String) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&raw)
            .ok()
            .map(|date| date.with_timezone(&Utc))
    }

    fn raw_value_for(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Absolute URLs stored as strings.
#[cfg(feature = "url")]
pub struct UrlKey;

#[cfg(feature = "url")]
impl JsonValueKey for UrlKey {
    type Raw = String;
    type Value = url::Url;

    fn value_from(raw: String) -> Option<url::Url> {
        url::Url::parse(&raw).ok()
    }

    fn raw_value_for(value: &url::Url) -> String {
        value.as_str().to_owned()
    }
}

/// Named accessors for the strategies in this module.
///
/// Both date accessors may address the same stored value; each reads only
/// the wire form its strategy understands.
pub trait StandardAccessors: KeyedStorage {
    #[cfg(feature = "chrono")]
    fn date_value(&self) -> Option<DateTime<Utc>> {
        self.value_for::<DateKey>()
    }

    #[cfg(feature = "chrono")]
    fn set_date_value(&mut self, new_value: Option<DateTime<Utc>>) {
        self.set_value_for::<DateKey>(new_value);
    }

    #[cfg(feature = "chrono")]
    fn iso8601_date_value(&self) -> Option<DateTime<Utc>> {
        self.value_for::<Iso8601DateKey>()
    }

    #[cfg(feature = "chrono")]
    fn set_iso8601_date_value(&mut self, new_value: Option<DateTime<Utc>>) {
        self.set_value_for::<Iso8601DateKey>(new_value);
    }

    #[cfg(feature = "url")]
    fn url_value(&self) -> Option<url::Url> {
        self.value_for::<UrlKey>()
    }

    #[cfg(feature = "url")]
    fn set_url_value(&mut self, new_value: Option<url::Url>) {
        self.set_value_for::<UrlKey>(new_value);
    }
}

impl<S> StandardAccessors for S where S: KeyedStorage + ?Sized {}
