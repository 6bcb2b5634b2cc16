//! Order timestamps as they arrive from the stores.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Order date: the stored text plus its parsed instant, if it parses.
///
/// Stores hand over whatever text was saved (ISO timestamps from the order
/// form, bare dates typed into the spreadsheet, sometimes garbage). The raw
/// text is kept so the record round-trips unchanged; analytics only look at
/// [`OrderDate::instant`], and an unparseable date simply has none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct OrderDate {
    raw: String,
    parsed: Option<DateTime<Utc>>,
}

impl OrderDate {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = parse_instant(raw.trim());
        Self { raw, parsed }
    }

    /// Build from an instant; stored as an ISO-8601 UTC timestamp with millis.
    pub fn from_instant(at: DateTime<Utc>) -> Self {
        Self {
            raw: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            parsed: Some(at),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.parsed
    }

    pub fn is_valid(&self) -> bool {
        self.parsed.is_some()
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl From<String> for OrderDate {
    fn from(value: String) -> Self {
        OrderDate::parse(value)
    }
}

impl From<OrderDate> for String {
    fn from(value: OrderDate) -> Self {
        value.raw
    }
}

impl core::fmt::Display for OrderDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.raw)
    }
}
