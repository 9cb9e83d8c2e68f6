use chrono::{DateTime, NaiveDateTime};

pub fn money(amount: f64) -> String {
    format!("${amount:.2}")
}

fn parse(raw: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

/// Date and minute of an upstream timestamp, or the raw string if it does not parse.
pub fn timestamp(raw: &str) -> String {
    parse(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn time_of_day(raw: &str) -> String {
    parse(raw)
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| raw.to_string())
}
