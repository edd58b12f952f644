// src/utils.rs
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Utc};

/// Placeholder shown for absent optional values.
pub const PLACEHOLDER: &str = "-";

/// Offset between the Gregorian and Thai Buddhist calendars.
const BUDDHIST_ERA_OFFSET: i32 = 543;

const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Returns the trimmed value when it carries any text.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Owned variant of [`non_blank`], used while building records from form fields.
pub fn clean(value: &Option<String>) -> Option<String> {
    non_blank(value.as_deref()).map(str::to_string)
}

/// The single defaulting primitive for displayed values.
pub fn or_placeholder(value: Option<&str>) -> &str {
    non_blank(value).unwrap_or(PLACEHOLDER)
}

/// Thailand observes no daylight saving.
const BANGKOK_UTC_OFFSET_HOURS: i64 = 7;

pub fn bangkok_local(at: DateTime<Utc>) -> NaiveDateTime {
    at.naive_utc() + Duration::hours(BANGKOK_UTC_OFFSET_HOURS)
}

pub fn today_in_thailand() -> NaiveDate {
    bangkok_local(Utc::now()).date()
}

/// Short Thai-locale date, e.g. `19/10/2569`.
pub fn thai_date(date: NaiveDate) -> String {
    format!(
        "{}/{}/{}",
        date.day(),
        date.month(),
        date.year() + BUDDHIST_ERA_OFFSET
    )
}

/// Long Thai-locale date with time, e.g. `19 ตุลาคม 2569 เวลา 14:05 น.`.
pub fn thai_datetime(at: DateTime<Utc>) -> String {
    let local = bangkok_local(at);
    format!(
        "{} {} {} เวลา {:02}:{:02} น.",
        local.day(),
        THAI_MONTHS[local.month0() as usize],
        local.year() + BUDDHIST_ERA_OFFSET,
        local.hour(),
        local.minute()
    )
}

/// Opaque submission id: prefix, Unix milliseconds, six random hex digits.
pub fn submission_id(prefix: &str, at: DateTime<Utc>) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!(
        "{}{}{}",
        prefix,
        at.timestamp_millis(),
        suffix[..6].to_uppercase()
    )
}

/// Keeps any script (Thai names included) but removes characters that break
/// attachment file names.
pub fn sanitize_filename_component(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() {
        "applicant".to_string()
    } else {
        cleaned
    }
}
