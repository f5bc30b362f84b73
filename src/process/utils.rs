/// Year stamped on every synthesized contact date. The source data has no
/// year column, so all contacts collapse onto this one.
pub const CONTACT_YEAR: u32 = 2022;

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// "blue-collar" → "blue_collar", "admin." → "admin"
pub fn clean_job(raw: &str) -> String {
    raw.replace('.', "").replace('-', "_")
}

/// "basic.4y" → `Some("basic_4y")`, "unknown" → `None`
pub fn clean_education(raw: &str) -> Option<String> {
    let cleaned = raw.replace('.', "_");
    if cleaned == "unknown" {
        None
    } else {
        Some(cleaned)
    }
}

/// 1 iff `value` is exactly `sentinel`; missing counts as a mismatch.
pub fn binary_flag(value: Option<&str>, sentinel: &str) -> u8 {
    u8::from(value == Some(sentinel))
}

pub fn is_yes(value: Option<&str>) -> u8 {
    binary_flag(value, "yes")
}

/// "jan" → 1 … "dec" → 12. Exact match only.
pub fn month_number(abbr: &str) -> Option<u32> {
    MONTHS
        .iter()
        .position(|m| *m == abbr)
        .map(|idx| idx as u32 + 1)
}

/// Integer day of month. Accepts surrounding whitespace and a zero
/// fractional part ("7.0"), which is how a day column with gaps gets
/// written out by float-typed exporters.
pub fn parse_day(raw: &str) -> Option<u32> {
    let s = raw.trim();
    let s = s
        .split_once('.')
        .filter(|(_, frac)| !frac.is_empty() && frac.chars().all(|c| c == '0'))
        .map_or(s, |(whole, _)| whole);
    s.parse::<u32>().ok().filter(|d| (1..=31).contains(d))
}

/// `2022-MM-DD`
pub fn contact_date(month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", CONTACT_YEAR, month, day)
}
