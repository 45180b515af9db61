use chrono::{
    NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
    format::{ParseErrorKind, ParseResult},
};

/// Month names as written by Arabic sites, January first
pub const ARABIC_MONTHS: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Chapter date format of a site: a chrono pattern and, for localized month
/// names, the table to read them from.
///
/// Dates without a time of day resolve to midnight UTC.
#[derive(Debug, Clone, Copy)]
pub struct DateFormat {
    pattern: &'static str,
    months: Option<&'static [&'static str; 12]>,
}

impl DateFormat {
    pub const fn new(pattern: &'static str) -> Self {
        Self {
            pattern,
            months: None,
        }
    }

    pub const fn with_months(pattern: &'static str, months: &'static [&'static str; 12]) -> Self {
        Self {
            pattern,
            months: Some(months),
        }
    }

    pub fn parse(&self, text: &str) -> ParseResult<NaiveDateTime> {
        let text = self.localize(text.trim());

        match NaiveDateTime::parse_from_str(&text, self.pattern) {
            Ok(datetime) => Ok(datetime),
            Err(e) if e.kind() == ParseErrorKind::NotEnough => {
                NaiveDate::parse_from_str(&text, self.pattern)
                    .map(|date| date.and_time(NaiveTime::default()))
            }
            Err(e) => Err(e),
        }
    }

    /// Epoch millis of `text`, 0 when it is absent or cannot be read
    pub fn parse_epoch_millis(&self, text: Option<&str>) -> i64 {
        let Some(text) = text else {
            return 0;
        };

        match self.parse(text) {
            Ok(datetime) => Utc.from_utc_datetime(&datetime).timestamp_millis(),
            Err(e) => {
                debug!("failed to parse date '{text}' with '{}': {e}", self.pattern);
                0
            }
        }
    }

    fn localize(&self, text: &str) -> String {
        let Some(months) = self.months else {
            return text.to_string();
        };

        months
            .iter()
            .zip(ENGLISH_MONTHS)
            .fold(text.to_string(), |text, (local, english)| {
                text.replace(local, english)
            })
    }
}
