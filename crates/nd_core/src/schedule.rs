use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::ScheduleSettings;
use crate::{Error, Result};

/// Hours between scrape runs. Only the intervals offered by the console are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ScraperInterval(u8);

impl ScraperInterval {
    pub const CHOICES: [u8; 6] = [1, 2, 4, 6, 12, 24];

    pub fn hours(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> String {
        match self.0 {
            1 => "Every hour".to_string(),
            24 => "Once per day".to_string(),
            n => format!("Every {} hours", n),
        }
    }
}

impl TryFrom<u8> for ScraperInterval {
    type Error = Error;

    fn try_from(hours: u8) -> Result<Self> {
        if Self::CHOICES.contains(&hours) {
            Ok(Self(hours))
        } else {
            Err(Error::Validation(format!(
                "Scraper interval must be one of {:?} hours, got {}",
                Self::CHOICES,
                hours
            )))
        }
    }
}

impl From<ScraperInterval> for u8 {
    fn from(interval: ScraperInterval) -> Self {
        interval.0
    }
}

impl FromStr for ScraperInterval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hours = s
            .trim()
            .parse::<u8>()
            .map_err(|_| Error::Validation(format!("Invalid scraper interval: {}", s)))?;
        Self::try_from(hours)
    }
}

/// Daily publication time, written as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublishTime(NaiveTime);

impl PublishTime {
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for PublishTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for PublishTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map(Self)
            .map_err(|_| Error::Validation(format!("Publish time must be HH:MM, got {:?}", s)))
    }
}

impl TryFrom<String> for PublishTime {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<PublishTime> for String {
    fn from(time: PublishTime) -> Self {
        time.to_string()
    }
}

/// The schedule form as the browser posts it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleForm {
    #[serde(default)]
    pub scraper_interval: String,
    #[serde(default)]
    pub publish_time: String,
}

impl TryFrom<ScheduleForm> for ScheduleSettings {
    type Error = Error;

    fn try_from(form: ScheduleForm) -> Result<Self> {
        if form.scraper_interval.trim().is_empty() {
            return Err(Error::required("Scraper interval"));
        }
        if form.publish_time.trim().is_empty() {
            return Err(Error::required("Publish time"));
        }
        Ok(ScheduleSettings {
            scraper_interval: form.scraper_interval.parse()?,
            publish_time: form.publish_time.parse()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleSummary {
    pub scraping: String,
    pub next_scrape: String,
    pub publication: String,
    pub next_publication: String,
}

/// Scrapes run on interval boundaries counted from midnight.
fn minutes_to_next_scrape(interval: ScraperInterval, now: NaiveDateTime) -> u32 {
    let period = u32::from(interval.hours()) * 60;
    let elapsed = now.hour() * 60 + now.minute();
    period - elapsed % period
}

fn in_words(minutes: u32) -> String {
    fn unit(n: u32, name: &str) -> String {
        if n == 1 {
            format!("1 {}", name)
        } else {
            format!("{} {}s", n, name)
        }
    }
    let (hours, minutes) = (minutes / 60, minutes % 60);
    match (hours, minutes) {
        (0, m) => format!("In {}", unit(m, "minute")),
        (h, 0) => format!("In {}", unit(h, "hour")),
        (h, m) => format!("In {} {}", unit(h, "hour"), unit(m, "minute")),
    }
}

impl ScheduleSettings {
    /// Describe the automation schedule as seen at `now`.
    pub fn summary(&self, now: NaiveDateTime) -> ScheduleSummary {
        let day = if now.time() < self.publish_time.time() {
            "Today"
        } else {
            "Tomorrow"
        };
        ScheduleSummary {
            scraping: format!("Every {} hour(s)", self.scraper_interval.hours()),
            next_scrape: in_words(minutes_to_next_scrape(self.scraper_interval, now)),
            publication: self.publish_time.to_string(),
            next_publication: format!("{} at {}", day, self.publish_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn schedule(hours: u8, time: &str) -> ScheduleSettings {
        ScheduleSettings {
            scraper_interval: ScraperInterval::try_from(hours).unwrap(),
            publish_time: time.parse().unwrap(),
        }
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_interval_accepts_only_console_choices() {
        for hours in ScraperInterval::CHOICES {
            assert!(ScraperInterval::try_from(hours).is_ok());
        }
        assert!(ScraperInterval::try_from(3u8).is_err());
        assert!(ScraperInterval::try_from(0u8).is_err());
        assert!("abc".parse::<ScraperInterval>().is_err());
        assert_eq!("12".parse::<ScraperInterval>().unwrap().hours(), 12);
    }

    #[test]
    fn test_interval_labels() {
        assert_eq!(ScraperInterval::try_from(1u8).unwrap().label(), "Every hour");
        assert_eq!(ScraperInterval::try_from(6u8).unwrap().label(), "Every 6 hours");
        assert_eq!(ScraperInterval::try_from(24u8).unwrap().label(), "Once per day");
    }

    #[test]
    fn test_publish_time_parsing() {
        assert_eq!("09:00".parse::<PublishTime>().unwrap().to_string(), "09:00");
        assert!("9am".parse::<PublishTime>().is_err());
        assert!("25:00".parse::<PublishTime>().is_err());
    }

    #[test]
    fn test_schedule_serde_uses_plain_values() {
        let json = serde_json::to_value(schedule(2, "09:00")).unwrap();
        assert_eq!(json, serde_json::json!({"scraper_interval": 2, "publish_time": "09:00"}));

        let bad: std::result::Result<ScheduleSettings, _> =
            serde_json::from_str(r#"{"scraper_interval": 5, "publish_time": "09:00"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_summary_before_publish_time_is_today() {
        let summary = schedule(2, "09:00").summary(at(7, 30));
        assert_eq!(summary.scraping, "Every 2 hour(s)");
        assert_eq!(summary.publication, "09:00");
        assert_eq!(summary.next_publication, "Today at 09:00");
    }

    #[test]
    fn test_next_scrape_counts_to_the_next_interval_boundary() {
        assert_eq!(schedule(2, "09:00").summary(at(7, 30)).next_scrape, "In 30 minutes");
        assert_eq!(schedule(4, "09:00").summary(at(9, 0)).next_scrape, "In 3 hours");
        assert_eq!(schedule(1, "09:00").summary(at(10, 59)).next_scrape, "In 1 minute");
        assert_eq!(schedule(24, "09:00").summary(at(22, 36)).next_scrape, "In 1 hour 24 minutes");
        assert_eq!(schedule(6, "09:00").summary(at(0, 0)).next_scrape, "In 6 hours");
    }

    #[test]
    fn test_schedule_form_reports_blank_and_bad_fields() {
        let form = |interval: &str, time: &str| ScheduleForm {
            scraper_interval: interval.to_string(),
            publish_time: time.to_string(),
        };
        let parsed = ScheduleSettings::try_from(form("12", "18:30")).unwrap();
        assert_eq!(parsed, schedule(12, "18:30"));

        let blank = ScheduleSettings::try_from(form("2", "")).unwrap_err();
        assert_eq!(blank.to_string(), Error::required("Publish time").to_string());
        assert!(matches!(ScheduleSettings::try_from(form("5", "09:00")), Err(Error::Validation(_))));
        assert!(matches!(ScheduleSettings::try_from(form("2", "9am")), Err(Error::Validation(_))));
    }

    #[test]
    fn test_summary_after_publish_time_is_tomorrow() {
        assert_eq!(schedule(4, "09:00").summary(at(9, 0)).next_publication, "Tomorrow at 09:00");
        assert_eq!(schedule(4, "09:00").summary(at(18, 45)).next_publication, "Tomorrow at 09:00");
    }
}
