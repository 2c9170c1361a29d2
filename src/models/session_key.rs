use super::time_slot::TimeSlot;
use crate::errors::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Identifies one ride: a date plus an optional time-of-day slot.
///
/// Text form is `YYYY-MM-DD` or `YYYY-MM-DD <Slot>`, and that text form is
/// also how keys are ordered and stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionKey {
    pub date: NaiveDate,
    pub slot: Option<TimeSlot>,
}

impl SessionKey {
    pub fn new(date: NaiveDate, slot: Option<TimeSlot>) -> Self {
        Self { date, slot }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot {
            Some(slot) => write!(f, "{} {}", self.date_str(), slot.label()),
            None => write!(f, "{}", self.date_str()),
        }
    }
}

// ISO dates sort like their text, so comparing (date, label) matches the
// lexicographic order of the text form.
impl Ord for SessionKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.slot.map(|s| s.label()).cmp(&other.slot.map(|s| s.label())))
    }
}

impl PartialOrd for SessionKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for SessionKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date_raw, slot_raw) = match s.split_once(' ') {
            Some((d, rest)) => (d, Some(rest)),
            None => (s, None),
        };

        let date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidSessionKey(s.to_string()))?;

        let slot = match slot_raw {
            Some(label) => Some(
                TimeSlot::from_label(label)
                    .ok_or_else(|| AppError::InvalidSessionKey(s.to_string()))?,
            ),
            None => None,
        };

        Ok(Self { date, slot })
    }
}

impl TryFrom<String> for SessionKey {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SessionKey> for String {
    fn from(key: SessionKey) -> Self {
        key.to_string()
    }
}
