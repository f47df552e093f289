//! Store Model

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::{Location, Status};

/// Literal used for a weekday with no opening hours
pub const CLOSED: &str = "closed";

fn closed() -> String {
    CLOSED.to_string()
}

/// Weekly opening-hours table, one free-text entry per weekday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    #[serde(default = "closed")]
    pub monday: String,
    #[serde(default = "closed")]
    pub tuesday: String,
    #[serde(default = "closed")]
    pub wednesday: String,
    #[serde(default = "closed")]
    pub thursday: String,
    #[serde(default = "closed")]
    pub friday: String,
    #[serde(default = "closed")]
    pub saturday: String,
    #[serde(default = "closed")]
    pub sunday: String,
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            monday: closed(),
            tuesday: closed(),
            wednesday: closed(),
            thursday: closed(),
            friday: closed(),
            saturday: closed(),
            sunday: closed(),
        }
    }
}

impl OpeningHours {
    /// Same hours on every day of the week
    pub fn every_day(hours: impl Into<String>) -> Self {
        let hours = hours.into();
        Self {
            monday: hours.clone(),
            tuesday: hours.clone(),
            wednesday: hours.clone(),
            thursday: hours.clone(),
            friday: hours.clone(),
            saturday: hours.clone(),
            sunday: hours,
        }
    }

    pub fn get(&self, day: Weekday) -> &str {
        match day {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn is_closed(&self, day: Weekday) -> bool {
        self.get(day).trim().eq_ignore_ascii_case(CLOSED)
    }
}

/// Store entity
///
/// Category name and active-flyer count are joined in at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub location: Location,
    pub opening_hours: OpeningHours,
    pub status: Status,
    pub website: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create store payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreCreate {
    pub name: String,
    pub category_id: String,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub opening_hours: OpeningHours,
    pub status: Option<Status>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Update store payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreUpdate {
    pub name: Option<String>,
    pub category_id: Option<String>,
    pub location: Option<Location>,
    pub opening_hours: Option<OpeningHours>,
    pub status: Option<Status>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_hours_defaults_to_closed() {
        let hours: OpeningHours = serde_json::from_str(r#"{"monday":"9:00-21:00"}"#).unwrap();
        assert_eq!(hours.get(Weekday::Mon), "9:00-21:00");
        assert!(hours.is_closed(Weekday::Sun));
        assert!(!hours.is_closed(Weekday::Mon));
    }
}
