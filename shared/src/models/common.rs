//! Types shared by several entities

use serde::{Deserialize, Serialize};

/// Enabled/disabled switch carried by catalog entities
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Enable,
    Disable,
}

impl Status {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Status::Enable)
    }
}

/// Postal location of a store or app user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub address: String,
    /// City name, matched case-sensitively by list filters
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Location {
    pub fn in_city(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&Status::Enable).unwrap(), "\"ENABLE\"");
        let s: Status = serde_json::from_str("\"DISABLE\"").unwrap();
        assert!(!s.is_enabled());
    }
}
