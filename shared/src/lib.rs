use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A named calendar-date marker owned by the remote holidays service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    /// Opaque identifier assigned by the server
    pub id: String,
    /// Calendar date, either plain "YYYY-MM-DD" or RFC 3339 with a time component
    pub date: String,
    /// Display name of the holiday
    pub title: String,
}

impl Holiday {
    /// The date portion of `date`, with any time component stripped.
    ///
    /// The server stores dates as timestamps and may return either
    /// "2025-12-25" or "2025-12-25T00:00:00Z"; calendar cells match on
    /// the "YYYY-MM-DD" prefix only.
    pub fn date_key(&self) -> &str {
        self.date.split('T').next().unwrap_or(&self.date)
    }

    /// Whether this holiday falls on the given "YYYY-MM-DD" day.
    pub fn falls_on(&self, day: &str) -> bool {
        self.date_key() == day
    }
}

/// Request body for creating a holiday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateHolidayRequest {
    /// Display name of the holiday
    pub title: String,
    /// Date to attach the holiday to ("YYYY-MM-DD")
    pub date: String,
}

impl CreateHolidayRequest {
    /// Validate the draft before any network call is made.
    ///
    /// Returns a human-readable message when the draft must not be
    /// submitted: an empty (or whitespace-only) title, or a date that is
    /// not a real "YYYY-MM-DD" calendar date.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Please enter a holiday name".to_string());
        }
        if NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err() {
            return Err("Invalid date, expected YYYY-MM-DD".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holiday(date: &str) -> Holiday {
        Holiday {
            id: "65a1b2c3d4e5f6a7b8c9d0e1".to_string(),
            date: date.to_string(),
            title: "Christmas".to_string(),
        }
    }

    #[test]
    fn test_date_key_strips_time_component() {
        assert_eq!(holiday("2025-12-25T00:00:00Z").date_key(), "2025-12-25");
        assert_eq!(holiday("2025-12-25T09:30:00+01:00").date_key(), "2025-12-25");
    }

    #[test]
    fn test_date_key_plain_date_unchanged() {
        assert_eq!(holiday("2025-12-25").date_key(), "2025-12-25");
    }

    #[test]
    fn test_falls_on_matches_exactly_one_day() {
        let h = holiday("2025-12-25T00:00:00Z");
        assert!(h.falls_on("2025-12-25"));
        assert!(!h.falls_on("2025-12-24"));
        assert!(!h.falls_on("2025-12-26"));
    }

    #[test]
    fn test_deserialize_server_shape() {
        let json = r#"{"id":"65a1b2c3","date":"2025-12-25T00:00:00Z","title":"Christmas"}"#;
        let h: Holiday = serde_json::from_str(json).unwrap();
        assert_eq!(h.id, "65a1b2c3");
        assert_eq!(h.date_key(), "2025-12-25");
        assert_eq!(h.title, "Christmas");
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let req = CreateHolidayRequest {
            title: "   ".to_string(),
            date: "2025-12-25".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_date() {
        let req = CreateHolidayRequest {
            title: "Christmas".to_string(),
            date: "2025-02-30".to_string(),
        };
        assert!(req.validate().is_err());

        let req = CreateHolidayRequest {
            title: "Christmas".to_string(),
            date: "not-a-date".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_complete_draft() {
        let req = CreateHolidayRequest {
            title: "Christmas".to_string(),
            date: "2025-12-25".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
