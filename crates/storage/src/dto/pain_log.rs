use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PainEntryInput {
    #[validate(length(min = 1, max = 64, message = "Body part is required"))]
    pub body_part: String,

    #[validate(range(min = 0, max = 10, message = "Level must be between 0 and 10"))]
    pub level: i32,

    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePainLogRequest {
    pub date: NaiveDate,

    #[validate(nested)]
    pub entries: Vec<PainEntryInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: i32) -> PainEntryInput {
        PainEntryInput {
            body_part: "lower back".to_string(),
            level,
            notes: None,
        }
    }

    #[test]
    fn accepts_levels_within_scale() {
        for level in [0, 5, 10] {
            assert!(entry(level).validate().is_ok());
        }
    }

    #[test]
    fn rejects_levels_off_scale() {
        assert!(entry(-1).validate().is_err());
        assert!(entry(11).validate().is_err());
    }

    #[test]
    fn nested_entries_are_validated() {
        let req = CreatePainLogRequest {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            entries: vec![entry(3), entry(12)],
        };
        assert!(req.validate().is_err());
    }
}
