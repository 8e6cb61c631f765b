use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::auth::UserInfo;

pub const DEFAULT_LIFT: &str = "BENCH_PRESS";

#[derive(Debug, Deserialize, IntoParams)]
pub struct LeaderboardQuery {
    #[serde(default = "default_lift")]
    pub lift: String,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_lift() -> String {
    DEFAULT_LIFT.to_string()
}

fn default_limit() -> u32 {
    10
}

impl Default for LeaderboardQuery {
    fn default() -> Self {
        Self {
            lift: default_lift(),
            limit: default_limit(),
        }
    }
}

impl LeaderboardQuery {
    /// Only `limit` is bounded. The lift is an open string set; a value
    /// matching no records (including the empty string) yields an empty
    /// ranking rather than a client error.
    pub fn validate(&self) -> Result<(), String> {
        if self.limit < 1 || self.limit > 100 {
            return Err("limit must be between 1 and 100".to_string());
        }
        Ok(())
    }
}

/// One ranked leaderboard row: a user's best recorded weight for the
/// queried gym and lift.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LeaderboardEntry {
    pub user: UserInfo,
    pub max_weight: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_bench_press_top_ten() {
        let query = LeaderboardQuery::default();
        assert_eq!(query.lift, "BENCH_PRESS");
        assert_eq!(query.limit, 10);
        assert!(query.validate().is_ok());
    }

    #[test]
    fn query_string_defaults_apply_per_field() {
        let query: LeaderboardQuery = serde_json::from_str(r#"{"lift":"SQUAT"}"#).unwrap();
        assert_eq!(query.lift, "SQUAT");
        assert_eq!(query.limit, 10);
    }

    #[test]
    fn rejects_non_positive_and_oversized_limits() {
        let mut query = LeaderboardQuery::default();
        query.limit = 0;
        assert!(query.validate().is_err());
        query.limit = 101;
        assert!(query.validate().is_err());
        query.limit = 1;
        assert!(query.validate().is_ok());
    }

    #[test]
    fn unmatched_lift_values_are_not_client_errors() {
        let mut query = LeaderboardQuery::default();
        query.lift = String::new();
        assert!(query.validate().is_ok());
        query.lift = "ZERCHER_SQUAT".to_string();
        assert!(query.validate().is_ok());
    }
}
