use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::auth::UserInfo;
use crate::dto::leaderboard::LeaderboardEntry;
use crate::error::Result;
use crate::repository::leaderboard::{LeaderboardRepository, LiftRecordRow};

/// Per-gym, per-lift ranking of users by their best recorded weight.
///
/// Read-only; an unknown gym or a lift with no records yields an empty
/// ranking rather than an error.
pub async fn gym_leaderboard(
    pool: &PgPool,
    gym_id: Uuid,
    lift: &str,
    limit: u32,
) -> Result<Vec<LeaderboardEntry>> {
    let repo = LeaderboardRepository::new(pool);
    let rows = repo.fetch_lift_records(gym_id, lift).await?;

    Ok(rank_entries(rows, limit as usize))
}

/// Group records by user, keep each user's maximum weight, sort descending
/// by that maximum, and truncate. Ties break by ascending user id so the
/// ordering is deterministic.
pub fn rank_entries(rows: Vec<LiftRecordRow>, limit: usize) -> Vec<LeaderboardEntry> {
    let mut best: HashMap<Uuid, (String, Decimal)> = HashMap::new();

    for row in rows {
        best.entry(row.user_id)
            .and_modify(|(_, max)| {
                if row.weight > *max {
                    *max = row.weight;
                }
            })
            .or_insert((row.email, row.weight));
    }

    let mut entries: Vec<LeaderboardEntry> = best
        .into_iter()
        .map(|(user_id, (email, max_weight))| LeaderboardEntry {
            user: UserInfo { user_id, email },
            max_weight,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.max_weight
            .cmp(&a.max_weight)
            .then(a.user.user_id.cmp(&b.user.user_id))
    });
    entries.truncate(limit);

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(user_id: Uuid, email: &str, weight: i64) -> LiftRecordRow {
        LiftRecordRow {
            user_id,
            email: email.to_string(),
            weight: Decimal::from(weight),
        }
    }

    #[test]
    fn reports_each_users_historical_best() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let rows = vec![
            row(a, "a@example.com", 100),
            row(a, "a@example.com", 120),
            row(b, "b@example.com", 110),
        ];

        let entries = rank_entries(rows, 10);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].user.user_id, a);
        assert_eq!(entries[0].max_weight, Decimal::from(120));
        assert_eq!(entries[1].user.user_id, b);
        assert_eq!(entries[1].max_weight, Decimal::from(110));
    }

    #[test]
    fn max_is_the_best_not_the_latest() {
        let a = Uuid::new_v4();
        let rows = vec![
            row(a, "a@example.com", 140),
            row(a, "a@example.com", 90),
        ];

        let entries = rank_entries(rows, 10);
        assert_eq!(entries[0].max_weight, Decimal::from(140));
    }

    #[test]
    fn output_is_sorted_non_increasing() {
        let rows: Vec<LiftRecordRow> = (0..20)
            .map(|i| row(Uuid::new_v4(), "u@example.com", 50 + (i * 7) % 60))
            .collect();

        let entries = rank_entries(rows, 20);
        for pair in entries.windows(2) {
            assert!(pair[0].max_weight >= pair[1].max_weight);
        }
    }

    #[test]
    fn truncates_to_limit() {
        let rows: Vec<LiftRecordRow> = (0..15)
            .map(|i| row(Uuid::new_v4(), "u@example.com", 100 + i))
            .collect();

        assert_eq!(rank_entries(rows.clone(), 10).len(), 10);
        assert_eq!(rank_entries(rows, 3).len(), 3);
    }

    #[test]
    fn empty_input_yields_empty_ranking() {
        assert!(rank_entries(Vec::new(), 10).is_empty());
    }

    #[test]
    fn equal_weights_order_by_user_id() {
        let mut ids = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let rows: Vec<LiftRecordRow> = ids
            .iter()
            .map(|&id| row(id, "tie@example.com", 100))
            .collect();

        let entries = rank_entries(rows, 10);

        ids.sort();
        let ranked: Vec<Uuid> = entries.iter().map(|e| e.user.user_id).collect();
        assert_eq!(ranked, ids);
    }
}
