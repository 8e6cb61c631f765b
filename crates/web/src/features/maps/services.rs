use std::collections::HashSet;

use serde::Serialize;
use sqlx::PgPool;
use storage::{
    dto::gym::SaveFromPlaceRequest,
    error::{Result, StorageError},
    models::Gym,
    repository::gym::GymRepository,
};
use utoipa::ToSchema;

use crate::clients::places::Place;

/// A nearby place annotated with whether it is already saved locally.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NearbyGym {
    #[serde(flatten)]
    pub place: Place,
    pub is_saved: bool,
}

/// Annotate upstream places with the saved-gym dedupe set. Order and count
/// are preserved; nothing is filtered or re-sorted.
pub fn mark_saved(places: Vec<Place>, saved_place_ids: &HashSet<String>) -> Vec<NearbyGym> {
    places
        .into_iter()
        .map(|place| {
            let is_saved = saved_place_ids.contains(&place.place_id);
            NearbyGym { place, is_saved }
        })
        .collect()
}

/// Load the dedupe set: external place ids of every saved gym.
pub async fn saved_place_ids(pool: &PgPool) -> Result<HashSet<String>> {
    let repo = GymRepository::new(pool);
    Ok(repo.saved_place_ids().await?.into_iter().collect())
}

/// Save a discovered place as a gym. The pre-check gives a friendly error
/// on the common path; the unique index on place_id closes the race two
/// concurrent saves would otherwise win together.
pub async fn save_from_place(
    pool: &PgPool,
    place_id: &str,
    req: &SaveFromPlaceRequest,
) -> Result<Gym> {
    let repo = GymRepository::new(pool);

    if repo.find_by_place_id(place_id).await?.is_some() {
        return Err(StorageError::ConstraintViolation(
            "Gym already saved for this place".to_string(),
        ));
    }

    repo.create_from_place(place_id, req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: &str) -> Place {
        Place {
            place_id: id.to_string(),
            name: Some(format!("Gym {id}")),
            vicinity: None,
            geometry: None,
            rating: None,
            user_ratings_total: None,
            photos: None,
        }
    }

    #[test]
    fn flags_only_places_in_the_saved_set() {
        let saved: HashSet<String> = ["p1".to_string()].into_iter().collect();
        let annotated = mark_saved(vec![place("p1"), place("p2")], &saved);

        assert_eq!(annotated.len(), 2);
        assert_eq!(annotated[0].place.place_id, "p1");
        assert!(annotated[0].is_saved);
        assert_eq!(annotated[1].place.place_id, "p2");
        assert!(!annotated[1].is_saved);
    }

    #[test]
    fn preserves_upstream_order_and_count() {
        let saved = HashSet::new();
        let ids = ["z", "a", "m", "b"];
        let annotated = mark_saved(ids.iter().map(|&id| place(id)).collect(), &saved);

        let out: Vec<&str> = annotated.iter().map(|g| g.place.place_id.as_str()).collect();
        assert_eq!(out, ids);
    }

    #[test]
    fn empty_upstream_yields_empty_output() {
        let saved: HashSet<String> = ["p1".to_string()].into_iter().collect();
        assert!(mark_saved(Vec::new(), &saved).is_empty());
    }

    #[test]
    fn annotated_place_serializes_flat() {
        let saved = HashSet::new();
        let annotated = mark_saved(vec![place("p1")], &saved);

        let value = serde_json::to_value(&annotated[0]).unwrap();
        assert_eq!(value["place_id"], "p1");
        assert_eq!(value["is_saved"], false);
    }
}
