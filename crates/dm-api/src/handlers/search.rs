use axum::{extract::State, Json};

use dm_common::{
    api::{SearchRequest, SearchResponse},
    matching::search,
    DriverRecord,
};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::SharedState;

const DEFAULT_RESULT_LIMIT: usize = 50;
const MAX_RESULT_LIMIT: usize = 200;

/// Run the filter/rank pipeline against the roster snapshot.
/// The limit applies to the main list only; the featured panel always
/// carries every pro-tier match so the two views stay consistent.
pub async fn search_drivers(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let limit = request
        .limit
        .unwrap_or(DEFAULT_RESULT_LIMIT)
        .clamp(1, MAX_RESULT_LIMIT);

    let criteria = request.into_criteria();
    let view = search(&state.roster, &criteria);

    let mut response = SearchResponse::from_view(view);
    response.drivers.truncate(limit);

    Ok(Json(response))
}

/// Full roster in original order: the reset view of the directory.
pub async fn list_drivers(
    State(state): State<SharedState>,
    _auth: AuthUser,
) -> Json<Vec<DriverRecord>> {
    Json(state.roster.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_with_empty_request_returns_partitioned_roster() {
        let state = crate::test_state("test-key");
        let request = SearchRequest::default();

        let Json(response) = search_drivers(State(state), AuthUser, Json(request))
            .await
            .expect("search");

        assert_eq!(response.total, 6);
        assert_eq!(response.featured.len(), 2);
        assert_eq!(response.drivers.len(), 4);
    }

    #[tokio::test]
    async fn limit_truncates_main_list_but_not_total() {
        let state = crate::test_state("test-key");
        let request = SearchRequest {
            limit: Some(1),
            ..SearchRequest::default()
        };

        let Json(response) = search_drivers(State(state), AuthUser, Json(request))
            .await
            .expect("search");

        assert_eq!(response.total, 6);
        assert_eq!(response.drivers.len(), 1);
        assert_eq!(response.featured.len(), 2);
    }

    #[tokio::test]
    async fn list_drivers_preserves_roster_order() {
        let state = crate::test_state("test-key");
        let Json(drivers) = list_drivers(State(state), AuthUser).await;
        let ids: Vec<i64> = drivers.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }
}
