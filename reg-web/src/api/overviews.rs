//! Overview search endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use reg_common::api::Envelope;
use reg_common::db::{search_overviews, ClassOverview, OverviewFilters};

use crate::AppState;

/// Query parameters for the overview search. All four are optional;
/// an absent filter matches everything.
#[derive(Debug, Deserialize)]
pub struct OverviewsQuery {
    pub dept: Option<String>,
    pub coursenum: Option<String>,
    pub area: Option<String>,
    pub title: Option<String>,
}

/// GET /regoverviews?dept=&coursenum=&area=&title=
///
/// Returns `[true, [overview, ...]]` ordered by department, course
/// number, then class id, or `[false, message]` on failure. Always
/// HTTP 200; the envelope carries the outcome.
pub async fn reg_overviews(
    State(state): State<AppState>,
    Query(query): Query<OverviewsQuery>,
) -> Json<Envelope<Vec<ClassOverview>>> {
    let filters = OverviewFilters {
        dept: query.dept,
        coursenum: query.coursenum,
        area: query.area,
        title: query.title,
    };

    Json(Envelope::from_result(
        search_overviews(&state.db, &filters).await,
    ))
}
