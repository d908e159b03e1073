//! Per-class detail endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use reg_common::api::Envelope;
use reg_common::db::{class_details, ClassDetails};
use reg_common::Error;

use crate::AppState;

/// Query parameters for the detail lookup. The classid is kept as raw
/// text so that absent, empty, and malformed values can be told apart.
#[derive(Debug, Deserialize)]
pub struct DetailsQuery {
    pub classid: Option<String>,
}

/// Parse the raw classid parameter.
///
/// Absent or empty input is reported as missing; anything else must
/// parse as an integer, with surrounding whitespace tolerated. A
/// whitespace-only value is malformed, not missing.
fn parse_classid(raw: Option<&str>) -> Result<i64, Error> {
    let raw = raw.unwrap_or("");
    if raw.is_empty() {
        return Err(Error::MissingClassId);
    }
    raw.trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidClassId(raw.to_string()))
}

/// GET /regdetails?classid=<int>
///
/// Validates the identifier before any store access, then returns
/// `[true, details]` or `[false, message]`. Always HTTP 200; the
/// envelope carries the outcome.
pub async fn reg_details(
    State(state): State<AppState>,
    Query(query): Query<DetailsQuery>,
) -> Json<Envelope<ClassDetails>> {
    let classid = match parse_classid(query.classid.as_deref()) {
        Ok(classid) => classid,
        Err(err) => return Json(Envelope::from_error(err)),
    };

    Json(Envelope::from_result(
        class_details(&state.db, classid).await,
    ))
}
