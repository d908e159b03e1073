//! Catalog query layer: wildcard normalization, overview search, and
//! per-class detail aggregation.
//!
//! Every user-supplied value is bound as a query parameter and every
//! LIKE pattern passes through [`like_pattern`], so filter text can
//! never alter query shape.

use sqlx::SqlitePool;

use super::models::{ClassDetails, ClassOverview, DeptCourseNum};
use crate::{Error, Result};

/// Raw filter strings for the overview search, straight from the
/// caller. Absent filters match everything.
#[derive(Debug, Clone, Default)]
pub struct OverviewFilters {
    pub dept: Option<String>,
    pub coursenum: Option<String>,
    pub area: Option<String>,
    pub title: Option<String>,
}

/// Turn a raw filter fragment into a SQL LIKE pattern.
///
/// Absent, empty, or whitespace-only input yields the full wildcard.
/// Otherwise the LIKE metacharacters are escaped (backslash first, so
/// the escapes introduced for % and _ are not themselves doubled) and
/// the result is wrapped in % on both ends so the filter matches
/// anywhere within the target field. Matched with `LIKE ? ESCAPE '\'`,
/// the pattern has exactly substring-containment semantics for the raw
/// input as a literal.
pub fn like_pattern(raw: Option<&str>) -> String {
    let raw = match raw {
        Some(s) if !s.trim().is_empty() => s,
        _ => return "%".to_string(),
    };

    let escaped = raw
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    format!("%{}%", escaped)
}

/// Search class overviews matching all four filters conjunctively.
///
/// Joins classes to their owning course and the course's crosslistings;
/// DISTINCT collapses identical rows reachable through more than one
/// join path. Results are ordered by (dept, coursenum, classid)
/// ascending under the store's native collation, so course numbers sort
/// as text.
pub async fn search_overviews(
    pool: &SqlitePool,
    filters: &OverviewFilters,
) -> Result<Vec<ClassOverview>> {
    let rows = sqlx::query_as::<_, (i64, String, String, String, String)>(
        "SELECT DISTINCT cl.classid, cr.dept, cr.coursenum, c.title, c.area
         FROM classes cl
         JOIN courses c ON cl.courseid = c.courseid
         JOIN crosslistings cr ON c.courseid = cr.courseid
         WHERE cr.dept LIKE ? ESCAPE '\\'
           AND cr.coursenum LIKE ? ESCAPE '\\'
           AND c.area LIKE ? ESCAPE '\\'
           AND c.title LIKE ? ESCAPE '\\'
         ORDER BY cr.dept, cr.coursenum, cl.classid",
    )
    .bind(like_pattern(filters.dept.as_deref()))
    .bind(like_pattern(filters.coursenum.as_deref()))
    .bind(like_pattern(filters.area.as_deref()))
    .bind(like_pattern(filters.title.as_deref()))
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(classid, dept, coursenum, title, area)| ClassOverview {
            classid,
            dept,
            coursenum,
            title,
            area,
        })
        .collect())
}

/// Aggregate the full detail record for one class.
///
/// The class row must exist; everything hanging off its course degrades
/// gracefully. A missing course row leaves the descriptive fields
/// absent, and a course with no crosslistings or no professors yields
/// empty lists. The lookups run sequentially; each later step depends
/// only on the courseid resolved from the class row.
pub async fn class_details(pool: &SqlitePool, classid: i64) -> Result<ClassDetails> {
    type ClassRow = (
        i64,
        Option<String>,
        Option<String>,
        Option<String>,
        Option<String>,
        Option<String>,
        i64,
    );
    let (classid, days, starttime, endtime, bldg, roomnum, courseid) =
        sqlx::query_as::<_, ClassRow>(
            "SELECT classid, days, starttime, endtime, bldg, roomnum, courseid
             FROM classes WHERE classid = ?",
        )
        .bind(classid)
        .fetch_optional(pool)
        .await?
        .ok_or(Error::NoSuchClass(classid))?;

    let course = sqlx::query_as::<_, (Option<String>, Option<String>, Option<String>, Option<String>)>(
        "SELECT area, title, descrip, prereqs FROM courses WHERE courseid = ?",
    )
    .bind(courseid)
    .fetch_optional(pool)
    .await?;

    let deptcoursenums = sqlx::query_as::<_, (String, String)>(
        "SELECT dept, coursenum FROM crosslistings
         WHERE courseid = ?
         ORDER BY dept, coursenum",
    )
    .bind(courseid)
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|(dept, coursenum)| DeptCourseNum { dept, coursenum })
    .collect();

    let profnames: Vec<String> = sqlx::query_scalar(
        "SELECT p.profname
         FROM profs p
         JOIN coursesprofs cp ON p.profid = cp.profid
         WHERE cp.courseid = ?
         ORDER BY p.profname",
    )
    .bind(courseid)
    .fetch_all(pool)
    .await?;

    let (area, title, descrip, prereqs) = course.unwrap_or((None, None, None, None));

    Ok(ClassDetails {
        classid,
        days,
        starttime,
        endtime,
        bldg,
        roomnum,
        courseid,
        area,
        title,
        descrip,
        prereqs,
        deptcoursenums,
        profnames,
    })
}
