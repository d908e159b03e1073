//! Catalog response models

use serde::{Deserialize, Serialize};

/// One row of the overview search: a class section listed under one of
/// its course's department/number crosslistings.
///
/// `title` and `area` are non-null here: the search filters match them
/// with LIKE, which never admits a NULL column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassOverview {
    pub classid: i64,
    pub dept: String,
    pub coursenum: String,
    pub title: String,
    pub area: String,
}

/// A department/course-number pair under which a course is offered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeptCourseNum {
    pub dept: String,
    pub coursenum: String,
}

/// The full merged record for one class: its schedule fields, its
/// owning course's descriptive fields, and the course's crosslistings
/// and instructor names.
///
/// Descriptive fields stay `None` when the course row is absent or the
/// column is NULL; the lists may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDetails {
    pub classid: i64,
    pub days: Option<String>,
    pub starttime: Option<String>,
    pub endtime: Option<String>,
    pub bldg: Option<String>,
    pub roomnum: Option<String>,
    pub courseid: i64,
    pub area: Option<String>,
    pub title: Option<String>,
    pub descrip: Option<String>,
    pub prereqs: Option<String>,
    pub deptcoursenums: Vec<DeptCourseNum>,
    pub profnames: Vec<String>,
}
