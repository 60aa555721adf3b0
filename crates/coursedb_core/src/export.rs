//! JSON export for external viewers.
//!
//! Output is a pretty-printed array, one object per record:
//! `{"code": 1, "name": "...", "hours": 40, "cost": 1500.00}`.
//! `cost` always carries exactly two decimals.

use crate::errors::Result;
use crate::record::Course;
use serde::Serialize;
use serde_json::value::RawValue;
use std::io::Write;
use std::path::Path;
use tracing::debug;

#[derive(Serialize)]
struct CourseJson<'a> {
    code: i32,
    name: &'a str,
    hours: i32,
    cost: Box<RawValue>,
}

impl<'a> CourseJson<'a> {
    fn from_course(c: &'a Course) -> Result<Self> {
        Ok(Self {
            code: c.code,
            name: &c.name,
            hours: c.hours,
            // non-finite costs are rejected here as invalid JSON numbers
            cost: RawValue::from_string(format!("{:.2}", c.cost))?,
        })
    }
}

pub fn to_json(courses: &[Course]) -> Result<String> {
    let rows = courses
        .iter()
        .map(CourseJson::from_course)
        .collect::<Result<Vec<_>>>()?;
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Write the export next to its final path, then rename over it.
pub fn export_json(courses: &[Course], path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let body = to_json(courses)?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::Builder::new().prefix("coursedb_export_").tempfile_in(dir)?;
    tmp.as_file_mut().write_all(body.as_bytes())?;
    tmp.as_file_mut().write_all(b"\n")?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(path)?;
    debug!(records = courses.len(), path = %path.display(), "exported json");
    Ok(courses.len())
}
