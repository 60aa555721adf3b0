//! Built-in demo catalog.

use crate::errors::Result;
use crate::record::Course;
use crate::store::CourseStore;
use tracing::debug;

/// (code, name, hours, cost)
pub const SAMPLE_COURSES: &[(i32, &str, i32, f64)] = &[
    (101, "Programación en C++", 64, 45_000.0),
    (102, "Introducción a Rust", 48, 52_000.0),
    (103, "Álgebra lineal", 40, 18_500.0),
    (104, "Bases de datos", 56, 38_000.0),
    (105, "Diseño UX", 24, 15_000.0),
    (106, "Machine Learning aplicado", 80, 95_000.0),
    (107, "Redes y protocolos", 36, 27_500.0),
    (108, "Cálculo numérico", 40, 18_500.0),
    (109, "Arquitectura de software", 60, 95_000.0),
    (110, "Inglés técnico", 30, 12_000.0),
];

pub fn sample_courses() -> impl Iterator<Item = Course> {
    SAMPLE_COURSES
        .iter()
        .map(|&(code, name, hours, cost)| Course::new(code, name, hours, cost))
}

/// Append every sample course whose code is not in the store yet.
/// Returns how many were added.
pub fn load_sample(store: &CourseStore) -> Result<usize> {
    let mut added = 0;
    for course in sample_courses() {
        if store.exists(course.code)? {
            debug!(code = course.code, "sample course already present");
            continue;
        }
        store.append(&course)?;
        added += 1;
    }
    Ok(added)
}
