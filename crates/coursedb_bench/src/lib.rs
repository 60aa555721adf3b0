use coursedb_core::{Course, CourseStore, Result};

/// Append `n` synthetic courses with codes `1..=n`.
pub fn fill_store(store: &CourseStore, n: i32) -> Result<()> {
    for code in 1..=n {
        let name = format!("Curso número {code}");
        store.append(&Course::new(code, &name, code % 120, (code % 97) as f64 * 1_000.0))?;
    }
    Ok(())
}
