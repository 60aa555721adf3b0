use coursedb_core::report::{Classification, Extremes};
use coursedb_core::{Category, Course, Thresholds};
use std::fmt::Write;

pub const NO_COURSES: &str = "No courses loaded.";

pub fn course_detail(c: &Course, t: &Thresholds) -> String {
    format!(
        "Code:  {}\nName:  {}\nHours: {}\nCost:  ${:.2} ({})",
        c.code,
        c.name,
        c.hours,
        c.cost,
        t.category(c.cost)
    )
}

pub fn course_line(c: &Course, t: &Thresholds) -> String {
    format!(
        "- [{}] {} | {} h | ${:.2} ({})",
        c.code,
        c.name,
        c.hours,
        c.cost,
        t.category(c.cost)
    )
}

pub fn listing(courses: &[Course], t: &Thresholds) -> String {
    let mut s = String::new();
    for c in courses {
        let _ = writeln!(s, "{}", course_line(c, t));
    }
    s
}

pub fn classification(cls: &Classification, t: &Thresholds) -> String {
    let mut s = format!(
        "Thresholds: Economic < ${:.2}, Standard < ${:.2}, Premium >= ${:.2}\n",
        t.low(),
        t.high(),
        t.high()
    );
    for cat in Category::ALL {
        let bucket = cls.bucket(cat);
        let _ = writeln!(s, "{cat}: {}", bucket.len());
        for c in bucket {
            let _ = writeln!(s, "  - [{}] {} (${:.2})", c.code, c.name, c.cost);
        }
    }
    s
}

pub fn extremes(ex: &Extremes) -> String {
    let mut s = format!("Cheapest - ${:.2}:\n", ex.min_cost);
    for (pos, c) in &ex.cheapest {
        let _ = writeln!(s, "  - #{pos} [{}] {}", c.code, c.name);
    }
    let _ = writeln!(s, "Most expensive - ${:.2}:", ex.max_cost);
    for (pos, c) in &ex.priciest {
        let _ = writeln!(s, "  - #{pos} [{}] {}", c.code, c.name);
    }
    s
}
