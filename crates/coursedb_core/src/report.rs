//! Read-only aggregations over the output of [`crate::store::CourseStore::read_all`].

use crate::category::{Category, Thresholds};
use crate::record::Course;
use std::cmp::Ordering;

pub fn average_hours(courses: &[Course]) -> Option<f64> {
    if courses.is_empty() { return None; }
    let total: i64 = courses.iter().map(|c| c.hours as i64).sum();
    Some(total as f64 / courses.len() as f64)
}

/// Courses whose cost is strictly above `threshold`.
pub fn count_above(courses: &[Course], threshold: f64) -> usize {
    courses.iter().filter(|c| c.cost > threshold).count()
}

/// ASCII case-insensitive byte order; other bytes compare raw.
pub fn cmp_names(a: &str, b: &str) -> Ordering {
    let fold = |s: &str| s.bytes().map(|b| b.to_ascii_lowercase()).collect::<Vec<u8>>();
    fold(a).cmp(&fold(b))
}

/// Stable: equal names keep file order.
pub fn sorted_by_name(mut courses: Vec<Course>) -> Vec<Course> {
    courses.sort_by(|a, b| cmp_names(&a.name, &b.name));
    courses
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub economic: Vec<Course>,
    pub standard: Vec<Course>,
    pub premium: Vec<Course>,
}

impl Classification {
    pub fn bucket(&self, category: Category) -> &[Course] {
        match category {
            Category::Economic => &self.economic,
            Category::Standard => &self.standard,
            Category::Premium => &self.premium,
        }
    }
}

pub fn classify(courses: &[Course], thresholds: &Thresholds) -> Classification {
    let mut out = Classification::default();
    for c in courses {
        let bucket = match thresholds.category(c.cost) {
            Category::Economic => &mut out.economic,
            Category::Standard => &mut out.standard,
            Category::Premium => &mut out.premium,
        };
        bucket.push(c.clone());
    }
    out
}

/// Cheapest and most expensive courses, every tie included, with ordinal positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremes {
    pub min_cost: f64,
    pub max_cost: f64,
    pub cheapest: Vec<(usize, Course)>,
    pub priciest: Vec<(usize, Course)>,
}

pub fn extremes(courses: &[Course]) -> Option<Extremes> {
    let first = courses.first()?.cost;
    let (min_cost, max_cost) = courses
        .iter()
        .fold((first, first), |(lo, hi), c| (lo.min(c.cost), hi.max(c.cost)));
    let tied = |target: f64| -> Vec<(usize, Course)> {
        courses
            .iter()
            .enumerate()
            .filter(|(_, c)| c.cost == target)
            .map(|(i, c)| (i, c.clone()))
            .collect()
    };
    Some(Extremes {
        min_cost,
        max_cost,
        cheapest: tied(min_cost),
        priciest: tied(max_cost),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Cost,
    Hours,
}

/// Filter and ordering for [`search`]. Empty `categories` means all of them.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pub text: Option<String>,
    pub categories: Vec<Category>,
    pub min_cost: Option<f64>,
    pub max_cost: Option<f64>,
    pub sort: SortKey,
    pub descending: bool,
}

impl Query {
    fn matches(&self, c: &Course, thresholds: &Thresholds) -> bool {
        if let Some(text) = self.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            let needle = text.to_lowercase();
            if !c.name.to_lowercase().contains(&needle) && !c.code.to_string().contains(&needle) {
                return false;
            }
        }
        if !self.categories.is_empty() && !self.categories.contains(&thresholds.category(c.cost)) {
            return false;
        }
        if self.min_cost.is_some_and(|min| c.cost < min) { return false; }
        if self.max_cost.is_some_and(|max| c.cost > max) { return false; }
        true
    }
}

pub fn search(courses: &[Course], query: &Query, thresholds: &Thresholds) -> Vec<Course> {
    let mut hits: Vec<Course> = courses
        .iter()
        .filter(|c| query.matches(c, thresholds))
        .cloned()
        .collect();
    hits.sort_by(|a, b| {
        let ord = match query.sort {
            SortKey::Name => cmp_names(&a.name, &b.name),
            SortKey::Cost => a.cost.total_cmp(&b.cost),
            SortKey::Hours => a.hours.cmp(&b.hours),
        };
        if query.descending { ord.reverse() } else { ord }
    });
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_costs(costs: &[f64]) -> Vec<Course> {
        costs
            .iter()
            .enumerate()
            .map(|(i, &cost)| Course::new(i as i32 + 1, &format!("c{i}"), 10, cost))
            .collect()
    }

    fn names(v: &[Course]) -> Vec<&str> {
        v.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn average_of_nothing_is_none() {
        assert_eq!(average_hours(&[]), None);
        let v: Vec<Course> = [10, 20, 30].iter().map(|&h| Course::new(h, "x", h, 0.0)).collect();
        assert_eq!(average_hours(&v), Some(20.0));
    }

    #[test]
    fn average_does_not_overflow_i32() {
        let v = vec![Course::new(1, "a", i32::MAX, 0.0), Course::new(2, "b", i32::MAX, 0.0)];
        assert_eq!(average_hours(&v), Some(i32::MAX as f64));
    }

    #[test]
    fn count_above_is_strict() {
        let v = with_costs(&[100.0, 200.0, 300.0]);
        assert_eq!(count_above(&v, 200.0), 1);
        assert_eq!(count_above(&v, 99.0), 3);
        assert_eq!(count_above(&[], 0.0), 0);
    }

    #[test]
    fn alphabetical_ignores_ascii_case() {
        let v = ["beta", "Alpha", "gamma"]
            .iter()
            .enumerate()
            .map(|(i, n)| Course::new(i as i32, n, 1, 1.0))
            .collect();
        assert_eq!(names(&sorted_by_name(v)), vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn alphabetical_is_stable_and_byte_ordered() {
        let v = vec![
            Course::new(1, "b", 1, 1.0),
            Course::new(2, "Ábaco", 1, 1.0),
            Course::new(3, "B", 1, 1.0),
            Course::new(4, "a", 1, 1.0),
        ];
        let sorted = sorted_by_name(v);
        // "Á" starts with 0xC3, above every ASCII letter
        assert_eq!(sorted.iter().map(|c| c.code).collect::<Vec<_>>(), vec![4, 1, 3, 2]);
    }

    #[test]
    fn classify_keeps_file_order() {
        let t = Thresholds::default();
        let v = with_costs(&[70_000.0, 100.0, 20_000.0, 5.0, 60_000.0]);
        let cls = classify(&v, &t);
        assert_eq!(names(&cls.economic), vec!["c1", "c3"]);
        assert_eq!(names(&cls.standard), vec!["c2"]);
        assert_eq!(names(cls.bucket(Category::Premium)), vec!["c0", "c4"]);
    }

    #[test]
    fn extremes_report_every_tie() {
        let v = with_costs(&[100.0, 500.0, 100.0, 900.0, 900.0]);
        let ex = extremes(&v).unwrap();
        assert_eq!(ex.min_cost, 100.0);
        assert_eq!(ex.max_cost, 900.0);
        assert_eq!(ex.cheapest.iter().map(|(p, _)| *p).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(ex.priciest.iter().map(|(p, _)| *p).collect::<Vec<_>>(), vec![3, 4]);
        assert!(extremes(&[]).is_none());
    }

    #[test]
    fn single_record_is_both_extremes() {
        let v = with_costs(&[42.0]);
        let ex = extremes(&v).unwrap();
        assert_eq!(ex.cheapest, ex.priciest);
    }

    #[test]
    fn search_filters_and_sorts() {
        let t = Thresholds::default();
        let v = vec![
            Course::new(101, "Rust avanzado", 40, 75_000.0),
            Course::new(102, "rust básico", 20, 15_000.0),
            Course::new(203, "Go", 30, 30_000.0),
            Course::new(310, "Python", 25, 30_000.0),
        ];

        let q = Query { text: Some("RUST".into()), ..Query::default() };
        assert_eq!(search(&v, &q, &t).iter().map(|c| c.code).collect::<Vec<_>>(), vec![101, 102]);

        let q = Query { text: Some("10".into()), ..Query::default() };
        assert_eq!(search(&v, &q, &t).len(), 3);

        let q = Query { categories: vec![Category::Standard], sort: SortKey::Hours, ..Query::default() };
        assert_eq!(names(&search(&v, &q, &t)), vec!["Python", "Go"]);

        let q = Query { min_cost: Some(15_000.0), max_cost: Some(30_000.0), sort: SortKey::Cost, descending: true, ..Query::default() };
        // equal costs keep file order even when descending
        assert_eq!(names(&search(&v, &q, &t)), vec!["Go", "Python", "rust básico"]);
    }
}
