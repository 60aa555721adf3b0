pub mod consts;
pub mod errors;
pub mod utils;
pub mod record;
pub mod store;
pub mod category;
pub mod report;
pub mod export;
pub mod sample;
pub mod config;

pub use category::{categorize, Category, Thresholds};
pub use config::CatalogConfig;
pub use errors::{CourseError, Result};
pub use record::{decode_name, encode_name, Course};
pub use report::{Classification, Extremes, Query, SortKey};
pub use store::CourseStore;
