// crates/coursedb_core/src/consts.rs

//! On-disk record layout. Offsets are derived from field widths, never from
//! the in-memory layout of [`crate::record::Course`].

pub const CODE_BYTES: usize = 4;
pub const NAME_BYTES: usize = 60;
pub const HOURS_BYTES: usize = 4;
pub const COST_BYTES: usize = 8;

pub const CODE_OFFSET: usize = 0;
pub const NAME_OFFSET: usize = CODE_OFFSET + CODE_BYTES;
pub const HOURS_OFFSET: usize = NAME_OFFSET + NAME_BYTES;
pub const COST_OFFSET: usize = HOURS_OFFSET + HOURS_BYTES;

pub const RECORD_SIZE: usize = COST_OFFSET + COST_BYTES;

pub const DEFAULT_DATA_FILE: &str = "courses.dat";
pub const DEFAULT_EXPORT_FILE: &str = "courses.json";

pub const DEFAULT_LOW_THRESHOLD: f64 = 20_000.0;
pub const DEFAULT_HIGH_THRESHOLD: f64 = 60_000.0;

const _: () = {
    assert!(RECORD_SIZE == 76);
    assert!(COST_OFFSET == 68);
};
