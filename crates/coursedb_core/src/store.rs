//! Flat-file record store.
//!
//! The file is a plain concatenation of [`RECORD_SIZE`]-byte records. Every
//! operation opens its own handle, so each call sees the current file content
//! and nothing stays open between calls. A trailing partial record is skipped
//! on read and never repaired.

use crate::consts::{COST_OFFSET, RECORD_SIZE};
use crate::errors::{CourseError, Result};
use crate::record::Course;
use crate::utils::{read_full, read_i32, write_f64};
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Handle on a course data file. Cheap to clone; holds no open file.
#[derive(Debug, Clone)]
pub struct CourseStore {
    path: PathBuf,
}

impl CourseStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// Handle plus [`CourseStore::ensure_created`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self::new(path);
        store.ensure_created()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty data file unless a readable one is already there.
    /// Existing content is never truncated.
    pub fn ensure_created(&self) -> Result<()> {
        if File::open(&self.path).is_ok() {
            return Ok(());
        }
        OpenOptions::new().create(true).append(true).open(&self.path)?;
        debug!(path = %self.path.display(), "created empty data file");
        Ok(())
    }

    /// Every complete record in file order.
    pub fn read_all(&self) -> Result<Vec<Course>> {
        match self.scan()? {
            Some(scan) => Ok(scan.collect::<io::Result<Vec<_>>>()?),
            None => Ok(Vec::new()),
        }
    }

    /// First record with `code` in file order, with its ordinal position.
    pub fn find_by_code(&self, code: i32) -> Result<Option<(usize, Course)>> {
        let Some(scan) = self.scan()? else { return Ok(None) };
        for (position, course) in scan.enumerate() {
            let course = course?;
            if course.code == code {
                return Ok(Some((position, course)));
            }
        }
        Ok(None)
    }

    pub fn exists(&self, code: i32) -> Result<bool> {
        Ok(self.find_by_code(code)?.is_some())
    }

    /// Write one record at the end of the file. Duplicate codes are not checked here.
    pub fn append(&self, course: &Course) -> Result<()> {
        let mut f = OpenOptions::new().create(true).append(true).open(&self.path)?;
        f.write_all(&course.to_bytes())?;
        f.flush()?;
        debug!(code = course.code, path = %self.path.display(), "appended record");
        Ok(())
    }

    /// Number of complete records currently in the file.
    pub fn record_count(&self) -> Result<usize> {
        match std::fs::metadata(&self.path) {
            Ok(m) => Ok((m.len() / RECORD_SIZE as u64) as usize),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite the 8 cost bytes of the record at `position`. Nothing else in
    /// the file changes; a position past the last complete record is rejected
    /// so the file never grows.
    pub fn update_cost_at(&self, position: usize, new_cost: f64) -> Result<()> {
        let mut f = OpenOptions::new().read(true).write(true).open(&self.path)?;
        let start = record_start(&f, position)?;
        f.seek(SeekFrom::Start(start + COST_OFFSET as u64))?;
        write_f64(&mut f, new_cost)?;
        f.flush()?;
        debug!(position, new_cost, "updated cost in place");
        Ok(())
    }

    /// Like [`CourseStore::update_cost_at`], but first re-reads the code stored
    /// at `position` and refuses to write if it is not `expected_code`.
    pub fn update_cost_checked(&self, position: usize, expected_code: i32, new_cost: f64) -> Result<()> {
        let mut f = OpenOptions::new().read(true).write(true).open(&self.path)?;
        let start = record_start(&f, position)?;
        f.seek(SeekFrom::Start(start))?;
        let found = read_i32(&mut f)?;
        if found != expected_code {
            return Err(CourseError::CodeMismatch { position, expected: expected_code, found });
        }
        f.seek(SeekFrom::Start(start + COST_OFFSET as u64))?;
        write_f64(&mut f, new_cost)?;
        f.flush()?;
        debug!(position, code = found, new_cost, "updated cost in place (checked)");
        Ok(())
    }

    fn scan(&self) -> Result<Option<RecordScan<BufReader<File>>>> {
        match File::open(&self.path) {
            Ok(f) => Ok(Some(RecordScan::new(BufReader::new(f)))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Byte offset of the record at `position`, provided the whole record is in the file.
fn record_start(f: &File, position: usize) -> Result<u64> {
    let len = f.metadata()?.len();
    (position as u64)
        .checked_mul(RECORD_SIZE as u64)
        .filter(|start| start.checked_add(RECORD_SIZE as u64).is_some_and(|end| end <= len))
        .ok_or(CourseError::OutOfRange { position })
}

/// Sequential decoder over consecutive records. Ends at EOF or at the first
/// short chunk.
pub struct RecordScan<R> {
    reader: R,
    done: bool,
}

impl<R: Read> RecordScan<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, done: false }
    }
}

impl<R: Read> Iterator for RecordScan<R> {
    type Item = io::Result<Course>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done { return None; }
        let mut buf = [0u8; RECORD_SIZE];
        match read_full(&mut self.reader, &mut buf) {
            Ok(RECORD_SIZE) => Some(Ok(Course::from_bytes(&buf))),
            Ok(0) => { self.done = true; None }
            Ok(n) => {
                warn!(bytes = n, "ignoring truncated trailing record");
                self.done = true;
                None
            }
            Err(e) => { self.done = true; Some(Err(e)) }
        }
    }
}
