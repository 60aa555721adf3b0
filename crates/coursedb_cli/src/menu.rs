//! Interactive menu over a [`CourseStore`].
//!
//! Failed store operations are reported and the menu returns to the main
//! loop; nothing is retried automatically.

use crate::input::Prompter;
use crate::render;
use anyhow::Result;
use coursedb_core::{export, report, sample, Course, CourseStore, Thresholds};
use std::io::{BufRead, Write};
use std::path::PathBuf;

const MENU: &str = "
==============================
 Course catalog
==============================
1) Load a course (code, name, hours, cost)
2) Average hours
3) Add new courses without overwriting
4) Find a course by code
5) Register courses in a loop
6) Count courses above a cost
7) List courses alphabetically
8) Classify courses by cost
9) Cheapest and most expensive courses
10) Modify a course's cost in place
11) Redefine cost thresholds
12) Export to JSON
13) Load sample data
0) Quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Menu<R, W> {
    store: CourseStore,
    thresholds: Thresholds,
    export_file: PathBuf,
    io: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(store: CourseStore, thresholds: Thresholds, export_file: PathBuf, input: R, out: W) -> Self {
        Self { store, thresholds, export_file, io: Prompter::new(input, out) }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.io.out(), "{MENU}")?;
            writeln!(self.io.out(), " data file: {}", self.store.path().display())?;
            let Some(op) = self.io.int("Choose an option: ", i32::MIN)? else { break };
            let flow = match self.dispatch(op) {
                Ok(flow) => flow,
                Err(e) => {
                    writeln!(self.io.out(), "Operation failed: {e:#}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, op: i32) -> Result<Flow> {
        match op {
            1 => self.load_course(),
            2 => self.average_hours(),
            3 => {
                writeln!(self.io.out(), "\n--- Add a new course without overwriting ---")?;
                self.load_course()
            }
            4 => self.find_course(),
            5 => self.register_loop(),
            6 => self.count_above(),
            7 => self.list_by_name(),
            8 => self.classify(),
            9 => self.extremes(),
            10 => self.modify_cost(),
            11 => self.redefine_thresholds(),
            12 => self.export(),
            13 => self.load_sample(),
            0 => {
                writeln!(self.io.out(), "Goodbye!")?;
                Ok(Flow::Quit)
            }
            _ => {
                writeln!(self.io.out(), "Invalid option.")?;
                Ok(Flow::Continue)
            }
        }
    }

    fn load_course(&mut self) -> Result<Flow> {
        writeln!(self.io.out(), "\n--- Load course ---")?;
        let code = loop {
            let Some(code) = self.io.int("Code (positive integer): ", 1)? else { return Ok(Flow::Quit) };
            if !self.store.exists(code)? {
                break code;
            }
            writeln!(self.io.out(), "A course with that code already exists. Try another.")?;
        };
        let Some(name) = self.io.text("Name (up to 60 bytes of UTF-8): ")? else { return Ok(Flow::Quit) };
        let Some(hours) = self.io.int("Hours (>= 0): ", 0)? else { return Ok(Flow::Quit) };
        let Some(cost) = self.io.number("Cost (>= 0): ", 0.0)? else { return Ok(Flow::Quit) };

        self.store.append(&Course::new(code, &name, hours, cost))?;
        writeln!(self.io.out(), "Course saved (appended).")?;
        Ok(Flow::Continue)
    }

    fn register_loop(&mut self) -> Result<Flow> {
        writeln!(self.io.out(), "\n--- Register courses in a loop ---")?;
        loop {
            if self.load_course()? == Flow::Quit {
                return Ok(Flow::Quit);
            }
            match self.io.confirm("Load another?")? {
                Some(true) => continue,
                Some(false) => return Ok(Flow::Continue),
                None => return Ok(Flow::Quit),
            }
        }
    }

    fn average_hours(&mut self) -> Result<Flow> {
        let all = self.store.read_all()?;
        match report::average_hours(&all) {
            Some(avg) => writeln!(self.io.out(), "Average hours: {avg:.2}")?,
            None => writeln!(self.io.out(), "{}", render::NO_COURSES)?,
        }
        Ok(Flow::Continue)
    }

    fn find_course(&mut self) -> Result<Flow> {
        let Some(code) = self.io.int("Code to find: ", 1)? else { return Ok(Flow::Quit) };
        match self.store.find_by_code(code)? {
            Some((pos, course)) => {
                writeln!(self.io.out(), "Found at position #{pos}:")?;
                writeln!(self.io.out(), "{}", render::course_detail(&course, &self.thresholds))?;
            }
            None => writeln!(self.io.out(), "Course not found.")?,
        }
        Ok(Flow::Continue)
    }

    fn count_above(&mut self) -> Result<Flow> {
        let Some(threshold) = self.io.number("Cost threshold: $", 0.0)? else { return Ok(Flow::Quit) };
        let all = self.store.read_all()?;
        if all.is_empty() {
            writeln!(self.io.out(), "{}", render::NO_COURSES)?;
        } else {
            let n = report::count_above(&all, threshold);
            writeln!(self.io.out(), "{n} course(s) cost more than ${threshold:.2}.")?;
        }
        Ok(Flow::Continue)
    }

    fn list_by_name(&mut self) -> Result<Flow> {
        let all = self.store.read_all()?;
        if all.is_empty() {
            writeln!(self.io.out(), "{}", render::NO_COURSES)?;
            return Ok(Flow::Continue);
        }
        let sorted = report::sorted_by_name(all);
        writeln!(self.io.out(), "Alphabetical listing ({}):", sorted.len())?;
        write!(self.io.out(), "{}", render::listing(&sorted, &self.thresholds))?;
        Ok(Flow::Continue)
    }

    fn classify(&mut self) -> Result<Flow> {
        let all = self.store.read_all()?;
        if all.is_empty() {
            writeln!(self.io.out(), "{}", render::NO_COURSES)?;
            return Ok(Flow::Continue);
        }
        let cls = report::classify(&all, &self.thresholds);
        write!(self.io.out(), "{}", render::classification(&cls, &self.thresholds))?;
        Ok(Flow::Continue)
    }

    fn extremes(&mut self) -> Result<Flow> {
        let all = self.store.read_all()?;
        match report::extremes(&all) {
            Some(ex) => write!(self.io.out(), "{}", render::extremes(&ex))?,
            None => writeln!(self.io.out(), "{}", render::NO_COURSES)?,
        }
        Ok(Flow::Continue)
    }

    fn modify_cost(&mut self) -> Result<Flow> {
        let Some(code) = self.io.int("Code to modify: ", 1)? else { return Ok(Flow::Quit) };
        let Some((pos, _)) = self.store.find_by_code(code)? else {
            writeln!(self.io.out(), "Course not found.")?;
            return Ok(Flow::Continue);
        };
        let Some(cost) = self.io.number("New cost (>= 0): $", 0.0)? else { return Ok(Flow::Quit) };
        self.store.update_cost_checked(pos, code, cost)?;
        writeln!(self.io.out(), "Cost updated in place.")?;
        Ok(Flow::Continue)
    }

    fn redefine_thresholds(&mut self) -> Result<Flow> {
        writeln!(
            self.io.out(),
            "Current thresholds: Economic < ${:.2}, Premium >= ${:.2}",
            self.thresholds.low(),
            self.thresholds.high()
        )?;
        let Some(low) = self.io.number("New Economic/Standard cutoff: $", 0.0)? else { return Ok(Flow::Quit) };
        let Some(high) = self.io.number("New Standard/Premium cutoff: $", 0.0)? else { return Ok(Flow::Quit) };
        match Thresholds::new(low, high) {
            Ok(t) => {
                self.thresholds = t;
                writeln!(self.io.out(), "Thresholds updated for this session.")?;
            }
            Err(e) => writeln!(self.io.out(), "Thresholds unchanged: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> Result<Flow> {
        let all = self.store.read_all()?;
        let n = export::export_json(&all, &self.export_file)?;
        writeln!(self.io.out(), "Exported {n} course(s) to {}.", self.export_file.display())?;
        Ok(Flow::Continue)
    }

    fn load_sample(&mut self) -> Result<Flow> {
        let n = sample::load_sample(&self.store)?;
        writeln!(self.io.out(), "Added {n} sample course(s).")?;
        Ok(Flow::Continue)
    }
}
