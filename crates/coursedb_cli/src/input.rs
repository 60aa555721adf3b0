//! Line-oriented prompting with validation and retry.
//!
//! Every prompt returns `Ok(None)` once input is exhausted so callers can
//! leave cleanly instead of spinning on EOF.

use anyhow::Result;
use std::io::{BufRead, Write};

/// Integer at or above `min`. Out-of-range values for `i32` are rejected, not wrapped.
pub fn parse_int(s: &str, min: i32) -> Option<i32> {
    s.trim().parse::<i32>().ok().filter(|v| *v >= min)
}

/// Finite number at or above `min`.
pub fn parse_number(s: &str, min: f64) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v >= min)
}

/// `y`/`s` for yes, `n` for no; only the first character counts.
pub fn parse_yes_no(s: &str) -> Option<bool> {
    match s.trim().chars().next()?.to_ascii_lowercase() {
        'y' | 's' => Some(true),
        'n' => Some(false),
        _ => None,
    }
}

/// clap value parser for costs and thresholds.
pub fn non_negative(s: &str) -> std::result::Result<f64, String> {
    parse_number(s, 0.0).ok_or_else(|| format!("`{s}` is not a non-negative number"))
}

pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    /// Raw line without its terminator.
    pub fn text(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn int(&mut self, prompt: &str, min: i32) -> Result<Option<i32>> {
        self.retry(prompt, "Invalid input. Try again.", |s| parse_int(s, min))
    }

    pub fn number(&mut self, prompt: &str, min: f64) -> Result<Option<f64>> {
        self.retry(prompt, "Invalid input. Try again.", |s| parse_number(s, min))
    }

    pub fn confirm(&mut self, prompt: &str) -> Result<Option<bool>> {
        let prompt = format!("{prompt} (y/n): ");
        loop {
            let Some(line) = self.text(&prompt)? else { return Ok(None) };
            if line.trim().is_empty() {
                continue;
            }
            match parse_yes_no(&line) {
                Some(answer) => return Ok(Some(answer)),
                None => writeln!(self.out, "Invalid answer. Type 'y' or 'n'.")?,
            }
        }
    }

    fn retry<T>(&mut self, prompt: &str, complaint: &str, parse: impl Fn(&str) -> Option<T>) -> Result<Option<T>> {
        loop {
            let Some(line) = self.text(prompt)? else { return Ok(None) };
            match parse(&line) {
                Some(v) => return Ok(Some(v)),
                None => writeln!(self.out, "{complaint}")?,
            }
        }
    }
}
