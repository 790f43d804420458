//! Execution times the genetic algorithm appends to `exec_time.txt`, one line per
//! variant and run:
//!
//! ```text
//! sequential 5 3 0.0123s
//! parallel 5 3 0.0045s
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::{debug, warn};

use crate::run_reader::RunId;

/// Latest recorded execution times of one run, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunTimings {
    pub sequential: Option<f64>,
    pub parallel: Option<f64>,
}

impl RunTimings {
    /// Reads the timings of `run` from `path`. A missing or unreadable file yields no timings.
    pub fn read(path: &Path, run: RunId) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => RunTimings::parse(&content, run),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No execution times at {}", path.display());
                RunTimings::default()
            }
            Err(e) => {
                warn!("Unable to read execution times from {}: {e}", path.display());
                RunTimings::default()
            }
        }
    }

    /// Later lines override earlier ones, since the file is only ever appended to.
    pub fn parse(content: &str, run: RunId) -> Self {
        let mut timings = RunTimings::default();
        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let Some((variant, line_run, seconds)) = parse_line(line) else {
                warn!("Skipping malformed execution time at line {}: '{line}'", idx + 1);
                continue;
            };
            if line_run != run {
                continue;
            }
            match variant {
                "sequential" => timings.sequential = Some(seconds),
                "parallel" => timings.parallel = Some(seconds),
                _ => warn!("Unknown variant '{variant}' at line {}", idx + 1),
            }
        }
        timings
    }

    pub fn is_empty(&self) -> bool {
        self.sequential.is_none() && self.parallel.is_none()
    }
}

fn parse_line(line: &str) -> Option<(&str, RunId, f64)> {
    let mut parts = line.split_whitespace();
    let variant = parts.next()?;
    let cities = parts.next()?.parse().ok()?;
    let generations = parts.next()?.parse().ok()?;
    let seconds = parts.next()?.strip_suffix('s')?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((variant, RunId { cities, generations }, seconds))
}

impl fmt::Display for RunTimings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(seconds) = self.sequential {
            parts.push(format!("sequential {seconds:.4}s"));
        }
        if let Some(seconds) = self.parallel {
            parts.push(format!("parallel {seconds:.4}s"));
        }
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const RUN: RunId = RunId {
        cities: 5,
        generations: 3,
    };

    #[test]
    fn test_parse_latest_entry_wins() {
        let content = "sequential 5 3 2.5s\n\
                       parallel 5 3 1.25s\n\
                       sequential 10 3 9s\n\
                       sequential 5 3 2s\n";
        let timings = RunTimings::parse(content, RUN);
        assert_eq!(Some(2.0), timings.sequential);
        assert_eq!(Some(1.25), timings.parallel);
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let content = "garbage\nparallel 5 3 fast\nparallel 5 3 0.5\n\nparallel 5 3 0.75s\n";
        let timings = RunTimings::parse(content, RUN);
        assert_eq!(None, timings.sequential);
        assert_eq!(Some(0.75), timings.parallel);
    }

    #[test]
    fn test_parse_other_run() {
        let timings = RunTimings::parse("sequential 6 3 1s\n", RUN);
        assert!(timings.is_empty(), "Timings of other runs must be ignored");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let timings = RunTimings::read(&dir.path().join("exec_time.txt"), RUN);
        assert_eq!(RunTimings::default(), timings);
    }

    #[test]
    fn test_read_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exec_time.txt");
        fs::write(&path, "sequential 5 3 0.5s\n").unwrap();
        assert_eq!(Some(0.5), RunTimings::read(&path, RUN).sequential);
    }

    #[test]
    fn test_display() {
        let timings = RunTimings {
            sequential: Some(2.0),
            parallel: Some(0.25),
        };
        assert_eq!("sequential 2.0000s, parallel 0.2500s", timings.to_string());
        assert_eq!("", RunTimings::default().to_string());
    }
}
