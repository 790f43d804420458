use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::VisualizerError;

/// Selects which result files belong to one execution of the genetic algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunId {
    pub cities: u32,
    pub generations: u32,
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cities, {} generations", self.cities, self.generations)
    }
}

/// Best found tour cost per generation of a single run.
pub type ResultSeries = Vec<i64>;

/// The parallel series in worker order, followed by the sequential series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    series: Vec<ResultSeries>,
}

impl ResultSet {
    pub fn new(parallel: Vec<ResultSeries>, sequential: ResultSeries) -> Self {
        let mut series = parallel;
        series.push(sequential);
        ResultSet { series }
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn series(&self) -> &[ResultSeries] {
        &self.series
    }

    pub fn parallel(&self) -> &[ResultSeries] {
        &self.series[..self.series.len() - 1]
    }

    pub fn sequential(&self) -> &ResultSeries {
        &self.series[self.series.len() - 1]
    }
}

/// # Run reader
/// Reads the files the genetic algorithm left in the outputs directory:
/// * `parallel_process_{worker}_{cities}_{generations}.txt` for every worker
/// * `sequential_process_{cities}_{generations}.txt`
pub struct RunReader {
    outputs_dir: PathBuf,
    worker_count: usize,
}

impl RunReader {
    pub fn new(outputs_dir: impl Into<PathBuf>, worker_count: usize) -> Self {
        RunReader {
            outputs_dir: outputs_dir.into(),
            worker_count,
        }
    }

    pub fn outputs_dir(&self) -> &Path {
        &self.outputs_dir
    }

    pub fn parallel_path(&self, worker: usize, run: RunId) -> PathBuf {
        self.outputs_dir.join(format!(
            "parallel_process_{}_{}_{}.txt",
            worker, run.cities, run.generations
        ))
    }

    pub fn sequential_path(&self, run: RunId) -> PathBuf {
        self.outputs_dir.join(format!(
            "sequential_process_{}_{}.txt",
            run.cities, run.generations
        ))
    }

    /// Loads every worker file and then the sequential file.
    /// The first failing file aborts the whole load.
    pub fn load(&self, run: RunId) -> Result<ResultSet, VisualizerError> {
        let parallel = (0..self.worker_count)
            .map(|worker| read_series(&self.parallel_path(worker, run)))
            .collect::<Result<Vec<ResultSeries>, VisualizerError>>()?;
        let sequential = read_series(&self.sequential_path(run))?;
        Ok(ResultSet::new(parallel, sequential))
    }
}

/// Parses one integer per non-empty line. The file is closed before returning.
pub fn read_series(path: &Path) -> Result<ResultSeries, VisualizerError> {
    let file = File::open(path).map_err(|e| VisualizerError::from_io(path.to_path_buf(), e))?;
    let mut values = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => VisualizerError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
                text: "<invalid UTF-8>".to_string(),
            },
            _ => VisualizerError::from_io(path.to_path_buf(), e),
        })?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let value = text.parse::<i64>().map_err(|_| VisualizerError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            text: text.to_string(),
        })?;
        values.push(value);
    }
    debug!("Read {} values from {}", values.len(), path.display());
    Ok(values)
}
