//! Errors of the load and render pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisualizerError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Invalid integer '{text}' at {}:{line}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        text: String,
    },

    #[error("Unable to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Palette exhausted: {series} series but only {colors} colors")]
    PaletteExhausted { series: usize, colors: usize },

    #[error("Unable to display the chart: {0}")]
    Display(String),

    #[error("Unable to serialize the results: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl VisualizerError {
    /// Maps an [`io::Error`] raised while accessing `path` to the matching kind.
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => VisualizerError::FileNotFound { path },
            _ => VisualizerError::Io { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_not_found() {
        let path = PathBuf::from("outputs/missing.txt");
        let err = VisualizerError::from_io(path.clone(), io::Error::from(io::ErrorKind::NotFound));
        assert!(
            matches!(err, VisualizerError::FileNotFound { path: ref p } if *p == path),
            "A missing file must map to FileNotFound"
        );
        assert_eq!("File not found: outputs/missing.txt", err.to_string());
    }

    #[test]
    fn test_from_io_other() {
        let err = VisualizerError::from_io(
            PathBuf::from("outputs/locked.txt"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(
            matches!(err, VisualizerError::Io { .. }),
            "Any other io error must keep its source"
        );
    }

    #[test]
    fn test_parse_message_names_file_and_line() {
        let err = VisualizerError::Parse {
            path: PathBuf::from("outputs/sequential_process_5_3.txt"),
            line: 2,
            text: "abc".to_string(),
        };
        assert_eq!(
            "Invalid integer 'abc' at outputs/sequential_process_5_3.txt:2",
            err.to_string()
        );
    }

    #[test]
    fn test_palette_exhausted_message() {
        let err = VisualizerError::PaletteExhausted {
            series: 10,
            colors: 9,
        };
        assert_eq!(
            "Palette exhausted: 10 series but only 9 colors",
            err.to_string()
        );
    }
}
