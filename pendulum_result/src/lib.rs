use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, Terminator, Writer, WriterBuilder};
use thiserror::Error;

pub type CsvWriter = Writer<BufWriter<File>>;

/// Number of decimal digits written for each value.
pub const DEFAULT_PRECISION: usize = 8;

#[derive(Debug, Error)]
pub enum ResultErrors {
    #[error("could not create result file {path:?}: {source}")]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Streams fixed-precision rows of state values to a headerless CSV file.
///
/// Every record is flushed as soon as it is written so a partially completed run
/// still leaves every finished row on disk.
pub struct ResultWriter {
    writer: CsvWriter,
    buffer: Vec<String>,
    rows: usize,
}

impl ResultWriter {
    /// Creates (or truncates) the file at `path`, creating missing parent directories.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ResultErrors> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| ResultErrors::CreateFile {
                    path: path.clone(),
                    source,
                })?;
            }
        }

        let file = File::create(&path).map_err(|source| ResultErrors::CreateFile {
            path: path.clone(),
            source,
        })?;
        let writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(BufWriter::new(file));

        tracing::debug!(path = %path.display(), "result writer created");

        Ok(Self {
            writer,
            buffer: Vec::new(),
            rows: 0,
        })
    }

    /// Number of records written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Formats `values` to [`DEFAULT_PRECISION`] decimals, writes them as one record and flushes.
    pub fn write_record(&mut self, values: &[f64]) -> Result<(), ResultErrors> {
        self.buffer.resize(values.len(), String::new());
        for (field, value) in self.buffer.iter_mut().zip(values) {
            *field = format!("{:.*}", DEFAULT_PRECISION, value);
        }
        self.writer.write_record(&self.buffer)?;
        self.writer.flush()?;
        self.rows += 1;
        Ok(())
    }
}

/// Reads a results file written by [`ResultWriter`] back into `[p1, p2, theta1, theta2]` rows.
pub fn read_trajectory(path: impl AsRef<Path>) -> Result<Vec<[f64; 4]>, ResultErrors> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_path(path.as_ref())?;

    let mut rows = Vec::new();
    for record in reader.deserialize::<(f64, f64, f64, f64)>() {
        let (a, b, c, d) = record?;
        rows.push([a, b, c, d]);
    }
    Ok(rows)
}
