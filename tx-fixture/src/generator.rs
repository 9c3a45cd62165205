use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use csv::{Writer, WriterBuilder};
use log::{debug, info};

use crate::error::FixtureError;
use crate::row::{ClientScheme, Row};

pub const DEFAULT_OUTPUT_PATH: &str = "data/huge.csv";
pub const DEFAULT_ROW_COUNT: u32 = 3_000_000;
pub const DEFAULT_PROGRESS_INTERVAL: u32 = 1000;

/// Receives the index of every row that lands on a progress boundary.
pub trait Progress {
    fn report(&mut self, index: u32);
}

/// Prints each progress index as a bare integer on standard output.
#[derive(Debug, Default)]
pub struct StdoutProgress;

impl Progress for StdoutProgress {
    fn report(&mut self, index: u32) {
        // A closed stdout must not abort generation.
        let _ = writeln!(io::stdout().lock(), "{index}");
    }
}

#[derive(Debug, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn report(&mut self, _index: u32) {}
}

impl Progress for Vec<u32> {
    fn report(&mut self, index: u32) {
        self.push(index);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub output_path: PathBuf,
    pub row_count: u32,
    /// Must be non-zero; a zero interval is treated as "never report".
    pub progress_interval: u32,
    pub client_scheme: ClientScheme,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            row_count: DEFAULT_ROW_COUNT,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            client_scheme: ClientScheme::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub path: PathBuf,
    pub rows_written: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Generator { config }
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Creates (or truncates) the configured output file and fills it.
    ///
    /// # Errors
    /// Returns `FixtureError::WriteFailure` when the file cannot be created, written or
    /// flushed. Whatever was written before the failure is left on disk.
    pub fn run<P: Progress>(&self, progress: &mut P) -> Result<Summary, FixtureError> {
        let path = self.config.output_path.as_path();
        info!(
            "Generating {} rows into {}",
            self.config.row_count,
            path.display()
        );
        let start = Instant::now();

        let file = File::create(path)?;
        let rows_written = self.write_to(file, progress)?;

        info!(
            "Wrote {} rows to {} in {:.2?}",
            rows_written,
            path.display(),
            start.elapsed()
        );
        Ok(Summary {
            path: path.to_path_buf(),
            rows_written,
        })
    }

    /// Writes the header and every row to `sink`, then flushes it.
    ///
    /// # Errors
    /// Returns `FixtureError::WriteFailure` on the first failed write or flush.
    pub fn write_to<W: Write, P: Progress>(
        &self,
        sink: W,
        progress: &mut P,
    ) -> Result<u32, FixtureError> {
        let mut writer = fixture_writer(sink);
        writer.write_record(Row::HEADER)?;

        let interval = self.config.progress_interval;
        for index in 0..self.config.row_count {
            writer.serialize(Row::deposit(index, self.config.client_scheme))?;
            if interval != 0 && index % interval == 0 {
                debug!("Progress: {}", index);
                progress.report(index);
            }
        }
        writer.flush()?;

        Ok(self.config.row_count)
    }
}

fn fixture_writer<W: Write>(sink: W) -> Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink)
}
