use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Where the final report goes: stdout or a file.
pub enum ReportSink {
    Stdout(io::Stdout),
    File(BufWriter<File>),
}

impl ReportSink {
    pub fn create(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                let file = File::create(p)
                    .with_context(|| format!("Failed to create output file {}", p.display()))?;
                Ok(Self::File(BufWriter::new(file)))
            }
            None => Ok(Self::Stdout(io::stdout())),
        }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout(_))
    }

    pub fn write_report(&mut self, report: &str) -> Result<()> {
        match self {
            Self::Stdout(out) => {
                let mut lock = out.lock();
                writeln!(lock, "{}", report)?;
                lock.flush()?;
            }
            Self::File(f) => {
                writeln!(f, "{}", report)?;
                f.flush()?;
            }
        }
        Ok(())
    }
}
