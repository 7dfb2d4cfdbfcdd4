//! Improvement reports on disk.
//!
//! [`FileReporter`] writes one file per new best tour, named by the local
//! time at minute resolution (`2024-05-01T13:07.csv`). Several improvements
//! within the same minute overwrite each other, leaving the best one.

use crate::instance::Instance;
use crate::optimizer::ProgressObserver;
use crate::population::ScoredTour;
use crate::tour::Tour;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Writes `tour` as point identifiers, one per line, in visiting order.
pub fn write_tour<W: Write>(out: &mut W, tour: &Tour, instance: &Instance) -> io::Result<()> {
    for idx in tour.visit_order() {
        writeln!(out, "{}", instance.point(idx).id)?;
    }
    Ok(())
}

/// Progress observer that persists every improvement.
#[derive(Debug)]
pub struct FileReporter {
    dir: PathBuf,
    last_written: Option<PathBuf>,
}

impl FileReporter {
    /// Creates the report directory if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> io::Result<Self> {
        std::fs::create_dir_all(dir.as_ref())?;
        Ok(Self {
            dir: dir.as_ref().to_path_buf(),
            last_written: None,
        })
    }

    /// Path of the most recent report, if any was written.
    pub fn last_written(&self) -> Option<&Path> {
        self.last_written.as_deref()
    }

    fn write_report(&self, path: &Path, best: &ScoredTour, instance: &Instance) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        write_tour(&mut out, &best.tour, instance)?;
        out.flush()
    }
}

impl ProgressObserver for FileReporter {
    fn on_improvement(&mut self, best: &ScoredTour, instance: &Instance) {
        let stamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let path = self.dir.join(format!("{stamp}.csv"));
        info!("new distance caught: {:.2}", best.length);
        match self.write_report(&path, best, instance) {
            Ok(()) => self.last_written = Some(path),
            Err(err) => warn!(path = %path.display(), %err, "failed to write report"),
        }
    }
}
