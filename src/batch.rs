use std::path::{Path, PathBuf};

use image::{ImageFormat, ImageReader};

use crate::{
    error::{Error, Result},
    filter::Filter,
};

/// One entry of a batch: where to read, where to write, and what to apply.
pub struct Job {
    source: PathBuf,
    destination: PathBuf,
    filter: Box<dyn Filter>,
}

impl Job {
    pub fn new(
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        filter: impl Filter + 'static,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            filter: Box::new(filter),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Saved(PathBuf),
    Skipped(PathBuf),
}

#[derive(Debug, Default)]
pub struct Report {
    pub saved: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Fails when the linked `image` build can't both read and write PNG.
pub fn ensure_codec() -> Result<()> {
    let reading = ImageFormat::Png.reading_enabled();
    let writing = ImageFormat::Png.writing_enabled();

    if reading && writing {
        Ok(())
    } else {
        Err(Error::CodecUnavailable { reading, writing })
    }
}

/// Runs a single job with its paths resolved against `base_dir`.
///
/// A missing source is reported and skipped. Anything that goes wrong after
/// the file is found is returned as an error.
pub fn process(base_dir: &Path, job: &Job) -> Result<Outcome> {
    let src = base_dir.join(&job.source);
    let dst = base_dir.join(&job.destination);

    if !src.is_file() {
        println!("skipping (not found): {}", src.display());
        return Ok(Outcome::Skipped(src));
    }

    println!("processing: {} -> {}", file_name(&src), file_name(&dst));

    let buffer = ImageReader::open(&src)?
        .with_guessed_format()?
        .decode()
        .map_err(|source| Error::Decode {
            path: src.clone(),
            source,
        })?
        .to_rgba8();

    let output = job.filter.transform_buffer(&buffer);

    output
        .save_with_format(&dst, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: dst.clone(),
            source,
        })?;

    println!("  saved: {}", dst.display());
    Ok(Outcome::Saved(dst))
}

/// Processes `jobs` in order, one image at a time.
pub fn run(base_dir: &Path, jobs: &[Job]) -> Result<Report> {
    let mut report = Report::default();

    for job in jobs {
        match process(base_dir, job)? {
            Outcome::Saved(path) => report.saved.push(path),
            Outcome::Skipped(path) => report.skipped.push(path),
        }
    }

    println!("done.");
    Ok(report)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
