//! Directory batch processing.
//!
//! Every `*.pdf` directly inside the input directory becomes
//! `<output>/<stem>.json`. Failures are isolated per file unless
//! `fail_fast` is set.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::detect::{has_pdf_extension, sniff_pdf};
use crate::error::{Error, Result};
use crate::render::{write_json, JsonFormat};

use super::OutlineExtractor;

/// Options for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Directory scanned (non-recursively) for PDFs
    pub input_dir: PathBuf,

    /// Directory receiving one JSON file per PDF
    pub output_dir: PathBuf,

    /// JSON layout of the written files
    pub format: JsonFormat,

    /// Abort on the first failing file instead of continuing.
    ///
    /// In parallel mode no new file is started once a failure is seen, but
    /// files already in flight still finish and may be written.
    pub fail_fast: bool,

    /// Process files concurrently
    pub parallel: bool,
}

impl BatchOptions {
    /// Create batch options with the default `input` / `output` directories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input directory.
    pub fn with_input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the JSON format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Stop at the first failure.
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Enable or disable concurrent file processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            format: JsonFormat::Pretty,
            fail_fast: false,
            parallel: false,
        }
    }
}

/// What happened to one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Outline written to `output`
    Written {
        /// Path of the JSON file
        output: PathBuf,
        /// Number of headings in the outline
        headings: usize,
    },
    /// The PDF has no pages; nothing was written
    Skipped,
    /// Processing failed
    Failed(String),
}

/// Outcome of one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// The input PDF
    pub input: PathBuf,

    /// Result of processing it
    pub status: FileStatus,
}

/// Tally of a batch run, outcomes in input order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Per-file outcomes
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    /// Number of files seen.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of outlines written.
    pub fn written(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Written { .. }))
    }

    /// Number of page-less PDFs skipped.
    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Skipped))
    }

    /// Number of failed files.
    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Failed(_)))
    }

    /// Whether no file failed.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Failed files with their error messages.
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            FileStatus::Failed(message) => Some((o.input.as_path(), message.as_str())),
            _ => None,
        })
    }

    fn count(&self, predicate: impl Fn(&FileStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(&o.status)).count()
    }
}

/// List the files directly inside a directory whose name ends in `.pdf`
/// (case-sensitive), sorted by file name.
pub fn list_pdf_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::InvalidInput(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_pdf_extension(&path) {
            inputs.push(path);
        }
    }
    inputs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(inputs)
}

/// `input/name.pdf` → `<output_dir>/name.json`.
pub fn output_path_for(pdf: &Path, output_dir: &Path) -> PathBuf {
    let stem = pdf.file_stem().unwrap_or_default();
    let mut name = stem.to_os_string();
    name.push(".json");
    output_dir.join(name)
}

/// Extract one PDF and write its outline into `output_dir`.
///
/// Returns the written path and heading count, or `None` for a PDF without
/// pages.
pub fn process_pdf(
    extractor: &OutlineExtractor,
    pdf: &Path,
    output_dir: &Path,
    format: JsonFormat,
) -> Result<Option<(PathBuf, usize)>> {
    sniff_pdf(pdf)?;

    let Some(outline) = extractor.extract(pdf)? else {
        return Ok(None);
    };

    let output = output_path_for(pdf, output_dir);
    write_json(&outline, &output, format)?;
    log::debug!(
        "Wrote {} ({} headings, title {:?})",
        output.display(),
        outline.len(),
        outline.title
    );

    Ok(Some((output, outline.len())))
}

/// Runs an [`OutlineExtractor`] over a directory of PDFs.
pub struct BatchProcessor {
    extractor: OutlineExtractor,
    options: BatchOptions,
}

impl BatchProcessor {
    /// Create a batch processor.
    pub fn new(extractor: OutlineExtractor, options: BatchOptions) -> Self {
        Self { extractor, options }
    }

    /// Get the batch options.
    pub fn options(&self) -> &BatchOptions {
        &self.options
    }

    /// List the files this batch would process.
    pub fn inputs(&self) -> Result<Vec<PathBuf>> {
        list_pdf_inputs(&self.options.input_dir)
    }

    /// Process every PDF in the input directory.
    pub fn run(&self) -> Result<BatchReport> {
        self.run_with_progress(|_| {})
    }

    /// Process every PDF, calling `on_file` as each one starts.
    pub fn run_with_progress<F>(&self, on_file: F) -> Result<BatchReport>
    where
        F: Fn(&Path) + Sync,
    {
        let inputs = self.inputs()?;
        fs::create_dir_all(&self.options.output_dir)?;

        log::info!(
            "Found {} PDFs in {}",
            inputs.len(),
            self.options.input_dir.display()
        );

        let run_one = |pdf: &PathBuf| {
            on_file(pdf.as_path());
            log::info!("Processing {}", pdf.display());
            self.process_file(pdf)
        };

        let mut report = BatchReport::default();

        if self.options.parallel && self.options.fail_fast {
            let statuses: Vec<FileStatus> =
                inputs.par_iter().map(run_one).collect::<Result<_>>()?;
            report.outcomes = inputs
                .into_iter()
                .zip(statuses)
                .map(|(input, status)| FileOutcome { input, status })
                .collect();
        } else if self.options.parallel {
            let results: Vec<Result<FileStatus>> = inputs.par_iter().map(run_one).collect();
            for (pdf, result) in inputs.iter().zip(results) {
                self.record(&mut report, pdf, result)?;
            }
        } else {
            for pdf in &inputs {
                let result = run_one(pdf);
                self.record(&mut report, pdf, result)?;
            }
        }

        Ok(report)
    }

    /// Process a single PDF into the output directory.
    pub fn process_file(&self, pdf: &Path) -> Result<FileStatus> {
        let written = process_pdf(
            &self.extractor,
            pdf,
            &self.options.output_dir,
            self.options.format,
        )?;

        Ok(match written {
            Some((output, headings)) => FileStatus::Written { output, headings },
            None => FileStatus::Skipped,
        })
    }

    fn record(&self, report: &mut BatchReport, pdf: &Path, result: Result<FileStatus>) -> Result<()> {
        let status = match result {
            Ok(status) => status,
            Err(e) if self.options.fail_fast => return Err(e),
            Err(e) => {
                log::warn!("Failed to process {}: {}", pdf.display(), e);
                FileStatus::Failed(e.to_string())
            }
        };

        report.outcomes.push(FileOutcome {
            input: pdf.to_path_buf(),
            status,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_for() {
        assert_eq!(
            output_path_for(Path::new("input/report.pdf"), Path::new("output")),
            PathBuf::from("output/report.json")
        );
        assert_eq!(
            output_path_for(Path::new("input/v1.2.notes.PDF"), Path::new("out")),
            PathBuf::from("out/v1.2.notes.json")
        );
        assert_eq!(
            output_path_for(Path::new("input/.pdf"), Path::new("out")),
            PathBuf::from("out/.pdf.json")
        );
    }

    #[test]
    fn test_list_pdf_inputs_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.pdf", "a.PDF", "notes.txt", "c.pdf.bak", ".pdf"] {
            fs::write(dir.path().join(name), b"%PDF-1.4\n").unwrap();
        }
        fs::create_dir(dir.path().join("nested.pdf")).unwrap();

        let inputs = list_pdf_inputs(dir.path()).unwrap();
        let names: Vec<_> = inputs
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![".pdf", "b.pdf"]);
    }

    #[test]
    fn test_list_pdf_inputs_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = list_pdf_inputs(&dir.path().join("missing"));
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_batch_options_builder() {
        let options = BatchOptions::new()
            .with_input_dir("scans")
            .with_output_dir("outlines")
            .with_format(JsonFormat::Compact)
            .fail_fast(true)
            .with_parallel(true);

        assert_eq!(options.input_dir, PathBuf::from("scans"));
        assert_eq!(options.output_dir, PathBuf::from("outlines"));
        assert_eq!(options.format, JsonFormat::Compact);
        assert!(options.fail_fast);
        assert!(options.parallel);
    }

    #[test]
    fn test_default_batch_options() {
        let options = BatchOptions::default();
        assert_eq!(options.input_dir, PathBuf::from("input"));
        assert_eq!(options.output_dir, PathBuf::from("output"));
        assert!(!options.fail_fast);
        assert!(!options.parallel);
    }

    #[test]
    fn test_report_counts() {
        let report = BatchReport {
            outcomes: vec![
                FileOutcome {
                    input: PathBuf::from("a.pdf"),
                    status: FileStatus::Written {
                        output: PathBuf::from("a.json"),
                        headings: 3,
                    },
                },
                FileOutcome {
                    input: PathBuf::from("b.pdf"),
                    status: FileStatus::Skipped,
                },
                FileOutcome {
                    input: PathBuf::from("c.pdf"),
                    status: FileStatus::Failed("boom".to_string()),
                },
            ],
        };

        assert_eq!(report.total(), 3);
        assert_eq!(report.written(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_success());
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures, vec![(Path::new("c.pdf"), "boom")]);
    }
}
