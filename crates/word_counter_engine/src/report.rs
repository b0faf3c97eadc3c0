use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use counter_logging::{counter_debug, counter_info};
use word_counter_core::{count_words, sort_keys, FrequencyMap, ReaderLines, SeparatorSet, TextLines};

use crate::decode::{decode_document, DecodeError};
use crate::persist::{PersistError, ReportDir};
use crate::render::{ReportFormat, ReportView};

/// Where the document to count comes from.
pub enum ReportInput {
    /// A file on disk; its encoding is detected before counting.
    File(PathBuf),
    /// An already-open UTF-8 stream such as stdin.
    Reader {
        label: String,
        reader: Box<dyn BufRead>,
    },
}

impl ReportInput {
    fn label(&self) -> String {
        match self {
            ReportInput::File(path) => path.display().to_string(),
            ReportInput::Reader { label, .. } => label.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub separators: SeparatorSet,
    pub format: ReportFormat,
    /// Defaults to `index.<extension>` of the chosen format.
    pub output_filename: Option<String>,
    /// Defaults to the input label.
    pub title: Option<String>,
    pub generated_utc: Option<String>,
}

impl ReportOptions {
    fn output_filename(&self) -> String {
        self.output_filename
            .clone()
            .unwrap_or_else(|| format!("index.{}", self.format.renderer().file_extension()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub total_words: u64,
    pub distinct_words: usize,
    pub output_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Count the words of `input` and write the rendered report into `output_dir`.
pub fn build_report(
    input: ReportInput,
    output_dir: &Path,
    options: &ReportOptions,
) -> Result<ReportSummary, ReportError> {
    let label = input.label();
    counter_info!("Counting words in {}", label);
    counter_debug!("Separators: {:?}", options.separators.to_string());

    let map = match input {
        ReportInput::File(path) => {
            let bytes = fs::read(&path).map_err(|source| ReportError::Read {
                path: label.clone(),
                source,
            })?;
            let decoded = decode_document(&bytes)?;
            counter_info!("Decoded {} as {}", label, decoded.encoding_label);
            match count_words(&mut TextLines::new(&decoded.text), &options.separators) {
                Ok(map) => map,
                Err(never) => match never {},
            }
        }
        ReportInput::Reader { reader, .. } => {
            count_words(&mut ReaderLines::new(reader), &options.separators).map_err(
                |source| ReportError::Read {
                    path: label.clone(),
                    source,
                },
            )?
        }
    };

    let title = options.title.clone().unwrap_or_else(|| label.clone());
    let content = render_report(&map, options, &title);

    let output_path =
        ReportDir::prepare(output_dir)?.write(&options.output_filename(), &content)?;

    let summary = ReportSummary {
        total_words: map.total(),
        distinct_words: map.len(),
        output_path,
    };
    counter_info!(
        "Wrote {} words ({} distinct) to {}",
        summary.total_words,
        summary.distinct_words,
        summary.output_path.display()
    );
    Ok(summary)
}

/// Sort and render `map` without touching the filesystem.
pub fn render_report(map: &FrequencyMap, options: &ReportOptions, title: &str) -> String {
    let sorted = sort_keys(map);
    let mut view = ReportView::new(title, map, &sorted);
    if let Some(stamp) = &options.generated_utc {
        view = view.with_generated_utc(stamp.clone());
    }
    options.format.renderer().render(&view)
}
