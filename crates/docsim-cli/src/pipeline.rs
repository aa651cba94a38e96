//! Comparison pipeline
//!
//! Loads both documents, normalizes them, runs the selected engines and
//! records how long each stage took. Documents are fully loaded before
//! the core engine is touched, so a missing file never yields a partial
//! report.

use crate::config::{AlgorithmSelection, CompareConfig, OutputFormat};
use crate::error::Result;
use crate::loader::{load_document, load_pair, Document};
use crate::report;
use docsim_core::{
    analyze_edit_distance, analyze_substring, normalize, normalize_with_stats,
    EditDistanceAnalysis, NormalizationStats, SubstringAnalysis,
};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Per-document sizes before and after normalization
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    pub path: String,
    pub raw_len: usize,
    pub normalized_len: usize,
    pub reduction_percent: f64,
}

impl DocumentSummary {
    fn new(document: &Document, stats: NormalizationStats) -> Self {
        Self {
            path: document.path.display().to_string(),
            raw_len: stats.raw_len,
            normalized_len: stats.normalized_len,
            reduction_percent: stats.reduction_percent(),
        }
    }
}

/// Edit-distance analysis and its running time
#[derive(Debug, Clone, Serialize)]
pub struct EditDistanceRun {
    #[serde(flatten)]
    pub analysis: EditDistanceAnalysis,
    pub elapsed_us: u64,
}

/// Substring analysis and its running time
#[derive(Debug, Clone, Serialize)]
pub struct SubstringRun {
    #[serde(flatten)]
    pub analysis: SubstringAnalysis,
    pub elapsed_us: u64,
}

/// Everything a report needs about one comparison
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub first: DocumentSummary,
    pub second: DocumentSummary,
    pub normalize_us: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_distance: Option<EditDistanceRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substring: Option<SubstringRun>,
}

/// Normalize both documents and run the selected engines
pub fn compare_documents(
    first: &Document,
    second: &Document,
    algorithms: AlgorithmSelection,
) -> ComparisonReport {
    let normalize_start = Instant::now();
    let (text_a, stats_a) = normalize_with_stats(&first.bytes);
    let (text_b, stats_b) = normalize_with_stats(&second.bytes);
    let normalize_us = elapsed_us(normalize_start);

    debug!(
        raw_a = stats_a.raw_len,
        normalized_a = stats_a.normalized_len,
        words_a = text_a.word_count(),
        raw_b = stats_b.raw_len,
        normalized_b = stats_b.normalized_len,
        words_b = text_b.word_count(),
        elapsed_us = normalize_us,
        "Normalization complete"
    );

    let edit_distance = algorithms.runs_edit_distance().then(|| {
        let start = Instant::now();
        let analysis = analyze_edit_distance(&text_a, &text_b);
        let elapsed_us = elapsed_us(start);
        debug!(
            distance = analysis.distance,
            similarity = analysis.similarity,
            elapsed_us,
            "Edit distance complete"
        );
        EditDistanceRun {
            analysis,
            elapsed_us,
        }
    });

    let substring = algorithms.runs_substring().then(|| {
        let start = Instant::now();
        let analysis = analyze_substring(&text_a, &text_b);
        let elapsed_us = elapsed_us(start);
        debug!(
            length = analysis.matched.length,
            similarity = analysis.similarity,
            elapsed_us,
            "Longest common substring complete"
        );
        SubstringRun {
            analysis,
            elapsed_us,
        }
    });

    ComparisonReport {
        first: DocumentSummary::new(first, stats_a),
        second: DocumentSummary::new(second, stats_b),
        normalize_us,
        edit_distance,
        substring,
    }
}

/// Load, compare and render two documents
pub fn run_compare(first: &Path, second: &Path, config: &CompareConfig) -> Result<String> {
    config.validate()?;
    let (doc_a, doc_b) = load_pair(first, second)?;

    info!(
        "Comparing {} and {} ({:?})",
        doc_a.path.display(),
        doc_b.path.display(),
        config.algorithms
    );
    let comparison = compare_documents(&doc_a, &doc_b, config.algorithms);

    match config.format {
        OutputFormat::Text => Ok(report::render_text(&comparison, config.fragment_max_chars)),
        OutputFormat::Json => report::render_json(&comparison),
    }
}

/// Load and normalize a single document
pub fn run_normalize(path: &Path) -> Result<String> {
    let document = load_document(path)?;
    Ok(normalize(&document.bytes).into_string())
}

fn elapsed_us(start: Instant) -> u64 {
    start.elapsed().as_micros() as u64
}
