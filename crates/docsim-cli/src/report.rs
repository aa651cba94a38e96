//! Report rendering
//!
//! Text reports follow the layout: original sizes, normalization summary,
//! one results block per engine, then conclusions. The substring engine
//! gets two conclusions, one per verdict ladder.

use crate::error::Result;
use crate::pipeline::{ComparisonReport, DocumentSummary, EditDistanceRun, SubstringRun};
use docsim_core::SubstringMatch;
use std::fmt;

/// Render a comparison as human-readable text
pub fn render_text(report: &ComparisonReport, fragment_max_chars: usize) -> String {
    TextReport {
        report,
        fragment_max_chars,
    }
    .to_string()
}

/// Render a comparison as pretty JSON
pub fn render_json(report: &ComparisonReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Quote a fragment, cutting it after `max_chars` characters
pub fn format_fragment(matched: &SubstringMatch, max_chars: usize) -> String {
    let Some(fragment) = matched.fragment.as_deref() else {
        return "(no common substring found)".to_string();
    };

    if fragment.chars().count() <= max_chars {
        return format!("'{}'", fragment);
    }

    let head: String = fragment.chars().take(max_chars).collect();
    format!(
        "'{}...'\n(fragment truncated - showing first {} characters)",
        head, max_chars
    )
}

fn seconds(us: u64) -> f64 {
    us as f64 / 1_000_000.0
}

struct TextReport<'a> {
    report: &'a ComparisonReport,
    fragment_max_chars: usize,
}

impl TextReport<'_> {
    fn write_sources(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ORIGINAL DOCUMENTS")?;
        for (idx, doc) in [&self.report.first, &self.report.second].iter().enumerate() {
            writeln!(f, "File {}: {}", idx + 1, doc.path)?;
            writeln!(f, "  Size: {} characters", doc.raw_len)?;
        }
        writeln!(f)
    }

    fn write_normalization(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NORMALIZED ANALYSIS (stopwords removed)")?;
        writeln!(f)?;
        writeln!(f, "Preprocessing complete:")?;
        write_normalized_size(f, 1, &self.report.first)?;
        write_normalized_size(f, 2, &self.report.second)?;
        writeln!(
            f,
            "  Normalization time: {:.6} seconds",
            seconds(self.report.normalize_us)
        )?;
        writeln!(f)
    }

    fn write_edit_results(&self, f: &mut fmt::Formatter<'_>, run: &EditDistanceRun) -> fmt::Result {
        writeln!(f, "RESULTS - EDIT DISTANCE (LEVENSHTEIN)")?;
        writeln!(f, "  Similarity: {:.2}%", run.analysis.similarity)?;
        writeln!(f, "  Edit distance: {}", run.analysis.distance)?;
        writeln!(f, "  Execution time: {:.6} seconds", seconds(run.elapsed_us))?;
        writeln!(
            f,
            "  Total time (normalization + comparison): {:.6} seconds",
            seconds(self.report.normalize_us + run.elapsed_us)
        )?;
        writeln!(
            f,
            "  Note: this method does not look for the longest common substring; \
             it measures how many edits turn one text into the other."
        )?;
        writeln!(f)
    }

    fn write_substring_results(&self, f: &mut fmt::Formatter<'_>, run: &SubstringRun) -> fmt::Result {
        writeln!(f, "RESULTS - LONGEST COMMON SUBSTRING")?;
        writeln!(f, "  Match length: {} characters", run.analysis.matched.length)?;
        writeln!(f, "  Similarity: {:.2}%", run.analysis.similarity)?;
        writeln!(f, "  Execution time: {:.6} seconds", seconds(run.elapsed_us))?;
        writeln!(
            f,
            "  Total time (normalization + substring): {:.6} seconds",
            seconds(self.report.normalize_us + run.elapsed_us)
        )?;
        writeln!(f)?;
        writeln!(f, "  Fragment found:")?;
        for line in format_fragment(&run.analysis.matched, self.fragment_max_chars).lines() {
            writeln!(f, "  {}", line)?;
        }
        writeln!(f)
    }

    fn write_conclusions(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CONCLUSIONS")?;
        writeln!(f)?;

        if let Some(run) = &self.report.edit_distance {
            writeln!(f, "Edit distance verdict: {}.", run.analysis.verdict)?;
            writeln!(f)?;
        }

        if let Some(run) = &self.report.substring {
            let analysis = &run.analysis;
            writeln!(
                f,
                "Match length verdict: {} (post-normalization).",
                analysis.length_verdict
            )?;
            writeln!(
                f,
                "  The longest common substring is {} characters long.",
                analysis.matched.length
            )?;
            writeln!(f)?;
            writeln!(f, "Similarity percentage:")?;
            writeln!(
                f,
                "  With {:.2}% similarity (computed on the normalized text),",
                analysis.similarity
            )?;
            writeln!(f, "  verdict: {}.", analysis.similarity_verdict)?;
        }
        Ok(())
    }
}

fn write_normalized_size(
    f: &mut fmt::Formatter<'_>,
    number: usize,
    doc: &DocumentSummary,
) -> fmt::Result {
    writeln!(
        f,
        "  Text {}: {} characters (reduction: {:.2}%)",
        number, doc.normalized_len, doc.reduction_percent
    )
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DOCUMENT SIMILARITY ANALYSIS")?;
        writeln!(f)?;
        self.write_sources(f)?;
        self.write_normalization(f)?;
        if let Some(run) = &self.report.edit_distance {
            self.write_edit_results(f, run)?;
        }
        if let Some(run) = &self.report.substring {
            self.write_substring_results(f, run)?;
        }
        self.write_conclusions(f)
    }
}
