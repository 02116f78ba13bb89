// Catalog search: pure filtering over the loaded dataset sequence.

use crate::data::models::Dataset;

/// Card summaries are cut at a fixed width.
pub const SUMMARY_PREVIEW_CHARS: usize = 120;

/// Indices of datasets whose title or summary contains the query,
/// case-insensitively. Relative order is preserved; an empty (or
/// whitespace-only) query matches everything. The source sequence is never
/// touched.
pub fn matching_indices(datasets: &[Dataset], query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return (0..datasets.len()).collect();
    }

    datasets
        .iter()
        .enumerate()
        .filter(|(_, dataset)| {
            dataset.title.to_lowercase().contains(&needle)
                || dataset.summary.to_lowercase().contains(&needle)
        })
        .map(|(index, _)| index)
        .collect()
}

pub fn summary_preview(summary: &str) -> String {
    if summary.chars().count() <= SUMMARY_PREVIEW_CHARS {
        summary.to_string()
    } else {
        summary.chars().take(SUMMARY_PREVIEW_CHARS).collect()
    }
}

/// Detail resource a card links to, keyed by slug.
pub fn detail_path(slug: &str) -> String {
    format!("datasets/{slug}.html")
}
