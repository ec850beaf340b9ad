//! Score normalization and result merging.

use std::collections::HashSet;

use loanassist_protocols::RankedAnswer;

/// Confidence for a keyword-matched record.
///
/// `1.0` when the record's question appears verbatim (case-insensitive)
/// inside the query text, else `0.8`. A deliberate two-level heuristic, not
/// a true relevance score; vector similarities pass through unchanged and
/// the two ranges are treated as comparable.
pub fn keyword_confidence(record_question: &str, query_text: &str) -> f32 {
    if query_text
        .to_lowercase()
        .contains(&record_question.to_lowercase())
    {
        1.0
    } else {
        0.8
    }
}

/// Merge both arms into one ranked list.
///
/// Vector candidates are inserted first, then keyword candidates; duplicates
/// (exact `question` equality) keep the first occurrence, so the vector arm
/// wins ties. The sort is stable, preserving insertion order among equal
/// scores. The result is capped at `max_results`.
pub fn merge_ranked(
    vector: Vec<RankedAnswer>,
    keyword: Vec<RankedAnswer>,
    max_results: usize,
) -> Vec<RankedAnswer> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<RankedAnswer> = Vec::with_capacity(vector.len() + keyword.len());

    for answer in vector.into_iter().chain(keyword) {
        if seen.insert(answer.question.clone()) {
            merged.push(answer);
        }
    }

    merged.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    merged.truncate(max_results);
    merged
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
