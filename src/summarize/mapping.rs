// Heuristic sentence-to-paragraph source mapping
//
// For each summary sentence, take the first few longer words as key terms
// and mark every source paragraph containing one of them. This is a cheap
// provenance hint, not an alignment algorithm.

use std::collections::HashMap;

/// Words longer than this count as key terms
const KEY_TERM_MIN_LEN: usize = 5;

/// At most this many key terms per sentence
const KEY_TERMS_PER_SENTENCE: usize = 3;

/// Map summary sentences to the source paragraphs they appear to draw from.
///
/// Keys are `sentence_{i}` (index into the summary's '.'-split sentences);
/// values are indices into the source's non-empty lines. Sentences with no
/// matching paragraph produce no entry.
pub fn create_source_mapping(source_text: &str, summary: &str) -> HashMap<String, Vec<usize>> {
    let paragraphs: Vec<String> = source_text
        .split('\n')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_lowercase)
        .collect();

    let sentences = summary
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let mut mappings = HashMap::new();

    for (i, sentence) in sentences.enumerate() {
        let key_terms: Vec<String> = sentence
            .split_whitespace()
            .filter(|word| word.len() > KEY_TERM_MIN_LEN)
            .take(KEY_TERMS_PER_SENTENCE)
            .map(str::to_lowercase)
            .collect();

        if key_terms.is_empty() {
            continue;
        }

        let matched: Vec<usize> = paragraphs
            .iter()
            .enumerate()
            .filter(|(_, paragraph)| key_terms.iter().any(|term| paragraph.contains(term)))
            .map(|(j, _)| j)
            .collect();

        if !matched.is_empty() {
            mappings.insert(format!("sentence_{}", i), matched);
        }
    }

    mappings
}
