// Critical-findings extraction
//
// The model is asked to list critical findings "separately at the end of
// the summary"; in practice it emits a heading containing the literal
// phrase below. Everything after the first occurrence is treated as the
// findings block, one finding per line.

/// Literal marker the reply is split on
pub const FINDINGS_MARKER: &str = "Critical Findings";

/// Split a model reply into (summary, findings).
///
/// Returns the whole reply and `None` when the marker is absent. When the
/// marker is present, each non-empty line after it becomes one finding,
/// trimmed of whitespace, then of `*` markdown emphasis, then of `:`.
pub fn split_critical_findings(reply: &str) -> (String, Option<Vec<String>>) {
    let Some((summary_part, findings_part)) = reply.split_once(FINDINGS_MARKER) else {
        return (reply.to_string(), None);
    };

    let findings = findings_part
        .trim()
        .lines()
        .map(|line| line.trim().trim_matches('*').trim_matches(':'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    (summary_part.trim().to_string(), Some(findings))
}
