//! Fuzzy name scoring for symbol search.
//!
//! Scores are comparable across candidates for the same query only:
//! exact matches beat prefixes, prefixes beat subsequences, and a candidate
//! the query is not a subsequence of scores zero.

/// Score of a case-insensitive exact match.
pub const EXACT_SCORE: u32 = 1000;

/// Score of every candidate for an empty query.
pub const EMPTY_QUERY_SCORE: u32 = 1;

const PREFIX_BASE: u32 = 900;
const PREFIX_FLOOR: u32 = 500;
const SUBSEQUENCE_BASE: u32 = 100;
const SUBSEQUENCE_CAP: u32 = 499;
const RUN_BONUS: u32 = 4;

/// Score `candidate` against `query`. Zero means "no match".
pub fn score(query: &str, candidate: &str) -> u32 {
    if query.is_empty() {
        return EMPTY_QUERY_SCORE;
    }

    let query = query.to_lowercase();
    let candidate = candidate.to_lowercase();

    if query == candidate {
        return EXACT_SCORE;
    }

    if candidate.starts_with(&query) {
        let diff = candidate.chars().count() - query.chars().count();
        let diff = u32::try_from(diff).unwrap_or(u32::MAX);
        return PREFIX_BASE.saturating_sub(diff).max(PREFIX_FLOOR);
    }

    subsequence_score(&query, &candidate).unwrap_or(0)
}

/// Walk `candidate` matching `query` chars in order; each matched char is
/// worth `1 + RUN_BONUS * run`, where `run` counts the directly preceding
/// consecutive matches.
fn subsequence_score(query: &str, candidate: &str) -> Option<u32> {
    let mut wanted = query.chars().peekable();
    let mut total = SUBSEQUENCE_BASE;
    let mut run = 0u32;
    let mut previous_matched = false;

    for c in candidate.chars() {
        let Some(&next) = wanted.peek() else {
            break;
        };
        if c == next {
            wanted.next();
            run = if previous_matched { run + 1 } else { 0 };
            total = total.saturating_add(1 + RUN_BONUS * run);
            previous_matched = true;
        } else {
            previous_matched = false;
        }
    }

    if wanted.peek().is_some() {
        None
    } else {
        Some(total.min(SUBSEQUENCE_CAP))
    }
}
