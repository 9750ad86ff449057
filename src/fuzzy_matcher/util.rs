use crate::fuzzy_matcher::IndexType;

/// Cheap rejection test run before the alignment scorer.
///
/// Returns true iff every byte of `query` appears in `candidate`, in order,
/// ignoring ASCII case. The empty query is a subsequence of everything.
pub fn is_subsequence(query: &str, candidate: &str) -> bool {
    let query = query.as_bytes();
    let candidate = candidate.as_bytes();

    if query.is_empty() {
        return true;
    }
    if query.len() > candidate.len() {
        return false;
    }

    let mut q_idx: IndexType = 0;
    for &c in candidate {
        if query[q_idx].eq_ignore_ascii_case(&c) {
            q_idx += 1;
            if q_idx == query.len() {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
pub(crate) fn assert_order(matcher: &dyn crate::fuzzy_matcher::FuzzyMatcher, pattern: &str, choices: &[&'static str]) {
    let result = filter_and_sort(matcher, pattern, choices);

    if result != choices {
        // debug print
        println!("pattern: {pattern}");
        for &choice in choices.iter() {
            println!("{choice}: {:?}", matcher.fuzzy_match(choice, pattern));
        }
    }

    assert_eq!(result, choices);
}

#[cfg(test)]
fn filter_and_sort(
    matcher: &dyn crate::fuzzy_matcher::FuzzyMatcher,
    pattern: &str,
    lines: &[&'static str],
) -> Vec<&'static str> {
    let mut lines_with_score: Vec<(crate::fuzzy_matcher::ScoreType, &'static str)> = lines
        .iter()
        .filter_map(|&s| matcher.fuzzy_match(s, pattern).map(|score| (score, s)))
        .collect();
    lines_with_score.sort_by_key(|(score, _)| -score);
    lines_with_score.into_iter().map(|(_, string)| string).collect()
}
