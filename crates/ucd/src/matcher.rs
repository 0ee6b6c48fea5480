/// Returns `true` when `word` is one of `tokens` (exact string equality).
pub fn contains<S: AsRef<str>>(tokens: &[S], word: &str) -> bool {
    tokens.iter().any(|token| token.as_ref() == word)
}

/// Returns `true` when every query word is present in `tokens`.
///
/// `tokens` is treated as a set. An empty query matches everything. No case
/// folding happens here: query words must already be uppercase to meet the
/// uppercase tokens of UCD names.
pub fn all_match<S: AsRef<str>, Q: AsRef<str>>(tokens: &[S], query: &[Q]) -> bool {
    query.iter().all(|word| contains(tokens, word.as_ref()))
}
