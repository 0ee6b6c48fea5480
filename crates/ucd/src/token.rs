/// Returns `true` for characters that separate words in a character name.
fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == '-'
}

/// Splits `text` into words on whitespace and hyphens, skipping empty pieces.
///
/// `"HYPHEN-MINUS"` yields `HYPHEN`, `MINUS`; `"A B-C"` yields `A`, `B`, `C`.
/// Case is left untouched.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|word| !word.is_empty())
}

/// Tokenizes a character name and its optional alias into one word list.
///
/// Words from `name` come first, then words from `alias`; a word already seen
/// is not repeated. UCD names are uppercase in the source file, so the tokens
/// are uppercase without any re-casing here.
pub fn tokenize_name<'a>(name: &'a str, alias: Option<&'a str>) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();

    for word in split_words(name).chain(alias.into_iter().flat_map(split_words)) {
        if !tokens.iter().any(|token| token == word) {
            tokens.push(word.to_string());
        }
    }

    tokens
}
