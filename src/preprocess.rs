//! Rewriting of word and ASCII operator spellings into symbolic tokens.
//!
//! The parser only understands single-character symbols; this pass turns
//! `p and not q` into `p ∧ ¬ q`. Words are maximal runs of ASCII
//! alphanumerics and `_`, matched case-insensitively. Any other word is
//! left untouched.

const WORDS: [(&str, char); 10] = [
    ("and", '∧'),
    ("or", '∨'),
    ("not", '¬'),
    ("xor", '⊕'),
    ("imply", '→'),
    ("implies", '→'),
    ("equals", '='),
    ("notequals", '≠'),
    ("true", '⊤'),
    ("false", '⊥'),
];

/// Multi-character aliases come first so that `!=` is not read as `!` `=`.
const ALIASES: [(&str, char); 6] = [
    ("->", '→'),
    ("!=", '≠'),
    ("&", '∧'),
    ("|", '∨'),
    ("!", '¬'),
    ("^", '⊕'),
];

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Symbol for `word`, if it is a known operator or constant name.
pub fn lookup_word(word: &str) -> Option<char> {
    WORDS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(word))
        .map(|&(_, symbol)| symbol)
}

/// Replaces operator words and ASCII aliases in `line` by their symbols.
pub fn substitute(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(ch) = rest.chars().next() {
        if is_word_char(ch) {
            let end = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
            let word = &rest[..end];
            match lookup_word(word) {
                Some(symbol) => out.push(symbol),
                None => out.push_str(word),
            }
            rest = &rest[end..];
        } else if let Some(&(alias, symbol)) = ALIASES.iter().find(|(alias, _)| rest.starts_with(alias)) {
            out.push(symbol);
            rest = &rest[alias.len()..];
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    out
}
