use crate::constants::display::{ACRONYMS, STRIPPED_EXTENSION};

/// Human-readable title for a filename.
///
/// Strips a trailing `.md` (exact suffix only; other extensions stay),
/// turns each `-` and `_` into one space, title-cases each word, then
/// corrects known acronyms word by word (`Api` → `API`). Spacing is kept as
/// is, so repeated or leading separators stay visible.
pub fn generate_display_name(file_name: &str) -> String {
    let stem = file_name
        .strip_suffix(STRIPPED_EXTENSION)
        .unwrap_or(file_name);

    stem.replace(['-', '_'], " ")
        .split(' ')
        .map(|word| correct_acronym(title_case(word)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn correct_acronym(word: String) -> String {
    ACRONYMS
        .iter()
        .find(|(from, _)| *from == word)
        .map(|(_, to)| (*to).to_string())
        .unwrap_or(word)
}
