//! Display-name helpers for raw material identifiers.

/// Turn an underscored identifier such as `LAPIS_LAZULI` into `Lapis Lazuli`.
///
/// The input is lower-cased first, so both `COBBLESTONE` and `cobblestone`
/// produce `Cobblestone`. Empty segments (`a__b`, leading or trailing `_`)
/// are dropped.
pub fn title_case(identifier: &str) -> String {
    identifier
        .to_lowercase()
        .split('_')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
