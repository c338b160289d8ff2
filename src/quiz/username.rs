// src/quiz/username.rs

/// Friendly display name derived from an email address.
///
/// * `dejan@drivesales.com` -> `Dejan`
/// * `dejan.g@drivesales.com` -> `Dejan G.`
pub fn format_username(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();

    let mut parts = local.split('.');
    let first = capitalize(parts.next().unwrap_or_default());

    match parts.next().and_then(|last| last.chars().next()) {
        Some(initial) => format!("{} {}.", first, initial.to_uppercase()),
        None => first,
    }
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
