// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Produce archive-safe folder names for the exported sticker bundle.

/// Folder used when a configured name sanitizes to nothing.
pub const DEFAULT_FOLDER_NAME: &str = "AI-Stickers";

/// Produce a single archive path component from a user-facing folder name.
///
/// # Steps
/// - Transliterate Unicode to ASCII with `deunicode` (e.g., "Å" → "A").
/// - Keep ASCII alphanumerics and `_`; everything else, including `-`, folds
///   to a single `-`.
/// - Trim `-` from both ends.
/// - Guard against Windows reserved device names and empty results.
///
/// Case is preserved, so the default `AI-Stickers` passes through unchanged.
pub fn sanitize_component(value: &str) -> String {
    let transliterated = deunicode::deunicode(value);
    let mut out = String::with_capacity(transliterated.len());

    for ch in transliterated.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }

    while out.ends_with('-') {
        out.pop();
    }

    if out.is_empty() {
        return DEFAULT_FOLDER_NAME.to_string();
    }

    let upper = out.to_ascii_uppercase();
    let is_reserved = matches!(
        upper.as_str(),
        "CON"
            | "PRN"
            | "AUX"
            | "NUL"
            | "COM1"
            | "COM2"
            | "COM3"
            | "COM4"
            | "COM5"
            | "COM6"
            | "COM7"
            | "COM8"
            | "COM9"
            | "LPT1"
            | "LPT2"
            | "LPT3"
            | "LPT4"
            | "LPT5"
            | "LPT6"
            | "LPT7"
            | "LPT8"
            | "LPT9"
    );

    if is_reserved {
        out.push('_');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_FOLDER_NAME, sanitize_component};

    #[test]
    fn sanitize_component_keeps_default_folder_name() {
        assert_eq!(sanitize_component("AI-Stickers"), "AI-Stickers");
    }

    // Accents are transliterated and separators fold into single hyphens.
    #[test]
    fn sanitize_component_transliterates_and_collapses_separators() {
        assert_eq!(sanitize_component("Café / Stickers 2025"), "Cafe-Stickers-2025");
    }

    // Path traversal attempts must not survive as separate components.
    #[test]
    fn sanitize_component_strips_path_separators_and_dots() {
        assert_eq!(sanitize_component("../../etc"), "etc");
        assert_eq!(sanitize_component("my.stickers"), "my-stickers");
    }

    // Hyphens are separators too: runs collapse and edges are trimmed.
    #[test]
    fn sanitize_component_collapses_and_trims_hyphens() {
        assert_eq!(sanitize_component("--x"), "x");
        assert_eq!(sanitize_component("a--_b-"), "a-_b");
    }

    #[test]
    fn sanitize_component_appends_suffix_for_windows_reserved_names() {
        assert_eq!(sanitize_component("con"), "con_");
        assert_eq!(sanitize_component("LPT1"), "LPT1_");
    }

    #[test]
    fn sanitize_component_falls_back_for_symbol_only_names() {
        assert_eq!(sanitize_component("..."), DEFAULT_FOLDER_NAME);
        assert_eq!(sanitize_component(""), DEFAULT_FOLDER_NAME);
    }
}
