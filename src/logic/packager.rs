// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Turn generated stickers into named, archive-ready entries.
//!
//! Responsibilities:
//! - Normalize emotion/style labels into file-name segments.
//! - Skip incomplete stickers and keep the input order of the rest.
//! - Resolve file-name collisions according to [`DuplicatePolicy`].

use std::collections::{HashMap, HashSet};

use crate::config::{DuplicatePolicy, PackagerConfig};
use crate::error::PackagingError;
use crate::models::artifact::{PackagedEntry, PackagingResult, StickerArtifact};
use crate::utils::sanitize_component;

const FILE_PREFIX: &str = "sticker-";
const FILE_EXTENSION: &str = ".png";

/// Fold a label into a lowercase, hyphen-separated file-name segment.
///
/// Every character outside `[a-z0-9]` (after lower-casing) becomes `-`,
/// runs of `-` collapse and leading/trailing hyphens are trimmed.
/// Symbol-only or empty labels yield an empty string.
///
/// # Examples
///
/// ```
/// use stickerpack::normalize_label;
///
/// assert_eq!(normalize_label("Very Excited"), "very-excited");
/// assert_eq!(normalize_label("sad :("), "sad");
/// ```
pub fn normalize_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for ch in label.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            out.push(ch);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }

    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// File name used for a sticker inside the export folder.
///
/// ```
/// use stickerpack::build_file_name;
///
/// assert_eq!(build_file_name("happy", "cartoon"), "sticker-happy-cartoon.png");
/// assert_eq!(build_file_name("!!", "??"), "sticker--.png");
/// ```
pub fn build_file_name(emotion: &str, style: &str) -> String {
    format!(
        "{FILE_PREFIX}{}-{}{FILE_EXTENSION}",
        normalize_label(emotion),
        normalize_label(style)
    )
}

/// `sticker-happy-cartoon.png` with `n = 2` becomes `sticker-happy-cartoon-2.png`.
fn with_numeric_suffix(file_name: &str, n: usize) -> String {
    let stem = file_name.strip_suffix(FILE_EXTENSION).unwrap_or(file_name);
    format!("{stem}-{n}{FILE_EXTENSION}")
}

/// File names claimed during one packaging run.
#[derive(Default)]
struct NameRegistry {
    taken: HashSet<String>,
    /// Next suffix to try per colliding base name; lower suffixes are already taken.
    next_suffix: HashMap<String, usize>,
}

/// Stateless packaging pipeline parameterized by a [`PackagerConfig`].
#[derive(Clone, Debug, Default)]
pub struct Packager {
    config: PackagerConfig,
}

impl Packager {
    /// The configured folder name is sanitized once, up front.
    pub fn new(mut config: PackagerConfig) -> Self {
        config.folder_name = sanitize_component(&config.folder_name);
        Self { config }
    }

    pub fn config(&self) -> &PackagerConfig {
        &self.config
    }

    /// Package every complete artifact, in input order.
    ///
    /// # Errors
    ///
    /// - [`PackagingError::EmptyInput`] when no artifact has image content.
    /// - [`PackagingError::DuplicateFileName`] when two names collide and the
    ///   policy is [`DuplicatePolicy::Reject`].
    pub fn package(
        &self,
        artifacts: &[StickerArtifact],
    ) -> Result<PackagingResult, PackagingError> {
        let mut entries = Vec::with_capacity(artifacts.len());
        let mut names = NameRegistry::default();
        let mut skipped = 0usize;

        for (idx, artifact) in artifacts.iter().enumerate() {
            let Some(content) = artifact.content.as_ref() else {
                tracing::debug!(
                    index = idx,
                    emotion = %artifact.emotion,
                    style = %artifact.style,
                    "skipping sticker without image content"
                );
                skipped += 1;
                continue;
            };

            let base = build_file_name(&artifact.emotion, &artifact.style);
            let file_name = self.claim_name(base, &mut names)?;

            entries.push(PackagedEntry {
                file_name,
                content: content.clone(),
            });
        }

        if entries.is_empty() {
            return Err(PackagingError::EmptyInput);
        }

        tracing::info!(
            entries = entries.len(),
            skipped,
            folder = %self.config.folder_name,
            "packaged stickers"
        );

        Ok(PackagingResult {
            folder_name: self.config.folder_name.clone(),
            entries,
            skipped,
        })
    }

    fn claim_name(
        &self,
        base: String,
        names: &mut NameRegistry,
    ) -> Result<String, PackagingError> {
        if !names.taken.contains(&base) {
            names.taken.insert(base.clone());
            return Ok(base);
        }

        match self.config.duplicate_names {
            DuplicatePolicy::Reject => Err(PackagingError::DuplicateFileName(base)),
            DuplicatePolicy::NumericSuffix => {
                let mut n = names.next_suffix.get(&base).copied().unwrap_or(2);
                let renamed = loop {
                    let candidate = with_numeric_suffix(&base, n);
                    if !names.taken.contains(&candidate) {
                        break candidate;
                    }
                    n += 1;
                };
                tracing::debug!(original = %base, renamed = %renamed, "renamed duplicate sticker");
                names.taken.insert(renamed.clone());
                names.next_suffix.insert(base, n + 1);
                Ok(renamed)
            }
        }
    }
}

/// Package artifacts with the default configuration (`AI-Stickers`, numeric suffixes).
pub fn package(artifacts: &[StickerArtifact]) -> Result<PackagingResult, PackagingError> {
    Packager::default().package(artifacts)
}
