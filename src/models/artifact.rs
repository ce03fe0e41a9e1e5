// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Sticker artifact and packaging result types (I/O-agnostic).

use std::sync::Arc;

/// Immutable image bytes shared between artifacts, entries and snapshots.
pub type ImageContent = Arc<[u8]>;

/// One generated sticker: its labels plus the image, when generation finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StickerArtifact {
    pub emotion: String,
    pub style: String,
    /// `None` marks the artifact incomplete; it is skipped on export.
    pub content: Option<ImageContent>,
}

impl StickerArtifact {
    pub fn new(
        emotion: impl Into<String>,
        style: impl Into<String>,
        content: impl Into<ImageContent>,
    ) -> Self {
        Self {
            emotion: emotion.into(),
            style: style.into(),
            content: Some(content.into()),
        }
    }

    /// Artifact whose image is missing (generation failed or is still pending).
    pub fn incomplete(emotion: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            emotion: emotion.into(),
            style: style.into(),
            content: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.content.is_some()
    }
}

/// Archive-ready file: final name inside the folder plus its bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackagedEntry {
    pub file_name: String,
    pub content: ImageContent,
}

/// Output of one packaging run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackagingResult {
    pub(crate) folder_name: String,
    pub(crate) entries: Vec<PackagedEntry>,
    pub(crate) skipped: usize,
}

impl PackagingResult {
    /// Top-level folder the entries belong under.
    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    /// Entries in input order.
    pub fn entries(&self) -> &[PackagedEntry] {
        &self.entries
    }

    /// Number of incomplete artifacts left out.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<PackagedEntry> {
        self.entries
    }
}
