// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Immutable snapshots of the user's generated stickers.

use crate::error::PackagingError;
use crate::logic::packager::Packager;
use crate::models::artifact::{PackagingResult, StickerArtifact};

/// Ordered sticker collection. Every mutation returns a new snapshot and
/// leaves the receiver untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StickerCollection {
    items: Vec<StickerArtifact>,
}

impl StickerCollection {
    pub fn new(items: Vec<StickerArtifact>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[StickerArtifact] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Snapshot with `artifact` appended at the end.
    #[must_use]
    pub fn with_sticker(&self, artifact: StickerArtifact) -> Self {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend_from_slice(&self.items);
        items.push(artifact);
        Self { items }
    }

    /// Snapshot without the sticker at `index`; out-of-range indices yield an equal snapshot.
    #[must_use]
    pub fn without_sticker(&self, index: usize) -> Self {
        if index >= self.items.len() {
            tracing::debug!(index, len = self.items.len(), "remove index out of range");
            return self.clone();
        }
        let items = self
            .items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, item)| item.clone())
            .collect();
        Self { items }
    }

    /// Number of stickers that would end up in an export.
    pub fn exportable_count(&self) -> usize {
        self.items.iter().filter(|a| a.is_complete()).count()
    }

    /// Whether a download can be offered at all.
    pub fn can_export(&self) -> bool {
        self.exportable_count() > 0
    }

    pub fn package(&self, packager: &Packager) -> Result<PackagingResult, PackagingError> {
        packager.package(&self.items)
    }
}
