// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure data types shared between packaging and archive logic.

pub mod artifact;
pub mod collection;

pub use artifact::{ImageContent, PackagedEntry, PackagingResult, StickerArtifact};
pub use collection::StickerCollection;
