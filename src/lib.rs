// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Export core for generated stickers.
//!
//! Stickers carry an emotion label, a style label and (once generated) PNG
//! bytes. [`package`] filters out incomplete stickers and names the rest
//! `sticker-<emotion>-<style>.png`; [`export_archive`] hands the result to an
//! [`ArchiveCodec`] such as [`ZipArchiveCodec`] to produce the download.
//!
//! ```
//! use stickerpack::{StickerArtifact, package};
//!
//! let result = package(&[
//!     StickerArtifact::new("Very Excited", "Oil Painting", b"png".to_vec()),
//!     StickerArtifact::incomplete("broken", "test"),
//! ])
//! .unwrap();
//! assert_eq!(result.entries()[0].file_name, "sticker-very-excited-oil-painting.png");
//! assert_eq!(result.skipped(), 1);
//! ```

pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod utils;

pub use config::{Compression, DuplicatePolicy, PackagerConfig};
pub use error::PackagingError;
pub use logic::archive::{
    ArchiveCodec, ZipArchiveCodec, export_archive, export_zip, suggested_archive_name,
    write_archive,
};
pub use logic::packager::{Packager, build_file_name, normalize_label, package};
pub use models::{ImageContent, PackagedEntry, PackagingResult, StickerArtifact, StickerCollection};
