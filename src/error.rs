// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain errors raised while packaging stickers.

use thiserror::Error;

/// Reasons a packaging run can refuse to produce entries.
///
/// The `Display` text is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackagingError {
    /// No artifact carried image content.
    #[error("No stickers are available for download. Please generate some stickers first.")]
    EmptyInput,

    /// Two artifacts produced the same file name while duplicates are rejected.
    #[error("Duplicate sticker filename in archive: {0}")]
    DuplicateFileName(String),
}
