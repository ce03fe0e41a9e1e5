// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by packaging and archive logic.

pub mod hash;
pub mod sanitize_component;

/// Compute the SHA-256 digest of a byte buffer.
pub use hash::hash_bytes;
/// Sanitize user-provided folder names into archive-safe path components.
pub use sanitize_component::{DEFAULT_FOLDER_NAME, sanitize_component};
