// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Serialize packaged stickers into a downloadable ZIP archive.
//!
//! Responsibilities:
//! - Define the [`ArchiveCodec`] seam so packaging stays independent of the archive format.
//! - Write entries under one top-level folder with deterministic timestamps.
//! - Optionally describe the bundle in a `manifest.json` with sizes and SHA-256 digests.

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use zip::{DateTime, write::FileOptions};

use crate::config::{Compression, PackagerConfig};
use crate::logic::packager::Packager;
use crate::models::artifact::{PackagedEntry, StickerArtifact};
use crate::utils::{hash_bytes, sanitize_component};

/// Name of the optional manifest placed next to the stickers.
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

const ARCHIVE_EXTENSION: &str = "zip";

/// Turns a folder name plus ordered entries into archive bytes.
pub trait ArchiveCodec {
    /// Build an archive where every entry lives under `folder_name/`.
    fn create_archive(&self, folder_name: &str, entries: &[PackagedEntry]) -> Result<Vec<u8>>;
}

/// [`ArchiveCodec`] backed by the `zip` crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZipArchiveCodec {
    compression: Compression,
}

impl ZipArchiveCodec {
    pub fn new(compression: Compression) -> Self {
        Self { compression }
    }

    pub fn from_config(config: &PackagerConfig) -> Self {
        Self::new(config.compression)
    }
}

impl ArchiveCodec for ZipArchiveCodec {
    fn create_archive(&self, folder_name: &str, entries: &[PackagedEntry]) -> Result<Vec<u8>> {
        let root_prefix = format!("{}/", folder_name);

        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        // Fixed timestamps keep repeated exports byte-identical.
        let options: FileOptions<'_, ()> = FileOptions::default()
            .compression_method(self.compression.method())
            .last_modified_time(DateTime::default());

        zip.add_directory(&root_prefix, options)
            .context("Failed to create root directory in archive")?;

        for entry in entries {
            let archive_path = format!("{}{}", root_prefix, entry.file_name);
            zip.start_file(&archive_path, options)
                .with_context(|| format!("Failed to add file {} to archive", archive_path))?;
            zip.write_all(&entry.content)
                .with_context(|| format!("Failed to write {} into archive", archive_path))?;
        }

        let cursor = zip.finish().context("Failed to finalize archive")?;
        Ok(cursor.into_inner())
    }
}

#[derive(Serialize)]
struct Manifest<'a> {
    folder: &'a str,
    skipped: usize,
    entries: Vec<ManifestEntry<'a>>,
}

#[derive(Serialize)]
struct ManifestEntry<'a> {
    name: &'a str,
    size: usize,
    sha256: String,
}

fn manifest_entry(folder: &str, skipped: usize, entries: &[PackagedEntry]) -> Result<PackagedEntry> {
    let manifest = Manifest {
        folder,
        skipped,
        entries: entries
            .iter()
            .map(|entry| ManifestEntry {
                name: &entry.file_name,
                size: entry.content.len(),
                sha256: hash_bytes(&entry.content),
            })
            .collect(),
    };
    let bytes = serde_json::to_vec_pretty(&manifest).context("Failed to serialize manifest")?;

    Ok(PackagedEntry {
        file_name: MANIFEST_FILE_NAME.to_string(),
        content: bytes.into(),
    })
}

/// Package `artifacts` and serialize them with `codec`.
///
/// A [`crate::PackagingError`] is returned unchanged inside the `anyhow::Error`;
/// callers can `downcast_ref` it to show its message to the user.
///
/// # Examples
///
/// ```
/// use stickerpack::{Packager, StickerArtifact, ZipArchiveCodec, export_archive};
///
/// let stickers = vec![StickerArtifact::new("happy", "cartoon", b"png".to_vec())];
/// let bytes = export_archive(&stickers, &Packager::default(), &ZipArchiveCodec::default()).unwrap();
/// assert!(bytes.starts_with(b"PK"));
/// ```
pub fn export_archive<C>(
    artifacts: &[StickerArtifact],
    packager: &Packager,
    codec: &C,
) -> Result<Vec<u8>>
where
    C: ArchiveCodec + ?Sized,
{
    let result = packager.package(artifacts)?;
    let folder = result.folder_name().to_string();
    let skipped = result.skipped();
    let mut entries = result.into_entries();

    if packager.config().include_manifest {
        let manifest = manifest_entry(&folder, skipped, &entries)?;
        entries.push(manifest);
    }

    let bytes = codec.create_archive(&folder, &entries)?;
    tracing::info!(
        folder = %folder,
        entries = entries.len(),
        bytes = bytes.len(),
        "exported sticker archive"
    );
    Ok(bytes)
}

/// [`export_archive`] with a [`ZipArchiveCodec`] built from the packager's config,
/// so the configured compression applies.
pub fn export_zip(artifacts: &[StickerArtifact], packager: &Packager) -> Result<Vec<u8>> {
    export_archive(
        artifacts,
        packager,
        &ZipArchiveCodec::from_config(packager.config()),
    )
}

/// Write archive bytes to `output`, creating missing parent directories.
///
/// A missing or different extension is replaced by `.zip` (an existing `.ZIP`
/// is kept). Returns the path actually written.
pub fn write_archive(output: &Path, bytes: &[u8]) -> Result<PathBuf> {
    let output = with_archive_extension(output);

    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {:?}", parent))?;
    }

    fs::write(&output, bytes)
        .with_context(|| format!("Failed to write archive file {:?}", output))?;
    Ok(output)
}

fn with_archive_extension(output: &Path) -> PathBuf {
    match output.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case(ARCHIVE_EXTENSION) => output.to_path_buf(),
        _ => output.with_extension(ARCHIVE_EXTENSION),
    }
}

/// Suggest a download file name for an export folder.
///
/// Uses [`crate::utils::sanitize_component()`] and lowercases the result, then
/// appends `.zip`; the default folder yields `ai-stickers.zip`.
pub fn suggested_archive_name(folder_name: &str) -> String {
    format!(
        "{}.{ARCHIVE_EXTENSION}",
        sanitize_component(folder_name).to_ascii_lowercase()
    )
}
