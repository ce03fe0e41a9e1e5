// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic: label normalization, packaging and archive export.

pub mod archive;
pub mod packager;
