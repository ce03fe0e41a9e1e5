// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

use std::collections::HashSet;

use proptest::prelude::*;
use stickerpack::{PackagingError, StickerArtifact, build_file_name, normalize_label, package};

fn label_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,16}",
        "[ -~]{0,24}",
        any::<String>(),
    ]
}

fn artifact_strategy() -> impl Strategy<Value = StickerArtifact> {
    (
        label_strategy(),
        label_strategy(),
        proptest::option::of(proptest::collection::vec(any::<u8>(), 0..32)),
    )
        .prop_map(|(emotion, style, content)| match content {
            Some(bytes) => StickerArtifact::new(emotion, style, bytes),
            None => StickerArtifact::incomplete(emotion, style),
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn normalize_label_is_idempotent(label in label_strategy()) {
        let once = normalize_label(&label);
        prop_assert_eq!(normalize_label(&once), once);
    }

    #[test]
    fn normalize_label_emits_hyphen_separated_ascii(label in label_strategy()) {
        let out = normalize_label(&label);
        prop_assert!(out.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!out.starts_with('-'));
        prop_assert!(!out.ends_with('-'));
        prop_assert!(!out.contains("--"));
    }

    #[test]
    fn build_file_name_has_fixed_frame(emotion in label_strategy(), style in label_strategy()) {
        let name = build_file_name(&emotion, &style);
        prop_assert!(name.starts_with("sticker-"));
        prop_assert!(name.ends_with(".png"));
    }

    #[test]
    fn package_never_grows_and_keeps_names_unique(
        artifacts in proptest::collection::vec(artifact_strategy(), 0..12)
    ) {
        let complete = artifacts.iter().filter(|a| a.is_complete()).count();

        match package(&artifacts) {
            Ok(result) => {
                prop_assert_eq!(result.len(), complete);
                prop_assert_eq!(result.skipped(), artifacts.len() - complete);
                prop_assert_eq!(result.len() == artifacts.len(), complete == artifacts.len());

                let names: HashSet<_> = result.entries().iter().map(|e| e.file_name.as_str()).collect();
                prop_assert_eq!(names.len(), result.len());

                // Content order follows input order.
                let expected: Vec<_> = artifacts.iter().filter_map(|a| a.content.clone()).collect();
                let actual: Vec<_> = result.entries().iter().map(|e| e.content.clone()).collect();
                prop_assert_eq!(actual, expected);
            }
            Err(err) => {
                prop_assert_eq!(complete, 0);
                prop_assert_eq!(err, PackagingError::EmptyInput);
            }
        }
    }
}
