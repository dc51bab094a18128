// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Default-locale fallback overlay.

use std::collections::BTreeSet;

use crate::catalog::FlatCatalog;

/// A target-locale catalog merged over the default locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedCatalog {
	/// Union of both key sets; target entries win verbatim.
	pub catalog: FlatCatalog,
	/// Keys whose text was supplied by the default locale.
	pub fallback_keys: BTreeSet<String>,
}

/// Overlay a target-locale catalog over the default-locale catalog.
///
/// Every key missing from `target` is filled from `default_catalog` and
/// recorded in the fallback-key set; target-only keys pass through
/// unmodified. The overlay is purely additive. When fallback is not
/// configured the host simply skips this call and uses `target` as-is
/// with an empty fallback-key set.
#[must_use]
pub fn overlay(target: &FlatCatalog, default_catalog: &FlatCatalog) -> MergedCatalog {
	let mut catalog = target.clone();
	let mut fallback_keys = BTreeSet::new();

	for (key, text) in default_catalog {
		if !target.contains_key(key) {
			catalog.insert(key.clone(), text.clone());
			fallback_keys.insert(key.clone());
		}
	}

	MergedCatalog { catalog, fallback_keys }
}
