// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Namespace extraction over a flat catalog.

use std::collections::BTreeSet;

use skein_core::FlatCatalog;

/// Which namespaces to expose to the client.
///
/// A tagged three-way selection: the "everything" and "nothing" cases are
/// distinct variants, not empty-collection sentinels, so no emptiness
/// check can confuse them. [`NamespaceSelection::Named`] with an empty set
/// selects nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceSelection {
	/// No filtering; the entire catalog.
	All,
	/// Only entries under the named namespaces.
	Named(BTreeSet<String>),
	/// Nothing at all; the route opted out of injection.
	Skip,
}

/// The sub-catalog of entries belonging to the selected namespaces.
///
/// A key belongs to a namespace when it equals the namespace exactly or
/// starts with the namespace followed by a dot. Matching is prefix-exact:
/// `commonExtra` is not under `common`.
#[must_use]
pub fn extract_namespaces(catalog: &FlatCatalog, selection: &NamespaceSelection) -> FlatCatalog {
	match selection {
		NamespaceSelection::All => catalog.clone(),
		NamespaceSelection::Skip => FlatCatalog::new(),
		NamespaceSelection::Named(namespaces) => catalog
			.iter()
			.filter(|(key, _)| {
				namespaces
					.iter()
					.any(|namespace| key_in_namespace(key, namespace))
			})
			.map(|(key, text)| (key.clone(), text.clone()))
			.collect(),
	}
}

fn key_in_namespace(key: &str, namespace: &str) -> bool {
	key == namespace
		|| key
			.strip_prefix(namespace)
			.is_some_and(|rest| rest.starts_with('.'))
}
