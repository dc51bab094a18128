// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client-injection selection.
//!
//! Composes the route matcher, the `always` namespace set, and the
//! namespace extractor into the one decision the response rewriter needs:
//! which sub-catalog, if any, ships to the browser for this request path.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use skein_core::{DiagnosticSink, FlatCatalog};

use crate::config::{ClientLoadConfig, InjectionFallback};
use crate::extract::{extract_namespaces, NamespaceSelection};
use crate::routes::{match_routes, NamespaceSpec};

/// Decide the sub-catalog to ship to the client for a request path.
///
/// Returns `None` when nothing should be injected. A pure function of its
/// inputs; it performs no I/O and assumes nothing about how the result is
/// serialized into a response.
///
/// When at least one route matches, the namespace set is the union of the
/// config's `always` set and every matched route's namespaces,
/// deduplicated. A matched route that opted out ([`NamespaceSpec::Skip`])
/// suppresses injection for the request entirely. When no route matches,
/// the config's fallback mode decides: nothing, the `always` set only
/// (nothing if that set is empty), or the whole catalog.
#[must_use]
pub fn select_injection(
	path: &str,
	catalog: &FlatCatalog,
	config: &ClientLoadConfig,
	diagnostics: &dyn DiagnosticSink,
) -> Option<FlatCatalog> {
	let matched = match_routes(path, config, diagnostics);

	if !matched.patterns.is_empty() {
		let mut namespaces: BTreeSet<String> = config.always.iter().cloned().collect();
		for route in &matched.patterns {
			match route.namespaces() {
				NamespaceSpec::Skip => return None,
				NamespaceSpec::Named(named) => namespaces.extend(named.iter().cloned()),
			}
		}
		return Some(extract_namespaces(
			catalog,
			&NamespaceSelection::Named(namespaces),
		));
	}

	match config.fallback {
		InjectionFallback::None => None,
		InjectionFallback::AlwaysOnly => {
			if config.always.is_empty() {
				return None;
			}
			let always: BTreeSet<String> = config.always.iter().cloned().collect();
			Some(extract_namespaces(
				catalog,
				&NamespaceSelection::Named(always),
			))
		}
		InjectionFallback::All => {
			Some(extract_namespaces(catalog, &NamespaceSelection::All))
		}
	}
}

/// Wire shape handed to the response rewriter.
///
/// The rewriter owns serialization, content-type gating, and markup
/// escaping; this type only fixes the payload shape. Fallback keys cross
/// the boundary as an ordered sequence; receivers rebuild set semantics
/// on their side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
	/// Sub-catalog selected for this request.
	pub translations: FlatCatalog,
	/// Keys in `translations` satisfied from the default locale, sorted.
	pub fallback_keys: Vec<String>,
}

impl ClientPayload {
	/// Package a selected sub-catalog with the fallback keys it contains.
	///
	/// Fallback keys not present in the sub-catalog are dropped.
	#[must_use]
	pub fn build(translations: FlatCatalog, fallback_keys: &BTreeSet<String>) -> Self {
		let fallback_keys = fallback_keys
			.iter()
			.filter(|key| translations.contains_key(key.as_str()))
			.cloned()
			.collect();
		Self {
			translations,
			fallback_keys,
		}
	}
}
