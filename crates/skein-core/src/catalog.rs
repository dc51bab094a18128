// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Nested catalog model and flattening.
//!
//! The loader hands over one nested tree per locale; [`flatten`] turns it
//! into the flat dotted-key table every other part of the engine works on.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::CatalogError;

/// Flattened catalog: dotted key (e.g. `common.actions.save`) to text.
///
/// Keys are case-sensitive and unique. Treated as immutable once built;
/// each request works against a single catalog snapshot.
pub type FlatCatalog = BTreeMap<String, String>;

/// A per-locale catalog in its nested tree form, as produced by the loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NestedCatalog {
	/// A translated string.
	Leaf(String),
	/// A subtree keyed by path segment.
	Node(BTreeMap<String, NestedCatalog>),
}

impl NestedCatalog {
	/// Convert loader JSON into the nested catalog model.
	///
	/// # Errors
	///
	/// Returns [`CatalogError::MalformedEntry`] naming the dotted key path
	/// when a leaf is anything other than a string. Numbers, booleans,
	/// nulls, and arrays are never coerced.
	pub fn from_value(value: &Value) -> Result<Self, CatalogError> {
		Self::convert(value, &mut Vec::new())
	}

	fn convert(value: &Value, path: &mut Vec<String>) -> Result<Self, CatalogError> {
		match value {
			Value::String(text) => Ok(Self::Leaf(text.clone())),
			Value::Object(entries) => {
				let mut node = BTreeMap::new();
				for (segment, child) in entries {
					path.push(segment.clone());
					let converted = Self::convert(child, path)?;
					path.pop();
					node.insert(segment.clone(), converted);
				}
				Ok(Self::Node(node))
			}
			other => Err(CatalogError::MalformedEntry {
				path: path.join("."),
				found: json_type_name(other).to_string(),
			}),
		}
	}
}

fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

/// Flatten a nested catalog into its dotted-key form.
///
/// Each leaf's key is the segment path from root to leaf, with every
/// segment normalized from hyphenated form to camel form (directory and
/// file names use `user-profile`, keys use `userProfile`). Segments
/// without hyphens pass through unchanged, which leaves in-file JSON keys
/// as they were written.
///
/// # Errors
///
/// Returns [`CatalogError::DuplicateKey`] when two source paths flatten to
/// the same key (e.g. `user-profile` next to `userProfile`), and
/// [`CatalogError::MalformedEntry`] when the catalog root is a bare
/// string. Collisions are detected at flatten time, not at lookup time.
pub fn flatten(tree: &NestedCatalog) -> Result<FlatCatalog, CatalogError> {
	let NestedCatalog::Node(root) = tree else {
		return Err(CatalogError::MalformedEntry {
			path: String::new(),
			found: "a string at the catalog root".to_string(),
		});
	};

	let mut flat = FlatCatalog::new();
	let mut sources: BTreeMap<String, String> = BTreeMap::new();
	flatten_node(root, &mut Vec::new(), &mut Vec::new(), &mut flat, &mut sources)?;
	Ok(flat)
}

fn flatten_node(
	node: &BTreeMap<String, NestedCatalog>,
	raw_path: &mut Vec<String>,
	key_path: &mut Vec<String>,
	flat: &mut FlatCatalog,
	sources: &mut BTreeMap<String, String>,
) -> Result<(), CatalogError> {
	for (segment, child) in node {
		raw_path.push(segment.clone());
		key_path.push(camel_segment(segment));

		match child {
			NestedCatalog::Leaf(text) => {
				let key = key_path.join(".");
				let source = raw_path.join(".");
				if let Some(first) = sources.get(&key) {
					return Err(CatalogError::DuplicateKey {
						key,
						first: first.clone(),
						second: source,
					});
				}
				sources.insert(key.clone(), source);
				flat.insert(key, text.clone());
			}
			NestedCatalog::Node(children) => {
				flatten_node(children, raw_path, key_path, flat, sources)?;
			}
		}

		raw_path.pop();
		key_path.pop();
	}
	Ok(())
}

/// One-way normalization of a hyphenated segment to camel form.
///
/// `user-profile` becomes `userProfile`; only the first character of each
/// hyphen-delimited word changes case. Hyphen-free segments are returned
/// unchanged.
fn camel_segment(segment: &str) -> String {
	if !segment.contains('-') {
		return segment.to_string();
	}

	let mut out = String::with_capacity(segment.len());
	for (index, word) in segment.split('-').filter(|word| !word.is_empty()).enumerate() {
		let mut chars = word.chars();
		// Non-empty by the filter above.
		if let Some(first) = chars.next() {
			if index == 0 {
				out.extend(first.to_lowercase());
			} else {
				out.extend(first.to_uppercase());
			}
			out.push_str(chars.as_str());
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn tree(value: Value) -> NestedCatalog {
		NestedCatalog::from_value(&value).unwrap()
	}

	#[test]
	fn test_flatten_nested_tree() {
		let flat = flatten(&tree(json!({
			"common": {
				"actions": { "save": "Save", "cancel": "Cancel" },
				"title": "Home"
			}
		})))
		.unwrap();

		assert_eq!(flat.len(), 3);
		assert_eq!(flat["common.actions.save"], "Save");
		assert_eq!(flat["common.actions.cancel"], "Cancel");
		assert_eq!(flat["common.title"], "Home");
	}

	#[test]
	fn test_flatten_camelizes_hyphenated_segments() {
		let flat = flatten(&tree(json!({
			"user-profile": { "edit-name": "Edit name" }
		})))
		.unwrap();

		assert_eq!(flat["userProfile.editName"], "Edit name");
	}

	#[test]
	fn test_flatten_keeps_hyphen_free_segments() {
		let flat = flatten(&tree(json!({
			"commonExtra": "X",
			"Common": "Y"
		})))
		.unwrap();

		assert!(flat.contains_key("commonExtra"));
		assert!(flat.contains_key("Common"));
	}

	#[test]
	fn test_flatten_lowercases_first_word_of_hyphenated_segment() {
		let flat = flatten(&tree(json!({ "Save-all-items": "Save all" }))).unwrap();
		assert_eq!(flat["saveAllItems"], "Save all");
	}

	#[test]
	fn test_flatten_drops_empty_hyphen_runs() {
		let flat = flatten(&tree(json!({ "user--profile-": "X" }))).unwrap();
		assert_eq!(flat["userProfile"], "X");
	}

	#[test]
	fn test_from_value_rejects_number_leaf() {
		let err = NestedCatalog::from_value(&json!({
			"common": { "count": 3 }
		}))
		.unwrap_err();

		match err {
			CatalogError::MalformedEntry { path, found } => {
				assert_eq!(path, "common.count");
				assert_eq!(found, "a number");
			}
			other => panic!("expected MalformedEntry, got {other:?}"),
		}
	}

	#[test]
	fn test_from_value_rejects_array_leaf() {
		let err = NestedCatalog::from_value(&json!({ "list": ["a", "b"] })).unwrap_err();
		assert!(matches!(err, CatalogError::MalformedEntry { .. }));
	}

	#[test]
	fn test_from_value_rejects_null_leaf() {
		let err = NestedCatalog::from_value(&json!({ "a": { "b": null } })).unwrap_err();
		match err {
			CatalogError::MalformedEntry { path, found } => {
				assert_eq!(path, "a.b");
				assert_eq!(found, "null");
			}
			other => panic!("expected MalformedEntry, got {other:?}"),
		}
	}

	#[test]
	fn test_flatten_rejects_string_root() {
		let err = flatten(&NestedCatalog::Leaf("Hello".to_string())).unwrap_err();
		match err {
			CatalogError::MalformedEntry { path, .. } => assert_eq!(path, ""),
			other => panic!("expected MalformedEntry, got {other:?}"),
		}
	}

	#[test]
	fn test_flatten_detects_camelization_collision() {
		let err = flatten(&tree(json!({
			"user-profile": { "name": "A" },
			"userProfile": { "name": "B" }
		})))
		.unwrap_err();

		match err {
			CatalogError::DuplicateKey { key, first, second } => {
				assert_eq!(key, "userProfile.name");
				assert_eq!(first, "user-profile.name");
				assert_eq!(second, "userProfile.name");
			}
			other => panic!("expected DuplicateKey, got {other:?}"),
		}
	}

	#[test]
	fn test_flatten_detects_dotted_segment_collision() {
		let err = flatten(&tree(json!({
			"a.b": "flat",
			"a": { "b": "nested" }
		})))
		.unwrap_err();

		assert!(matches!(err, CatalogError::DuplicateKey { ref key, .. } if key == "a.b"));
	}

	#[test]
	fn test_flatten_empty_catalog() {
		let flat = flatten(&tree(json!({}))).unwrap();
		assert!(flat.is_empty());
	}
}
