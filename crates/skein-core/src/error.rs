// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for catalog construction.

use thiserror::Error;

/// Errors that can occur while building a flat catalog.
///
/// These are fatal to catalog construction and must abort the calling
/// load/reload operation. A missing translation key at request time is
/// not an error; see the lookup policy on [`crate::Translator`].
#[derive(Debug, Error)]
pub enum CatalogError {
	/// A leaf that is not a string was encountered
	#[error("malformed catalog entry at '{path}': expected a string, found {found}")]
	MalformedEntry {
		/// Dotted path of the offending entry
		path: String,
		/// JSON type that was found instead
		found: String,
	},

	/// Two source paths flatten to the same dotted key
	#[error("duplicate catalog key '{key}': '{first}' and '{second}' flatten to the same key")]
	DuplicateKey {
		/// The colliding flattened key
		key: String,
		/// Source path that produced the key first
		first: String,
		/// Source path that collided with it
		second: String,
	},
}
