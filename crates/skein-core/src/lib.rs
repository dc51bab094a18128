// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation resolution core for Skein.
//!
//! This crate flattens per-locale catalog trees into dotted-key lookup
//! tables and resolves keys to display text with locale fallback and
//! dev/prod failure policies. It is the pure half of the i18n system:
//! every operation is a synchronous function over immutable inputs, with
//! no ambient state. Catalog loading, HTTP middleware, and response
//! rewriting are external collaborators; route-scoped selection of what
//! ships to the client lives in `skein-inject`.
//!
//! # String Naming Convention
//!
//! All translatable strings use a hierarchical dot-notation key format,
//! e.g. `common.actions.save`. Hyphenated file and directory names are
//! normalized to camel-case key segments at flatten time
//! (`user-profile` → `userProfile`).
//!
//! # Example
//!
//! ```
//! use skein_core::{
//! 	flatten, overlay, Mode, NestedCatalog, Translate, TranslationConfig, Translator,
//! };
//!
//! let target = flatten(
//! 	&NestedCatalog::from_value(&serde_json::json!({
//! 		"common": { "save": "Guardar" }
//! 	}))
//! 	.unwrap(),
//! )
//! .unwrap();
//! let default_catalog = flatten(
//! 	&NestedCatalog::from_value(&serde_json::json!({
//! 		"common": { "save": "Save", "cancel": "Cancel" }
//! 	}))
//! 	.unwrap(),
//! )
//! .unwrap();
//!
//! // Merge the target locale over the default locale.
//! let merged = overlay(&target, &default_catalog);
//! assert!(merged.fallback_keys.contains("common.cancel"));
//!
//! // Resolve keys for one request.
//! let config = TranslationConfig::new("es", Mode::Production)
//! 	.with_default_locale("en")
//! 	.with_fallback_keys(merged.fallback_keys.clone());
//! let t = Translator::new(&merged.catalog, config);
//! assert_eq!(t.translate("common.save"), "Guardar");
//! assert_eq!(t.translate("common.cancel"), "Cancel");
//! ```

pub mod catalog;
pub mod diagnostics;
pub mod error;
pub mod fallback;
pub mod locale;
pub mod translator;

pub use catalog::{flatten, FlatCatalog, NestedCatalog};
pub use diagnostics::{DiagnosticSink, TracingDiagnostics};
pub use error::CatalogError;
pub use fallback::{overlay, MergedCatalog};
pub use locale::resolve_locale;
pub use translator::{
	FallbackIndicator, IndicatorRule, Mode, Namespaced, Translate, TranslationConfig, Translator,
};
