// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Route-scoped translation namespace selection for Skein.
//!
//! Given a request path, a flattened catalog from `skein-core`, and a
//! [`ClientLoadConfig`], this crate decides the minimal sub-catalog the
//! client needs: wildcard route patterns select namespaces, multiple
//! matches union and deduplicate, and a fallback mode governs unmatched
//! paths. The response rewriter that embeds the result into markup is an
//! external collaborator; its only contract with this crate is a
//! JSON-serializable [`ClientPayload`] or a "do not inject" `None`.
//!
//! # Example
//!
//! ```
//! use skein_core::TracingDiagnostics;
//! use skein_inject::{
//! 	select_injection, ClientLoadConfig, InjectionFallback, NamespaceSpec, RoutePattern,
//! };
//!
//! let catalog = [
//! 	("common.save".to_string(), "Save".to_string()),
//! 	("features.admin.title".to_string(), "Admin".to_string()),
//! ]
//! .into_iter()
//! .collect();
//!
//! let config = ClientLoadConfig::new()
//! 	.with_always(vec!["common".to_string()])
//! 	.with_route(
//! 		RoutePattern::new(
//! 			"/admin/*",
//! 			NamespaceSpec::Named(vec!["features.admin".to_string()]),
//! 		)
//! 		.unwrap(),
//! 	)
//! 	.with_fallback(InjectionFallback::AlwaysOnly);
//!
//! let selected = select_injection("/admin/42", &catalog, &config, &TracingDiagnostics).unwrap();
//! assert!(selected.contains_key("common.save"));
//! assert!(selected.contains_key("features.admin.title"));
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod select;

pub use config::{ClientLoadConfig, InjectionFallback};
pub use error::RouteConfigError;
pub use extract::{extract_namespaces, NamespaceSelection};
pub use routes::{match_routes, NamespaceSpec, RouteMatch, RoutePattern, WILDCARD};
pub use select::{select_injection, ClientPayload};
