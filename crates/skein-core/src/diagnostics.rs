// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Diagnostic reporting seam.
//!
//! Recoverable request-time conditions are reported here instead of being
//! returned as errors: a missing translation key and a route-pattern
//! overlap never fail a request. Diagnostics are visibility only and must
//! not change any result.

/// Where the engine reports recoverable, non-fatal conditions.
pub trait DiagnosticSink {
	/// A translation key was not found in the catalog.
	fn missing_key(&self, key: &str, locale: &str);

	/// More than one route pattern matched a request path.
	fn route_overlap(&self, path: &str, patterns: &[String]);
}

/// Default sink reporting through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
	fn missing_key(&self, key: &str, locale: &str) {
		tracing::warn!(key, locale, "missing translation key");
	}

	fn route_overlap(&self, path: &str, patterns: &[String]) {
		tracing::warn!(path, ?patterns, "multiple route patterns matched path");
	}
}
