// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client-load configuration.

use crate::error::RouteConfigError;
use crate::routes::RoutePattern;

/// What to inject when no route pattern matches the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InjectionFallback {
	/// Inject nothing.
	#[default]
	None,
	/// Inject only the `always` namespaces.
	AlwaysOnly,
	/// Inject the entire catalog.
	All,
}

/// Which translation namespaces the client receives, per route.
///
/// Owned by the call site for the lifetime of the serving process and
/// treated as immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientLoadConfig {
	/// Namespaces loaded on every matched route.
	pub always: Vec<String>,
	/// Route patterns, in declaration order.
	pub routes: Vec<RoutePattern>,
	/// Behavior when no route matches.
	pub fallback: InjectionFallback,
	/// Strip one trailing slash from paths and pattern literals before
	/// matching (`/` itself is never stripped).
	pub ignore_trailing_slash: bool,
	/// Emit a diagnostic when more than one pattern matches a path.
	pub warn_on_overlap: bool,
}

impl ClientLoadConfig {
	#[must_use]
	pub fn new() -> Self {
		Self {
			always: Vec::new(),
			routes: Vec::new(),
			fallback: InjectionFallback::None,
			ignore_trailing_slash: false,
			warn_on_overlap: false,
		}
	}

	#[must_use]
	pub fn with_always(mut self, namespaces: Vec<String>) -> Self {
		self.always = namespaces;
		self
	}

	#[must_use]
	pub fn with_route(mut self, route: RoutePattern) -> Self {
		self.routes.push(route);
		self
	}

	#[must_use]
	pub fn with_fallback(mut self, fallback: InjectionFallback) -> Self {
		self.fallback = fallback;
		self
	}

	#[must_use]
	pub fn with_ignore_trailing_slash(mut self, ignore: bool) -> Self {
		self.ignore_trailing_slash = ignore;
		self
	}

	#[must_use]
	pub fn with_warn_on_overlap(mut self, warn: bool) -> Self {
		self.warn_on_overlap = warn;
		self
	}

	/// Re-validate every route pattern in the config.
	///
	/// [`RoutePattern::new`] already rejects malformed patterns; this is
	/// the whole-config check hosts run once at startup so a bad pattern
	/// aborts configuration loading rather than surfacing at request time.
	///
	/// # Errors
	///
	/// Returns the first [`RouteConfigError::InvalidPattern`] found.
	pub fn validate(&self) -> Result<(), RouteConfigError> {
		for route in &self.routes {
			RoutePattern::validate_pattern(route.pattern())?;
		}
		Ok(())
	}
}

impl Default for ClientLoadConfig {
	fn default() -> Self {
		Self::new()
	}
}
