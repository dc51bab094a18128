// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Route patterns and request-path matching.

use skein_core::DiagnosticSink;

use crate::config::ClientLoadConfig;
use crate::error::RouteConfigError;

/// Greedy match-all marker for route patterns.
pub const WILDCARD: char = '*';

/// Namespaces a route exposes to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceSpec {
	/// Expose the named namespaces.
	Named(Vec<String>),
	/// The route opts out of client injection entirely.
	Skip,
}

/// A route pattern paired with the namespaces it loads.
///
/// The pattern is either an exact path (`/admin`) or a prefix ending in
/// the wildcard marker (`/admin/*`). Only [`RoutePattern::new`] can
/// construct one, so every held pattern is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
	pattern: String,
	namespaces: NamespaceSpec,
}

impl RoutePattern {
	/// Create a validated route pattern.
	///
	/// # Errors
	///
	/// Returns [`RouteConfigError::InvalidPattern`] when the wildcard
	/// marker appears anywhere other than the final character.
	pub fn new(
		pattern: impl Into<String>,
		namespaces: NamespaceSpec,
	) -> Result<Self, RouteConfigError> {
		let pattern = pattern.into();
		Self::validate_pattern(&pattern)?;
		Ok(Self {
			pattern,
			namespaces,
		})
	}

	/// Validate the pattern string shape.
	///
	/// # Errors
	///
	/// Returns [`RouteConfigError::InvalidPattern`] when a wildcard marker
	/// is not the final character of the pattern.
	pub fn validate_pattern(pattern: &str) -> Result<(), RouteConfigError> {
		if let Some(index) = pattern.find(WILDCARD) {
			if index != pattern.len() - WILDCARD.len_utf8() {
				return Err(RouteConfigError::InvalidPattern {
					pattern: pattern.to_string(),
				});
			}
		}
		Ok(())
	}

	#[must_use]
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	#[must_use]
	pub fn namespaces(&self) -> &NamespaceSpec {
		&self.namespaces
	}

	/// Whether this pattern matches a request path.
	///
	/// Exact patterns compare for equality. Wildcard patterns match any
	/// path starting with the literal prefix, byte for byte, with the
	/// remainder unconstrained: the wildcard is greedy and no path-segment
	/// boundary is enforced before it, so `/user*` matches `/users/5`.
	/// Authors wanting segment-exact matching include the trailing slash
	/// themselves (`/user/*`). `/*` matches every path including `/`.
	#[must_use]
	pub fn matches(&self, path: &str, ignore_trailing_slash: bool) -> bool {
		match self.pattern.strip_suffix(WILDCARD) {
			Some(prefix) => normalize(path, ignore_trailing_slash)
				.starts_with(normalize(prefix, ignore_trailing_slash)),
			None => {
				normalize(path, ignore_trailing_slash)
					== normalize(&self.pattern, ignore_trailing_slash)
			}
		}
	}
}

/// Strip one trailing slash, never reducing `/` to an empty string.
fn normalize(path: &str, ignore_trailing_slash: bool) -> &str {
	if !ignore_trailing_slash {
		return path;
	}
	match path.strip_suffix('/') {
		Some(stripped) if !stripped.is_empty() => stripped,
		_ => path,
	}
}

/// Result of matching a request path against configured routes.
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
	/// Matching patterns, in declaration order.
	pub patterns: Vec<&'a RoutePattern>,
	/// More than one pattern matched.
	pub overlap: bool,
}

/// Match a request path against the configured routes, in declaration
/// order.
///
/// When more than one pattern matches and the config enables
/// `warn_on_overlap`, one `route_overlap` diagnostic is emitted with the
/// pattern list and the path. The diagnostic never changes the result;
/// the caller always receives every matched pattern.
#[must_use]
pub fn match_routes<'a>(
	path: &str,
	config: &'a ClientLoadConfig,
	diagnostics: &dyn DiagnosticSink,
) -> RouteMatch<'a> {
	let patterns: Vec<&RoutePattern> = config
		.routes
		.iter()
		.filter(|route| route.matches(path, config.ignore_trailing_slash))
		.collect();

	let overlap = patterns.len() > 1;
	if overlap && config.warn_on_overlap {
		let matched: Vec<String> = patterns
			.iter()
			.map(|route| route.pattern().to_string())
			.collect();
		diagnostics.route_overlap(path, &matched);
	}

	RouteMatch { patterns, overlap }
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;
	use crate::config::ClientLoadConfig;

	struct CountingSink {
		overlaps: RefCell<Vec<(String, Vec<String>)>>,
	}

	impl CountingSink {
		fn new() -> Self {
			Self {
				overlaps: RefCell::new(Vec::new()),
			}
		}
	}

	impl DiagnosticSink for CountingSink {
		fn missing_key(&self, _key: &str, _locale: &str) {}

		fn route_overlap(&self, path: &str, patterns: &[String]) {
			self.overlaps
				.borrow_mut()
				.push((path.to_string(), patterns.to_vec()));
		}
	}

	fn named(pattern: &str, namespaces: &[&str]) -> RoutePattern {
		RoutePattern::new(
			pattern,
			NamespaceSpec::Named(namespaces.iter().map(|ns| ns.to_string()).collect()),
		)
		.unwrap()
	}

	#[test]
	fn test_wildcard_must_be_final() {
		assert!(RoutePattern::validate_pattern("/admin/*").is_ok());
		assert!(RoutePattern::validate_pattern("*").is_ok());
		assert!(RoutePattern::validate_pattern("/admin").is_ok());

		assert!(matches!(
			RoutePattern::validate_pattern("/a*b"),
			Err(RouteConfigError::InvalidPattern { .. })
		));
		assert!(RoutePattern::validate_pattern("/a**").is_err());
		assert!(RoutePattern::validate_pattern("*/admin").is_err());
	}

	#[test]
	fn test_wildcard_matches_any_remainder() {
		let route = named("/indicators/*", &[]);
		assert!(route.matches("/indicators/123", false));
		assert!(route.matches("/indicators/123/edit", false));
		assert!(route.matches("/indicators/a/b/c/d", false));
		assert!(route.matches("/indicators/", false));
		assert!(!route.matches("/matrix/indicators/123", false));
	}

	#[test]
	fn test_wildcard_requires_prefix() {
		let route = named("/users/*", &[]);
		assert!(!route.matches("/admin/users", false));
	}

	#[test]
	fn test_wildcard_has_no_segment_boundary() {
		let route = named("/user*", &[]);
		assert!(route.matches("/users/5", false));
		assert!(route.matches("/user", false));
	}

	#[test]
	fn test_exact_root_matches_only_root() {
		let route = named("/", &[]);
		assert!(route.matches("/", false));
		assert!(!route.matches("/home", false));
	}

	#[test]
	fn test_root_wildcard_matches_everything() {
		let route = named("/*", &[]);
		assert!(route.matches("/", false));
		assert!(route.matches("/anything", false));
		assert!(route.matches("/a/b/c", false));
	}

	#[test]
	fn test_trailing_slash_normalization() {
		let route = named("/indicators", &[]);
		assert!(route.matches("/indicators/", true));
		assert!(route.matches("/indicators", true));
		assert!(!route.matches("/indicators/", false));

		// Only one trailing slash is stripped.
		assert!(!route.matches("/indicators//", true));
	}

	#[test]
	fn test_root_is_never_stripped_to_empty() {
		let route = named("/", &[]);
		assert!(route.matches("/", true));
		assert!(!route.matches("", true));
	}

	#[test]
	fn test_pattern_literal_portion_is_normalized_too() {
		let route = named("/indicators/", &[]);
		assert!(route.matches("/indicators", true));
	}

	#[test]
	fn test_match_routes_preserves_declaration_order() {
		let config = ClientLoadConfig::new()
			.with_route(named("/z/*", &["z"]))
			.with_route(named("/*", &["all"]))
			.with_route(named("/z/deep/*", &["deep"]));
		let sink = CountingSink::new();

		let matched = match_routes("/z/deep/1", &config, &sink);

		let patterns: Vec<&str> = matched.patterns.iter().map(|r| r.pattern()).collect();
		assert_eq!(patterns, vec!["/z/*", "/*", "/z/deep/*"]);
		assert!(matched.overlap);
	}

	#[test]
	fn test_overlap_diagnostic_emitted_once_when_enabled() {
		let config = ClientLoadConfig::new()
			.with_route(named("/a/*", &[]))
			.with_route(named("/*", &[]))
			.with_warn_on_overlap(true);
		let sink = CountingSink::new();

		let matched = match_routes("/a/1", &config, &sink);

		assert!(matched.overlap);
		let overlaps = sink.overlaps.borrow();
		assert_eq!(overlaps.len(), 1);
		assert_eq!(overlaps[0].0, "/a/1");
		assert_eq!(overlaps[0].1, vec!["/a/*".to_string(), "/*".to_string()]);
	}

	#[test]
	fn test_overlap_diagnostic_suppressed_when_disabled() {
		let config = ClientLoadConfig::new()
			.with_route(named("/a/*", &[]))
			.with_route(named("/*", &[]));
		let sink = CountingSink::new();

		let matched = match_routes("/a/1", &config, &sink);

		assert!(matched.overlap);
		assert!(sink.overlaps.borrow().is_empty());
	}

	#[test]
	fn test_single_match_is_not_overlap() {
		let config = ClientLoadConfig::new()
			.with_route(named("/a/*", &[]))
			.with_warn_on_overlap(true);
		let sink = CountingSink::new();

		let matched = match_routes("/a/1", &config, &sink);

		assert_eq!(matched.patterns.len(), 1);
		assert!(!matched.overlap);
		assert!(sink.overlaps.borrow().is_empty());
	}
}
