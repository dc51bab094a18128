// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translator factory and namespaced wrapper.
//!
//! A [`Translator`] is bound to one immutable catalog snapshot for the
//! lifetime of a request. Lookups never fail the request: a missing key is
//! recovered inside the translator and surfaced only as returned text plus
//! a diagnostic.

use std::collections::BTreeSet;

use crate::catalog::FlatCatalog;
use crate::diagnostics::{DiagnosticSink, TracingDiagnostics};

static DEFAULT_DIAGNOSTICS: TracingDiagnostics = TracingDiagnostics;

/// Lookup failure policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	/// Missing keys are rendered visibly and warned about.
	Development,
	/// Missing keys never break rendering or leak detail to end users.
	Production,
}

/// Per-request translation settings.
///
/// Constructed once per request by the middleware and passed by value into
/// the translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationConfig {
	/// Current locale code.
	pub locale: String,
	/// Locale whose catalog filled missing target entries, if any.
	pub default_locale: Option<String>,
	/// Keys currently satisfied from the default locale.
	pub fallback_keys: BTreeSet<String>,
	/// Lookup failure policy.
	pub mode: Mode,
	/// In production, echo the bare key for missing entries instead of
	/// returning an empty string.
	pub show_keys_in_prod: bool,
}

impl TranslationConfig {
	#[must_use]
	pub fn new(locale: impl Into<String>, mode: Mode) -> Self {
		Self {
			locale: locale.into(),
			default_locale: None,
			fallback_keys: BTreeSet::new(),
			mode,
			show_keys_in_prod: false,
		}
	}

	#[must_use]
	pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
		self.default_locale = Some(locale.into());
		self
	}

	#[must_use]
	pub fn with_fallback_keys(mut self, keys: BTreeSet<String>) -> Self {
		self.fallback_keys = keys;
		self
	}

	#[must_use]
	pub fn with_show_keys_in_prod(mut self, show: bool) -> Self {
		self.show_keys_in_prod = show;
		self
	}
}

/// Decides whether the fallback marker applies to a resolved text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorRule {
	/// Mark every fallback-resolved text.
	Always,
	/// Only texts with at least this many whitespace-separated words.
	MinWords(usize),
	/// Caller-supplied predicate over (text, locale).
	Custom(fn(&str, &str) -> bool),
}

impl IndicatorRule {
	fn applies(&self, text: &str, locale: &str) -> bool {
		match self {
			Self::Always => true,
			Self::MinWords(min) => text.split_whitespace().count() >= *min,
			Self::Custom(predicate) => predicate(text, locale),
		}
	}
}

/// Marker appended to texts that were resolved from the default locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackIndicator {
	/// Appended verbatim to the translated text.
	pub marker: String,
	/// Apply the marker in development mode as well.
	pub apply_in_dev: bool,
	/// Predicate gating the marker.
	pub rule: IndicatorRule,
}

impl FallbackIndicator {
	#[must_use]
	pub fn new(marker: impl Into<String>) -> Self {
		Self {
			marker: marker.into(),
			apply_in_dev: false,
			rule: IndicatorRule::Always,
		}
	}

	#[must_use]
	pub fn with_rule(mut self, rule: IndicatorRule) -> Self {
		self.rule = rule;
		self
	}

	#[must_use]
	pub fn with_apply_in_dev(mut self, apply: bool) -> Self {
		self.apply_in_dev = apply;
		self
	}
}

/// A translator function: dotted key in, display text out.
pub trait Translate {
	/// Resolve a key to display text under the lookup policy.
	fn translate(&self, key: &str) -> String;

	/// Wrap this translator under a namespace prefix.
	///
	/// The returned translator prepends `prefix` and a dot to every key
	/// before delegating. Wrapping an already-namespaced translator
	/// composes prefixes left-to-right.
	fn namespaced(self, prefix: impl Into<String>) -> Namespaced<Self>
	where
		Self: Sized,
	{
		Namespaced::new(self, prefix)
	}
}

impl<F> Translate for F
where
	F: Fn(&str) -> String,
{
	fn translate(&self, key: &str) -> String {
		self(key)
	}
}

/// Translator wrapper that prepends a namespace to every key.
#[derive(Debug, Clone)]
pub struct Namespaced<T> {
	inner: T,
	prefix: String,
}

impl<T: Translate> Namespaced<T> {
	#[must_use]
	pub fn new(inner: T, prefix: impl Into<String>) -> Self {
		Self {
			inner,
			prefix: prefix.into(),
		}
	}
}

impl<T: Translate> Translate for Namespaced<T> {
	fn translate(&self, key: &str) -> String {
		self.inner.translate(&format!("{}.{key}", self.prefix))
	}
}

/// Server-side translator bound to one catalog snapshot.
///
/// Lookup policy:
/// - Key found: its text, with the fallback indicator appended when the
///   key was satisfied from the default locale and the indicator applies.
/// - Key missing in development: the key in a visible bracket marker,
///   plus one `missing_key` diagnostic.
/// - Key missing in production: the bare key when `show_keys_in_prod` is
///   set, otherwise an empty string with no diagnostic.
pub struct Translator<'a> {
	catalog: &'a FlatCatalog,
	config: TranslationConfig,
	indicator: Option<FallbackIndicator>,
	diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> Translator<'a> {
	#[must_use]
	pub fn new(catalog: &'a FlatCatalog, config: TranslationConfig) -> Self {
		Self {
			catalog,
			config,
			indicator: None,
			diagnostics: &DEFAULT_DIAGNOSTICS,
		}
	}

	#[must_use]
	pub fn with_indicator(mut self, indicator: FallbackIndicator) -> Self {
		self.indicator = Some(indicator);
		self
	}

	#[must_use]
	pub fn with_diagnostics(mut self, diagnostics: &'a dyn DiagnosticSink) -> Self {
		self.diagnostics = diagnostics;
		self
	}

	fn resolved(&self, key: &str, text: &str) -> String {
		if !self.config.fallback_keys.contains(key) {
			return text.to_string();
		}
		let Some(indicator) = &self.indicator else {
			return text.to_string();
		};
		if self.config.mode == Mode::Development && !indicator.apply_in_dev {
			return text.to_string();
		}
		if indicator.rule.applies(text, &self.config.locale) {
			format!("{text}{}", indicator.marker)
		} else {
			text.to_string()
		}
	}

	fn missing(&self, key: &str) -> String {
		match self.config.mode {
			Mode::Development => {
				self.diagnostics.missing_key(key, &self.config.locale);
				format!("[{key}]")
			}
			Mode::Production if self.config.show_keys_in_prod => key.to_string(),
			Mode::Production => String::new(),
		}
	}
}

impl Translate for Translator<'_> {
	fn translate(&self, key: &str) -> String {
		match self.catalog.get(key) {
			Some(text) => self.resolved(key, text),
			None => self.missing(key),
		}
	}
}
