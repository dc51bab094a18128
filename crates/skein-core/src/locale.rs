// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale resolution logic.

/// Resolve the effective locale for a request.
///
/// Resolution order (highest to lowest priority):
/// 1. The requested locale, when a catalog for it is available
/// 2. The configured default locale
/// 3. The first available locale
///
/// `available` is the set of locales the host actually loaded catalogs
/// for; there is no process-wide supported-locale list.
#[must_use]
pub fn resolve_locale<'a>(
	requested: Option<&'a str>,
	default_locale: &'a str,
	available: &'a [String],
) -> &'a str {
	if let Some(locale) = requested {
		if available.iter().any(|candidate| candidate == locale) {
			return locale;
		}
	}

	if available.is_empty() || available.iter().any(|candidate| candidate == default_locale) {
		return default_locale;
	}

	&available[0]
}
