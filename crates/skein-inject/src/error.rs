// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for client-load configuration.

use thiserror::Error;

/// Errors in a client-load configuration.
///
/// These are fatal at configuration-validation time, never at request
/// time. A route-pattern overlap is a diagnostic, not an error.
#[derive(Debug, Error)]
pub enum RouteConfigError {
	/// Wildcard marker somewhere other than the final character
	#[error("invalid route pattern '{pattern}': wildcard must be the final character")]
	InvalidPattern {
		/// The offending pattern string
		pattern: String,
	},
}
