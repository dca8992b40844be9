// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

use std::fmt::{Display, Formatter};

pub mod diagnostic;

pub use diagnostic::{Diagnostic, IntoDiagnostic};

/// The error type carried by every fallible operation in nymdb.
///
/// Wraps a [`Diagnostic`] so that callers anywhere in the stack can render
/// the same structured payload (code, message, help, notes) regardless of
/// which crate raised it.
#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Error {
	pub fn diagnostic(&self) -> &Diagnostic {
		&self.0
	}

	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}] {}", self.0.code, self.0.message)
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Self(diagnostic)
	}
}

/// Build an [`Error`] from anything implementing [`IntoDiagnostic`].
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error($crate::IntoDiagnostic::into_diagnostic($diagnostic))
	};
}

/// Return early with an [`Error`] built from an [`IntoDiagnostic`] value.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error!($diagnostic))
	};
}
