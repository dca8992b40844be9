// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;

pub use error::{Diagnostic, Error, IntoDiagnostic};

pub mod diagnostic {
	pub use crate::error::diagnostic::catalog;
}

pub type Result<T> = std::result::Result<T, Error>;
