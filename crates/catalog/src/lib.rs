// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

//! Name resolution for the nymdb catalog.
//!
//! This crate implements the search-path layer: resolving an ordered list of
//! namespaces against a role's permissions (with caching and generation-based
//! invalidation), matching possibly-overloaded function and operator names to
//! candidate declarations, answering visibility queries, and quoting
//! identifiers for rendering. Physical catalog storage stays behind the
//! [`nymdb_core::interface::CatalogQuery`] trait.

pub mod candidate;
mod error;
pub mod keywords;
pub mod quote;
pub mod search_path;
mod session;
pub mod test_utils;
pub mod visible;

pub use error::CatalogError;
pub use session::{CatalogSession, DEFAULT_SEARCH_PATH};

pub type Result<T> = nymdb_type::Result<T>;
