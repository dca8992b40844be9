// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

//! Identifier quoting for rendering names back to text.

use std::borrow::Cow;

use crate::keywords::{KeywordCategory, keyword_category};

/// One element of a qualified name: either an identifier or the `*`
/// wildcard of a column reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamePart {
	Identifier(String),
	Star,
}

/// Quote an identifier only if needed.
///
/// Quoting is skipped when the identifier starts with a lower-case ASCII
/// letter or underscore, contains only lower-case ASCII letters, digits, and
/// underscores, and is not a reserved keyword. Otherwise the identifier is
/// wrapped in double quotes with embedded double quotes doubled.
pub fn quote_identifier(ident: &str) -> Cow<'_, str> {
	let mut safe = matches!(ident.as_bytes().first(), Some(b'a'..=b'z' | b'_'));

	for ch in ident.bytes() {
		match ch {
			b'a'..=b'z' | b'0'..=b'9' | b'_' => {}
			_ => safe = false,
		}
	}

	if safe {
		// The identifier is known to be all-lower-case here, which is
		// what the keyword table expects.
		if let Some(KeywordCategory::Reserved) = keyword_category(ident) {
			safe = false;
		}
	}

	if safe {
		return Cow::Borrowed(ident);
	}

	let mut quoted = String::with_capacity(ident.len() + 2);
	quoted.push('"');
	for ch in ident.chars() {
		if ch == '"' {
			quoted.push('"');
		}
		quoted.push(ch);
	}
	quoted.push('"');
	Cow::Owned(quoted)
}

/// Quote a possibly-qualified identifier, quoting each component as needed.
pub fn quote_qualified_identifier(qualifier: Option<&str>, ident: &str) -> String {
	match qualifier {
		Some(qualifier) => format!("{}.{}", quote_identifier(qualifier), quote_identifier(ident)),
		None => quote_identifier(ident).into_owned(),
	}
}

/// Join name parts with `.` without quoting; wildcard parts render as `*`.
/// Intended for diagnostic messages, where legibility beats re-parseability.
pub fn name_list_to_string(parts: &[NamePart]) -> String {
	let mut out = String::new();
	for (index, part) in parts.iter().enumerate() {
		if index > 0 {
			out.push('.');
		}
		match part {
			NamePart::Identifier(name) => out.push_str(name),
			NamePart::Star => out.push('*'),
		}
	}
	out
}

/// Like [`name_list_to_string`] but identifier parts are quoted where
/// necessary, so the result can be re-parsed.
pub fn name_list_to_quoted_string(parts: &[NamePart]) -> String {
	let mut out = String::new();
	for (index, part) in parts.iter().enumerate() {
		if index > 0 {
			out.push('.');
		}
		match part {
			NamePart::Identifier(name) => out.push_str(&quote_identifier(name)),
			NamePart::Star => out.push('*'),
		}
	}
	out
}
