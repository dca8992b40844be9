// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

use crate::error::CatalogError;

/// One element of a parsed search path specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathToken {
	/// A literal namespace name, resolved via catalog lookup.
	Identifier(String),
	/// The unquoted `$user` placeholder.
	CurrentRole,
	/// The unquoted `pg_temp` placeholder.
	Temp,
}

/// Result of parsing a search path specification string. Token order is
/// preserved verbatim; no namespace lookups happen at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSearchPath {
	pub tokens: Vec<PathToken>,
	/// `pg_temp` appeared as the first token; if the temp namespace is not
	/// set up when the path is resolved, creation defers to first use.
	pub temp_creation_pending: bool,
}

fn invalid(spec: &str, reason: impl Into<String>) -> CatalogError {
	CatalogError::InvalidSearchPath {
		spec: spec.to_string(),
		reason: reason.into(),
	}
}

/// Split a raw search path specification into ordered tokens.
///
/// Elements are comma-separated. A double-quoted element is taken verbatim
/// (it may contain commas; `""` is an escaped quote). An unquoted element is
/// down-cased and must be a legal bare identifier. `$user` and `pg_temp` are
/// recognized only when unquoted.
pub fn parse_search_path(spec: &str) -> crate::Result<ParsedSearchPath> {
	let mut tokens = Vec::new();

	if spec.trim().is_empty() {
		return Ok(ParsedSearchPath {
			tokens,
			temp_creation_pending: false,
		});
	}

	let mut chars = spec.chars().peekable();
	loop {
		while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
			chars.next();
		}

		let token = match chars.peek() {
			Some('"') => {
				chars.next();
				let mut value = String::new();
				loop {
					match chars.next() {
						Some('"') => {
							// "" is an escaped quote; a lone
							// quote ends the element
							if chars.peek() == Some(&'"') {
								chars.next();
								value.push('"');
							} else {
								break;
							}
						}
						Some(ch) => value.push(ch),
						None => {
							return Err(invalid(spec, "unterminated quoted identifier")
								.into());
						}
					}
				}
				if value.is_empty() {
					return Err(invalid(spec, "empty element").into());
				}
				while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
					chars.next();
				}
				match chars.peek() {
					None | Some(',') => {}
					Some(ch) => {
						return Err(invalid(
							spec,
							format!("unexpected character {:?} after quoted identifier", ch),
						)
						.into());
					}
				}
				PathToken::Identifier(value)
			}
			Some(_) => {
				let mut value = String::new();
				while let Some(&ch) = chars.peek() {
					if ch == ',' {
						break;
					}
					value.push(ch);
					chars.next();
				}
				let value = value.trim().to_ascii_lowercase();
				if value.is_empty() {
					return Err(invalid(spec, "empty element").into());
				}
				match value.as_str() {
					"$user" => PathToken::CurrentRole,
					"pg_temp" => PathToken::Temp,
					_ => {
						validate_bare_identifier(spec, &value)?;
						PathToken::Identifier(value)
					}
				}
			}
			None => return Err(invalid(spec, "empty element").into()),
		};

		tokens.push(token);

		match chars.next() {
			Some(',') => continue,
			None => break,
			// A non-separator here is unreachable: both arms above
			// consume up to a comma or end of input.
			Some(ch) => {
				return Err(invalid(spec, format!("unexpected character {:?}", ch)).into());
			}
		}
	}

	let temp_creation_pending = tokens.first() == Some(&PathToken::Temp);

	Ok(ParsedSearchPath {
		tokens,
		temp_creation_pending,
	})
}

fn validate_bare_identifier(spec: &str, value: &str) -> crate::Result<()> {
	let mut bytes = value.bytes();
	match bytes.next() {
		Some(b'a'..=b'z' | b'_') => {}
		_ => {
			return Err(invalid(spec, format!("{} is not a valid identifier", value)).into());
		}
	}
	for ch in bytes {
		match ch {
			b'a'..=b'z' | b'0'..=b'9' | b'_' | b'$' => {}
			_ => {
				return Err(invalid(spec, format!("{} is not a valid identifier", value)).into());
			}
		}
	}
	Ok(())
}
