// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

//! Fixed SQL keyword table used by identifier quoting.
//!
//! Only reserved keywords force quoting; unreserved keywords are legal as
//! bare identifiers in enough positions that quoting them would be noise.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordCategory {
	Unreserved,
	Reserved,
}

use KeywordCategory::{Reserved, Unreserved};

/// Sorted by keyword; looked up with binary search. Keep it that way.
static KEYWORDS: &[(&str, KeywordCategory)] = &[
	("abort", Unreserved),
	("add", Unreserved),
	("all", Reserved),
	("alter", Unreserved),
	("analyse", Reserved),
	("analyze", Reserved),
	("and", Reserved),
	("any", Reserved),
	("array", Reserved),
	("as", Reserved),
	("asc", Reserved),
	("asymmetric", Reserved),
	("begin", Unreserved),
	("both", Reserved),
	("by", Unreserved),
	("cascade", Unreserved),
	("case", Reserved),
	("cast", Reserved),
	("check", Reserved),
	("collate", Reserved),
	("column", Reserved),
	("comment", Unreserved),
	("commit", Unreserved),
	("constraint", Reserved),
	("copy", Unreserved),
	("create", Reserved),
	("current_catalog", Reserved),
	("current_date", Reserved),
	("current_role", Reserved),
	("current_time", Reserved),
	("current_timestamp", Reserved),
	("current_user", Reserved),
	("cursor", Unreserved),
	("data", Unreserved),
	("database", Unreserved),
	("default", Reserved),
	("deferrable", Reserved),
	("delete", Unreserved),
	("desc", Reserved),
	("distinct", Reserved),
	("do", Reserved),
	("drop", Unreserved),
	("else", Reserved),
	("end", Reserved),
	("except", Reserved),
	("execute", Unreserved),
	("explain", Unreserved),
	("false", Reserved),
	("fetch", Reserved),
	("for", Reserved),
	("foreign", Reserved),
	("from", Reserved),
	("grant", Reserved),
	("group", Reserved),
	("having", Reserved),
	("in", Reserved),
	("index", Unreserved),
	("initially", Reserved),
	("insert", Unreserved),
	("intersect", Reserved),
	("into", Reserved),
	("lateral", Reserved),
	("leading", Reserved),
	("limit", Reserved),
	("localtime", Reserved),
	("localtimestamp", Reserved),
	("move", Unreserved),
	("not", Reserved),
	("null", Reserved),
	("offset", Reserved),
	("on", Reserved),
	("only", Reserved),
	("or", Reserved),
	("order", Reserved),
	("owner", Unreserved),
	("partition", Unreserved),
	("placing", Reserved),
	("prepare", Unreserved),
	("primary", Reserved),
	("references", Reserved),
	("release", Unreserved),
	("rename", Unreserved),
	("reset", Unreserved),
	("returning", Reserved),
	("rollback", Unreserved),
	("savepoint", Unreserved),
	("schema", Unreserved),
	("select", Reserved),
	("session_user", Reserved),
	("set", Unreserved),
	("show", Unreserved),
	("some", Reserved),
	("start", Unreserved),
	("symmetric", Reserved),
	("system_user", Reserved),
	("table", Reserved),
	("temp", Unreserved),
	("temporary", Unreserved),
	("then", Reserved),
	("to", Reserved),
	("trailing", Reserved),
	("true", Reserved),
	("truncate", Unreserved),
	("union", Reserved),
	("unique", Reserved),
	("update", Unreserved),
	("user", Reserved),
	("using", Reserved),
	("vacuum", Unreserved),
	("variadic", Reserved),
	("view", Unreserved),
	("when", Reserved),
	("where", Reserved),
	("window", Reserved),
	("with", Reserved),
];

/// Classify a word, or `None` if it is not a keyword. The input must already
/// be lower case; callers in this crate only look up identifiers that passed
/// the all-lower-case check.
pub fn keyword_category(word: &str) -> Option<KeywordCategory> {
	KEYWORDS.binary_search_by_key(&word, |(keyword, _)| *keyword).ok().map(|index| KEYWORDS[index].1)
}
