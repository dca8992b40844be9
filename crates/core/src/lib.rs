// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2026 NymDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod interface;

pub type Result<T> = nymdb_type::Result<T>;
