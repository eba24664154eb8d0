// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 eomp-ets contributors

//! Utility modules
//!
//! Terminal output helpers and remote retrieval shared by the CLI and the
//! process surface.

pub mod colors;
pub mod http;
pub mod spinner;

pub use colors::*;
pub use spinner::*;
