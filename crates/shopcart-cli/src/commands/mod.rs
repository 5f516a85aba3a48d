//! CLI subcommands
//!
//! Each command exposes `execute(&self, ctx, format)`; `main` dispatches to it.

use std::fmt::Display;

use anyhow::anyhow;
use shopcart_api::ApiError;

pub mod cart;
pub mod categories;
pub mod completions;
pub mod config;
pub mod products;

/// Converts a failed single-resource lookup into a command error
///
/// A 404 becomes "<Kind> <id> not found"; anything else keeps the API error
/// as the source.
pub(crate) fn lookup_error(kind: &str, id: impl Display, err: ApiError) -> anyhow::Error {
    if err.is_not_found() {
        anyhow!("{kind} {id} not found")
    } else {
        anyhow::Error::new(err).context(format!("Failed to fetch {} {id}", kind.to_lowercase()))
    }
}
