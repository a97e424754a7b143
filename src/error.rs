// Copyright (c) Thuchi Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failure taxonomy for the core. Storage errors wrap the underlying
/// rusqlite error unchanged; nothing is retried or masked here.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed request rejected before any storage access, such as a
    /// month outside 1..=12 or a zero-length trend.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A record failed its invariants (blank name, negative amount).
    /// Nothing is persisted when this fires.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Lookup or update referenced an id with no row behind it.
    #[error("no record with id {0}")]
    NotFound(i64),

    /// The record store could not complete a query.
    #[error("storage unavailable: {0}")]
    Storage(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
