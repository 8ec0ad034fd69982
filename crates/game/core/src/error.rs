//! Common error infrastructure.
//!
//! Concrete error enums live next to the operations that produce them
//! ([`crate::tile::TileError`] here, content errors in `dungeon-content`).
//! This module provides the classification every one of them shares.
//!
//! # Categories
//!
//! - **Argument**: a required argument was absent; the caller must fix the call
//! - **InvariantViolation**: the operation would break a structural rule
//!   (second creature on a tile, coordinates outside the grid)
//! - **ContentNotFound**: a requested content document does not exist
//! - **ContentMalformed**: a document, node or entry has the wrong shape, or
//!   an existing document could not be read as text
//! - **PathResolution**: a class path matched nothing
//!
//! The first two fail the operation immediately. The content categories are
//! recovered at the smallest enclosing unit by the loader and reported as
//! diagnostics.

/// Classification of an error within the dungeon taxonomy.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    Argument,
    InvariantViolation,
    ContentNotFound,
    ContentMalformed,
    PathResolution,
}

impl ErrorCategory {
    /// Returns true if errors in this category abort the operation outright
    /// instead of being skipped and reported.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Argument | Self::InvariantViolation)
    }

    /// Returns true for categories produced while loading content.
    pub const fn is_content(&self) -> bool {
        matches!(
            self,
            Self::ContentNotFound | Self::ContentMalformed | Self::PathResolution
        )
    }
}

/// Common trait for all dungeon errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Give every variant its own category, never coerce one into another
/// - Keep `error_code` stable; tooling matches on it
pub trait DungeonError: std::error::Error {
    /// Returns the taxonomy category of this error.
    fn category(&self) -> ErrorCategory;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}
