//! Centralized error types for the sprite viewer.
//!
//! This module defines all error types used throughout the application,
//! providing a consistent error handling approach.

use std::io;

/// Main error type for the viewer.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum ViewError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Errors raised while resolving or reading sheet assets.
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Asset not found: {0}")]
    NotFound(String),
}

/// Errors related to texture operations.
#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture: {0}")]
    LoadFailed(String),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

/// Result type for viewer operations.
pub type ViewResult<T> = Result<T, ViewError>;
