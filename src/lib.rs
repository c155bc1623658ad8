//! Vocarun - a vocabulary trainer screen for the terminal.
//!
//! This crate renders a scrollable vocabulary list with per-word memorize
//! toggles and a slide-out wordbook sidebar, backed by a thin view-model
//! service over an injected vocabulary source.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the word-list service and its events.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and vocabulary sources.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "vocarun";
