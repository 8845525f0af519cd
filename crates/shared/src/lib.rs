//! Shared configuration and errors for Siklus.
//!
//! This crate provides the pieces every other crate agrees on:
//! - Application-wide error types
//! - Configuration management (account keyword sets, closing accounts, logging)

pub mod config;
pub mod error;

pub use config::{AppConfig, ClassificationConfig, ClosingConfig, LoggingConfig};
pub use error::{AppError, AppResult};
