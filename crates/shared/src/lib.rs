//! Shared configuration, errors, timed tokens and email dispatch for Paraíso.
//!
//! This crate provides the pieces every other crate leans on:
//! - Configuration management
//! - Application-wide error types
//! - Timed token generation and verification
//! - Contact email dispatch over SMTP

pub mod config;
pub mod email;
pub mod error;
pub mod timed_token;

pub use config::{AppConfig, DatabaseConfig, EmailConfig, ServerConfig, TokenConfig};
pub use email::{ContactEmail, EmailAttachment, EmailError, EmailService};
pub use error::{AppError, AppResult};
pub use timed_token::{TimedTokenService, TokenConfigError};
