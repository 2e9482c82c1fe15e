//! Core domain logic for Paraíso.
//!
//! This crate contains pure domain rules with ZERO web or database
//! dependencies.
//!
//! # Modules
//!
//! - `attachment` - Contact-form attachment validation
//! - `contact` - Contact form field rules and reasons

pub mod attachment;
pub mod contact;
