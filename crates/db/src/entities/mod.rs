//! `SeaORM` entity definitions.
//!
//! Table names here are defaults; the repositories read and write the
//! tables named in configuration.

pub mod posts;
pub mod products;
