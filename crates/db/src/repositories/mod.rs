//! Repository abstractions for data access.
//!
//! Both repositories only read. Every query runs against the table name the
//! repository was built with.

pub mod post;
pub mod product;

pub use post::PostRepository;
pub use product::ProductRepository;

#[cfg(test)]
pub(crate) mod test_support;
