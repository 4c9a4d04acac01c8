//! Shared test utilities for the platform-modules workspace.
//!
//! This crate provides fixtures reused across crate test suites. It is a
//! dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`tree`]: [`tree::TestTree`] builder for temporary folder hierarchies
//! - [`images`]: generated PNG/JPEG fixtures of known dimensions
//! - [`permissions`]: injecting permission-denied entries on unix

pub mod images;
pub mod permissions;
pub mod tree;
