//! Profile configuration types.
//!
//! Responsibilities:
//! - Define the `Profile` value type parsed from one config section.
//! - Define the immutable `Config` view with its lookup operations.
//!
//! Does NOT handle:
//! - Loading configuration from files or environment variables (see `loader` module).
//! - Secret storage (see `credentials` module).
//!
//! Invariants:
//! - Profile names are normalized before they reach these types.

mod config;
mod profile;

pub use config::Config;
pub use profile::Profile;
