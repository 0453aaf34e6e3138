#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for linktypes.
//!
//! Two layers:
//! - **Deserialization layer**: 1:1 mapping to the links document and to
//!   `package.json` manifests (`Link`, `Include`, `PackageJson`)
//! - **Analysis layer**: the closed `PropValue` tree that type inference
//!   walks, and the immutable `Platform` description used to recognize
//!   platform-native bindings

mod colors;
mod link;
mod manifest;
mod platform;
mod value;

#[cfg(test)]
mod link_tests;
#[cfg(test)]
mod platform_tests;
#[cfg(test)]
mod value_tests;

pub use colors::Colors;
pub use link::{Include, Link, Links, parse_links};
pub use manifest::PackageJson;
pub use platform::{BindingKinds, Platform};
pub use value::{MAX_DEPTH, PropValue};

/// Errors produced while ingesting link data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Property tree nested deeper than [`MAX_DEPTH`].
    #[error("properties nested deeper than {} levels", MAX_DEPTH)]
    RecursionLimitExceeded,

    /// The links document is not valid JSON or not shaped like a link set.
    #[error("invalid links document: {0}")]
    Links(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
