//! linktypes: type declarations for linked resources.
//!
//! Given a link set (resource name -> runtime properties + capability
//! descriptors), renders a `.d.ts` file that augments a module with a
//! `Resource` interface describing every link.
//!
//! # Example
//!
//! ```
//! use linktypes_lib::typegen;
//!
//! let links = linktypes_lib::parse_links(r#"{ "db": { "properties": { "host": "x" } } }"#)?;
//! let dts = typegen::emit_declarations(&links, false)?;
//! assert!(dts.contains(r#""host": string"#));
//! # Ok::<(), linktypes_lib::Error>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::path::PathBuf;

pub mod generate;
pub mod typegen;

#[cfg(test)]
mod lib_tests;

pub use generate::{Report, SkipReason, Skipped, generate};
pub use linktypes_core::{
    BindingKinds, Colors, Include, Link, Links, PackageJson, Platform, PropValue,
};

/// Errors that abort generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] linktypes_core::Error),

    /// A link's properties could not be converted for inference.
    #[error("link `{link}`: {source}")]
    Properties {
        link: String,
        #[source]
        source: linktypes_core::Error,
    },

    /// A platform binding descriptor without a string `binding` attribute.
    #[error("link `{link}`: `binding` attribute must be a string, found {found}")]
    MalformedBinding { link: String, found: &'static str },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to search {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parse a links document.
pub fn parse_links(json: &str) -> Result<Links> {
    linktypes_core::parse_links(json)
        .map_err(|e| Error::Core(linktypes_core::Error::Links(e)))
}

/// Read and parse a links document from disk.
pub fn read_links(path: &std::path::Path) -> Result<Links> {
    let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_links(&json)
}
