//! TypeScript declaration generation for link sets.
//!
//! Three stages:
//! - `bindings` - partition links into platform-native and generic
//! - `infer` - render a property tree as an object type literal
//! - `emitter` - assemble banner and `declare module` blocks into a file

mod bindings;
mod config;
mod emitter;
mod infer;


pub use bindings::resolve_bindings;
pub use config::Config;
pub use emitter::Emitter;
pub use infer::{DISCRIMINANT, INDENT, infer, infer_colored};

use crate::{Links, Result};

/// Render the declaration file for a link set with the default config.
///
/// `uses_platform` says whether the consuming package depends on the
/// platform type library.
pub fn emit_declarations(links: &Links, uses_platform: bool) -> Result<String> {
    emit_with_config(links, uses_platform, Config::default())
}

/// Render the declaration file for a link set with a custom config.
pub fn emit_with_config(links: &Links, uses_platform: bool, config: Config) -> Result<String> {
    Emitter::new(links, config)?.emit(uses_platform)
}
