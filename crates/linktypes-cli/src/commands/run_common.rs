//! Shared logic for emit and generate commands.

use std::io::{self, Read};
use std::path::Path;

use linktypes_lib::typegen::Config;
use linktypes_lib::{Error, Links, Result, parse_links, read_links};

/// Load a links document from a file, or from stdin when `path` is "-".
pub fn load_links(path: &Path) -> Result<Links> {
    if path.as_os_str() != "-" {
        return read_links(path);
    }

    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_links(&buf)
}

/// Default config with the user's naming overrides applied.
pub fn build_config(module: Option<&str>, interface: Option<&str>) -> Config {
    let mut config = Config::new();
    if let Some(name) = module {
        config = config.module_name(name);
    }
    if let Some(name) = interface {
        config = config.interface_name(name);
    }
    config
}

/// Print an error and exit with status 1.
pub fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
