//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be reused
//! by several commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Links document (positional, "-" for stdin).
pub fn links_path_arg() -> Arg {
    Arg::new("links_path")
        .value_name("LINKS")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Links document (JSON), or - for stdin")
}

/// Directory searched for manifests (positional).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .value_name("ROOT")
        .value_parser(value_parser!(PathBuf))
        .default_value(".")
        .help("Directory to search for package manifests")
}

/// Assume a dependency on the platform type package (--platform-types).
pub fn platform_types_arg() -> Arg {
    Arg::new("platform_types")
        .long("platform-types")
        .action(ArgAction::SetTrue)
        .help("Declare platform bindings through the platform type package")
}

/// Augmented module (--module).
pub fn module_arg() -> Arg {
    Arg::new("module")
        .long("module")
        .value_name("NAME")
        .help("Module to augment (default: sst)")
}

/// Declared interface (--interface).
pub fn interface_arg() -> Arg {
    Arg::new("interface")
        .long("interface")
        .value_name("NAME")
        .help("Interface to declare (default: Resource)")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Name of the file written next to each manifest (--output-name).
pub fn output_name_arg() -> Arg {
    Arg::new("output_name")
        .long("output-name")
        .value_name("FILE")
        .help("Declaration file name (default: sst-env.d.ts)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
