//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::emit::EmitArgs;
use crate::commands::generate::GenerateArgs;

pub struct EmitParams {
    pub links_path: PathBuf,
    pub platform_types: bool,
    pub module: Option<String>,
    pub interface: Option<String>,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
}

impl EmitParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            links_path: links_path(m),
            platform_types: m.get_flag("platform_types"),
            module: m.get_one::<String>("module").cloned(),
            interface: m.get_one::<String>("interface").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<EmitParams> for EmitArgs {
    fn from(p: EmitParams) -> Self {
        // Files never get escape codes
        let color = p.output.is_none() && p.color.should_colorize();

        Self {
            links_path: p.links_path,
            platform_types: p.platform_types,
            module: p.module,
            interface: p.interface,
            output: p.output,
            color,
        }
    }
}

pub struct GenerateParams {
    pub links_path: PathBuf,
    pub root: PathBuf,
    pub module: Option<String>,
    pub interface: Option<String>,
    pub output_name: Option<String>,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            links_path: links_path(m),
            root: m
                .get_one::<PathBuf>("root")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(".")),
            module: m.get_one::<String>("module").cloned(),
            interface: m.get_one::<String>("interface").cloned(),
            output_name: m.get_one::<String>("output_name").cloned(),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            links_path: p.links_path,
            root: p.root,
            module: p.module,
            interface: p.interface,
            output_name: p.output_name,
        }
    }
}

/// LINKS is required, so clap guarantees it is present.
fn links_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("links_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
