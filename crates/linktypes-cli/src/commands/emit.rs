use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use linktypes_lib::typegen::emit_with_config;
use linktypes_lib::{Links, Result};

use super::run_common::{build_config, fail, load_links};

pub struct EmitArgs {
    pub links_path: PathBuf,
    pub platform_types: bool,
    pub module: Option<String>,
    pub interface: Option<String>,
    pub output: Option<PathBuf>,
    pub color: bool,
}

pub fn run(args: EmitArgs) {
    let links = load_links(&args.links_path).unwrap_or_else(|e| fail(e));
    let output = render(&links, &args).unwrap_or_else(|e| fail(e));

    if let Some(ref path) = args.output {
        fs::write(path, &output).unwrap_or_else(|e| {
            fail(format_args!("failed to write {}: {}", path.display(), e))
        });
    } else if let Err(e) = io::stdout().write_all(output.as_bytes()) {
        fail(format_args!("failed to write output: {}", e));
    }
}

pub fn render(links: &Links, args: &EmitArgs) -> Result<String> {
    let config = build_config(args.module.as_deref(), args.interface.as_deref())
        .colored(args.color);
    emit_with_config(links, args.platform_types, config)
}
