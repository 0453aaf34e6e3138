use std::path::PathBuf;

use linktypes_lib::generate;

use super::run_common::{build_config, fail, load_links};

pub struct GenerateArgs {
    pub links_path: PathBuf,
    pub root: PathBuf,
    pub module: Option<String>,
    pub interface: Option<String>,
    pub output_name: Option<String>,
}

pub fn run(args: GenerateArgs) {
    let links = load_links(&args.links_path).unwrap_or_else(|e| fail(e));

    let mut config = build_config(args.module.as_deref(), args.interface.as_deref());
    if let Some(name) = args.output_name {
        config = config.output_file(name);
    }

    let report = generate(&args.root, &links, &config).unwrap_or_else(|e| fail(e));

    for path in &report.written {
        println!("wrote {}", path.display());
    }
    for skipped in &report.skipped {
        eprintln!(
            "warning: skipped {}: {}",
            skipped.manifest.display(),
            skipped.reason
        );
    }
}
