//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("linktypes")
        .about("TypeScript declarations for linked resources")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(emit_command())
        .subcommand(generate_command())
}

/// Print the declaration file for a links document.
pub fn emit_command() -> Command {
    Command::new("emit")
        .about("Print the declaration file for a links document")
        .override_usage(
            "\
  linktypes emit <LINKS>
  linktypes emit <LINKS> --platform-types
  linktypes emit - -o sst-env.d.ts",
        )
        .after_help(
            r#"EXAMPLES:
  linktypes emit links.json                      # generic declarations
  linktypes emit links.json --platform-types     # platform bindings typed by the platform package
  cat links.json | linktypes emit - -o env.d.ts  # from stdin, to file"#,
        )
        .arg(links_path_arg())
        .arg(platform_types_arg())
        .arg(module_arg())
        .arg(interface_arg())
        .arg(output_file_arg())
        .arg(color_arg())
}

/// Write a declaration file next to every package manifest.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Write a declaration file next to every package.json below a directory")
        .override_usage(
            "\
  linktypes generate <LINKS> [ROOT]",
        )
        .after_help(
            r#"EXAMPLES:
  linktypes generate links.json                  # search the current directory
  linktypes generate links.json packages/        # search packages/
  linktypes generate links.json --output-name resources.d.ts"#,
        )
        .arg(links_path_arg())
        .arg(root_arg())
        .arg(module_arg())
        .arg(interface_arg())
        .arg(output_name_arg())
}
