//! Command-line interface for stache
//! This binary is used to render / inspect / process stache template files into different formats.
//!
//! Usage:
//!   stache process `<path>` `<format>`    - Process a file and output to stdout (explicit)
//!   stache `<path>` `<format>`            - Same as process (default command)
//!   stache render `<path>` `[context]`    - Render a template against a context file
//!   stache formats                      - List all available formats

use clap::{Arg, Command};
use stache::stache::processor::{available_formats, process_file, ProcessingError, ProcessingSpec};
use std::path::Path;

fn main() {
    let matches = Command::new("stache")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for rendering and inspecting stache templates")
        .subcommand_required(false)
        .arg_required_else_help(true)
        // Default command args (process without the subcommand word)
        .arg(
            Arg::new("path")
                .help("Path to the template file to process")
                .index(1),
        )
        .arg(
            Arg::new("format")
                .help("Output format (e.g., token-simple, ast-tag, render-text)")
                .index(2),
        )
        .arg(
            Arg::new("context")
                .long("context")
                .value_name("FILE")
                .help("Path to a JSON or YAML context file (render stage only)"),
        )
        // Subcommands
        .subcommand(
            Command::new("process")
                .about("Process a file and output to stdout (default command)")
                .arg(
                    Arg::new("path")
                        .help("Path to the template file to process")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .help("Output format (e.g., token-simple, ast-tag, render-text)")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("context")
                        .long("context")
                        .value_name("FILE")
                        .help("Path to a JSON or YAML context file (render stage only)"),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render a template against a context file")
                .arg(
                    Arg::new("template")
                        .help("Path to the template file to render")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("context")
                        .help("Path to a JSON or YAML context file")
                        .index(2),
                ),
        )
        .subcommand(Command::new("formats").about("List all available output formats"))
        .get_matches();

    // Handle subcommands or default command
    match matches.subcommand() {
        Some(("process", process_matches)) => {
            let path = process_matches.get_one::<String>("path").unwrap();
            let format_str = process_matches.get_one::<String>("format").unwrap();
            let context = process_matches.get_one::<String>("context");
            handle_process_command(path, format_str, context.map(|s| s.as_str()));
        }
        Some(("render", render_matches)) => {
            let path = render_matches.get_one::<String>("template").unwrap();
            let context = render_matches.get_one::<String>("context");
            handle_render_command(path, context.map(|s| s.as_str()));
        }
        Some(("formats", _)) => {
            handle_formats_command();
        }
        None => {
            // Default command: treat as process
            let path = matches.get_one::<String>("path");
            let format = matches.get_one::<String>("format");
            let context = matches.get_one::<String>("context");

            match (path, format) {
                (Some(p), Some(f)) => handle_process_command(p, f, context.map(|s| s.as_str())),
                _ => {
                    eprintln!("Error: both <path> and <format> are required");
                    std::process::exit(1);
                }
            }
        }
        _ => unreachable!(),
    }
}

/// Handle the process command
fn handle_process_command(path: &str, format_str: &str, context: Option<&str>) {
    match process_file_with_format(path, format_str, context) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("\nAvailable formats:");
            for format in available_formats() {
                eprintln!("  {}", format);
            }
            std::process::exit(1);
        }
    }
}

/// Handle the render command
fn handle_render_command(path: &str, context: Option<&str>) {
    // Shorthand for processing with the render-text format
    handle_process_command(path, "render-text", context);
}

/// Handle the formats command
fn handle_formats_command() {
    println!("Available formats:");
    for format in available_formats() {
        println!("  {}", format);
    }
}

/// Process a file with the given format string and optional context file
fn process_file_with_format(
    path: &str,
    format_str: &str,
    context: Option<&str>,
) -> Result<String, ProcessingError> {
    let spec = ProcessingSpec::from_string(format_str)?;
    process_file(path, &spec, context.map(Path::new))
}
