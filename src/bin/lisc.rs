//! Command-line interface for lisc
//! This binary compiles lisc source files into call-expression code and
//! exposes the intermediate stages for inspection.
//!
//! Usage:
//!   lisc compile `<path>` [--echo]                 - Compile a lisc file
//!   lisc compile --expr `<source>`                 - Compile source given inline
//!   lisc inspect `<path>` [--format `<format>`]    - Show an intermediate stage
//!   lisc samples                                   - List bundled sample programs

use clap::{Arg, ArgAction, Command};

use lisc::lisc::compiler::compile;
use lisc::lisc::processor::{self, sample_sources::LiscSources, ProcessingSpec};

fn main() {
    let matches = Command::new("lisc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A compiler for a minimal S-expression call language")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("compile")
                .about("Compile a lisc program to target code")
                .arg(
                    Arg::new("path")
                        .help("Path to the lisc file to compile")
                        .index(1)
                        .required_unless_present("expr")
                        .conflicts_with("expr"),
                )
                .arg(
                    Arg::new("expr")
                        .long("expr")
                        .short('e')
                        .help("Compile this source text instead of reading a file"),
                )
                .arg(
                    Arg::new("echo")
                        .long("echo")
                        .help("Print the input alongside the output")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show an intermediate stage of compilation")
                .arg(
                    Arg::new("path")
                        .help("Path to the lisc file to inspect")
                        .index(1)
                        .required_unless_present("expr")
                        .conflicts_with("expr"),
                )
                .arg(
                    Arg::new("expr")
                        .long("expr")
                        .short('e')
                        .help("Inspect this source text instead of reading a file"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'tokens-display', 'source-ast-json', 'code')")
                        .default_value("tokens-display"),
                ),
        )
        .subcommand(Command::new("samples").about("List bundled sample programs"))
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("compile", compile_matches)) => {
            let source = read_source(
                compile_matches.get_one::<String>("path"),
                compile_matches.get_one::<String>("expr"),
            );
            let echo = compile_matches.get_flag("echo");
            handle_compile_command(&source, echo);
        }
        Some(("inspect", inspect_matches)) => {
            let source = read_source(
                inspect_matches.get_one::<String>("path"),
                inspect_matches.get_one::<String>("expr"),
            );
            let format = inspect_matches.get_one::<String>("format").unwrap();
            handle_inspect_command(&source, format);
        }
        Some(("samples", _)) => {
            handle_samples_command();
        }
        _ => unreachable!(),
    }
}

/// Resolve the program text from either an inline expression or a file path
fn read_source(path: Option<&String>, expr: Option<&String>) -> String {
    if let Some(expr) = expr {
        return expr.clone();
    }

    // clap guarantees path is present when expr is not
    let path = path.unwrap();
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

/// Handle the compile command
fn handle_compile_command(source: &str, echo: bool) {
    match compile(source) {
        Ok(code) => {
            if echo {
                println!("[INPUT] {}", source);
                println!("[OUTPUT] {}", code);
            } else {
                println!("{}", code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(source: &str, format: &str) {
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!(
            "Available formats: {}",
            processor::available_formats().join(", ")
        );
        std::process::exit(1);
    });

    match processor::process(source, &spec) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle the samples command
fn handle_samples_command() {
    println!("Available sample programs:\n");
    for name in LiscSources::list_samples() {
        println!("  {}", name);
    }
}
