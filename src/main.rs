//! CLI tool to generate TypeScript type declarations from relaxed
//! JSON object literal files.

use std::fs;
use std::process::ExitCode;

use json2ts_rs::CompileOptions;

fn usage() -> ExitCode {
    eprintln!("Usage: json2ts <command> [options] [files...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  gen       Compile literal file(s) and print declarations");
    eprintln!("  validate  Check if literal file(s) parse");
    eprintln!();
    eprintln!("Options (gen):");
    eprintln!("  --no-split     Inline nested object types");
    eprintln!("  --parse-array  Union array element types instead of Array<any>");
    eprintln!("  --optional     Mark every field optional (?:)");
    eprintln!("  --semicolon    Terminate field lines with ';'");
    eprintln!("  --prefix=<s>   Prefix for generated type names");
    eprintln!("  --suffix=<s>   Suffix for generated type names (default: Type)");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  json2ts gen data.json");
    eprintln!("  json2ts gen --parse-array --optional data.json");
    eprintln!("  json2ts validate data.json");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        return usage();
    }

    let command = args[1].as_str();
    let mut options = CompileOptions::default();
    let mut files = Vec::new();

    for arg in &args[2..] {
        match arg.as_str() {
            "--no-split" => options.spilt_type = false,
            "--parse-array" => options.parse_array = true,
            "--optional" => options.required = false,
            "--semicolon" => options.semicolon = true,
            _ if arg.starts_with("--prefix=") => {
                options.type_prefix = arg["--prefix=".len()..].to_string();
            }
            _ if arg.starts_with("--suffix=") => {
                options.type_suffix = arg["--suffix=".len()..].to_string();
            }
            _ if arg.starts_with("--") => {
                eprintln!("Error: unknown option {arg}");
                return ExitCode::from(2);
            }
            _ => files.push(arg.clone()),
        }
    }

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in &files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "gen" => match json2ts_rs::compile(&content, &options) {
                Ok(output) => print!("{output}"),
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            "validate" => match json2ts_rs::parse(&content) {
                Ok(root) => {
                    eprintln!("{path}: valid ({} top-level node(s))", root.children.len());
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            _ => {
                eprintln!("Error: unknown command '{command}'");
                return ExitCode::from(2);
            }
        }
    }

    if had_error {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
