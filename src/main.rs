//! inifile: read INI files and print what they contain.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, ValueEnum};
use inifile::{config, read_file, IniError, IniFile, Mode, ParseOptions, Parsed};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, warn, Level};

#[derive(Parser)]
#[command(name = "inifile")]
#[command(about = "Read INI configuration files", long_about = None)]
struct Args {
    /// INI files to read
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// How to handle duplicate or malformed lines (overrides inifile.toml)
    #[arg(long, short = 'm', value_enum)]
    mode: Option<ModeArg>,

    /// Print each file as JSON
    #[arg(long)]
    json: bool,

    /// Section to look the key up in (global items when omitted)
    #[arg(long, short = 's', value_name = "NAME", requires = "get")]
    section: Option<String>,

    /// Print only the value of this key
    #[arg(long, short = 'g', value_name = "KEY")]
    get: Option<String>,

    /// Log each section and block comment as it is parsed
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Abort on the first duplicate or malformed line
    Strict,
    /// Skip duplicate or malformed lines, keeping the first value of a key
    Lenient,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Strict => Mode::Strict,
            ModeArg::Lenient => Mode::Lenient,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let cfg = config::Config::load();

    // Override config with command line args
    let options = args.mode.map_or_else(
        || cfg.parse_options(),
        |mode| ParseOptions::with_mode(mode.into()),
    );
    let json = args.json || cfg.json;

    let mut status = ExitCode::SUCCESS;
    for path in &args.paths {
        match read_file(path, options) {
            Ok(parsed) => {
                if let Err(e) = report(path, &parsed, &args, json) {
                    error!("{e}");
                    status = ExitCode::FAILURE;
                }
            }
            Err(e) => {
                log_error(path, &e);
                status = ExitCode::FAILURE;
            }
        }
    }

    status
}

fn log_error(path: &Path, e: &IniError) {
    let hint = e.hint();
    error!(path = %path.display(), code = hint.code, "{e}: {}", hint.text);
}

fn report(path: &Path, parsed: &Parsed, args: &Args, json: bool) -> io::Result<()> {
    for warning in &parsed.warnings {
        if warning.is_warning() {
            warn!(path = %path.display(), code = warning.code(), "{warning}");
        } else {
            error!(path = %path.display(), code = warning.code(), "skipped: {warning}");
        }
    }

    if let Some(key) = &args.get {
        let value = parsed.file.get(args.section.as_deref(), key).ok_or_else(|| {
            let scope = args.section.as_deref().unwrap_or("<global>");
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: no key `{key}` in {scope}", path.display()),
            )
        })?;
        println!("{value}");
        return Ok(());
    }

    if json {
        let out = serde_json::to_string_pretty(&parsed.file).map_err(io::Error::other)?;
        println!("{out}");
    } else {
        print_outline(path, &parsed.file);
    }

    Ok(())
}

fn print_outline(path: &Path, file: &IniFile) {
    println!("{}", path.display());
    for item in file.globals() {
        println!("  {} = {}", item.key(), item.value());
    }
    for section in file.sections() {
        println!("  [{}]", section.name());
        for item in section.items() {
            println!("    {} = {}", item.key(), item.value());
        }
    }
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod tests;
