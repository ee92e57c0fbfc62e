//! viewbind: generates view binder classes from binding descriptions.
//!
//! Usage:
//!   viewbind [options] [file...]
//!
//! With no files, the files listed in `viewbind.json` are used.

use clap::Parser as ClapParser;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use viewbind_compiler::{write_output_files, CompileError, Compiler};
use viewbind_options::{parse_config_file, ConfigError, GenerationOptions, ViewbindConfig, CONFIG_FILE_NAME};

#[derive(ClapParser, Debug)]
#[command(name = "viewbind", about = "viewbind - Generates view binder classes from binding descriptions", version)]
struct Cli {
    /// Binding description files.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Path to viewbind.json.
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Directory to write generated sources to.
    #[arg(short = 'o', long = "out-dir")]
    out_dir: Option<PathBuf>,

    /// Minimum platform version of the generated code.
    #[arg(long)]
    sdk: Option<u32>,

    /// Generate production code without debug-checked casts.
    #[arg(long)]
    release: bool,

    /// Print generated sources instead of writing them.
    #[arg(long = "dry-run")]
    dry_run: bool,

    /// Log debug output.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error, miette::Diagnostic)]
enum CliError {
    #[error(transparent)]
    #[diagnostic(code(viewbind::config))]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(code(viewbind::compile))]
    Compile(#[from] CompileError),

    #[error("no input files")]
    #[diagnostic(
        code(viewbind::no_input),
        help("pass description files, or list them under \"files\" in viewbind.json")
    )]
    NoInput,
}

/// Everything a run needs, after merging the config file and flags.
#[derive(Debug, PartialEq)]
struct Settings {
    files: Vec<PathBuf>,
    out_dir: PathBuf,
    options: GenerationOptions,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const GRAY: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

const DEFAULT_OUT_DIR: &str = "generated";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            1
        }
    };
    process::exit(exit_code);
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<i32, CliError> {
    let start = Instant::now();
    let settings = resolve_settings(cli)?;
    if settings.files.is_empty() {
        return Err(CliError::NoInput);
    }
    debug!(files = settings.files.len(), sdk = settings.options.sdk, debuggable = settings.options.debuggable, "starting");

    let mut compiler = Compiler::new(settings.options, &settings.out_dir);
    compiler.load_files(&settings.files)?;
    let result = compiler.load()?;

    let use_color = std::io::stderr().is_terminal();
    for diag in result.diagnostics.diagnostics() {
        print_diagnostic(diag, use_color);
    }

    if result.diagnostics.has_errors() {
        let count = result.diagnostics.error_count();
        let plural = if count == 1 { "" } else { "s" };
        if use_color {
            eprintln!("\n{}Found {} error{}.{}", RED, count, plural, RESET);
        } else {
            eprintln!("\nFound {} error{}.", count, plural);
        }
        return Ok(2);
    }

    let files = compiler.generate(&result.models);
    if cli.dry_run {
        for file in &files {
            println!("// {}", file.path.display());
            print!("{}", file.text);
        }
    } else {
        write_output_files(&files)?;
    }

    let elapsed = start.elapsed();
    let plural = if files.len() == 1 { "" } else { "s" };
    if use_color {
        eprintln!("{}Generated {} binder{} in {:.2}s.{}", GRAY, files.len(), plural, elapsed.as_secs_f64(), RESET);
    } else {
        eprintln!("Generated {} binder{} in {:.2}s.", files.len(), plural, elapsed.as_secs_f64());
    }
    Ok(0)
}

/// Merge `viewbind.json` (explicit, or found in the working directory) with
/// the command line. Flags win.
fn resolve_settings(cli: &Cli) -> Result<Settings, CliError> {
    let config_path = cli.config.clone().or_else(|| {
        let default = Path::new(CONFIG_FILE_NAME);
        default.exists().then(|| default.to_path_buf())
    });
    let (config, root) = match config_path {
        Some(path) => {
            let config = parse_config_file(&path)?;
            let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
            debug!(config = %path.display(), "loaded config");
            (config, root)
        }
        None => (ViewbindConfig::default(), PathBuf::new()),
    };

    let mut options = config.generation_options();
    if let Some(sdk) = cli.sdk {
        options.sdk = sdk;
    }
    if cli.release {
        options.debuggable = false;
    }

    let files = if cli.files.is_empty() {
        config.resolved_files(&root)
    } else {
        cli.files.clone()
    };
    let out_dir = match (&cli.out_dir, &config.out_dir) {
        (Some(dir), _) => dir.clone(),
        (None, Some(dir)) => root.join(dir),
        (None, None) => PathBuf::from(DEFAULT_OUT_DIR),
    };

    Ok(Settings {
        files,
        out_dir,
        options,
    })
}

fn print_diagnostic(diag: &viewbind_diagnostics::Diagnostic, use_color: bool) {
    if use_color {
        let color = if diag.is_error() { RED } else { YELLOW };
        if let Some(ref file) = diag.file {
            eprint!("{}{}{}", CYAN, file, RESET);
            if let Some(ref target) = diag.target {
                eprint!("({})", target);
            }
            eprint!(": ");
        } else if let Some(ref target) = diag.target {
            eprint!("{}: ", target);
        }
        eprintln!(
            "{}{}{}{} {}VB{}{}: {}",
            BOLD, color, diag.category, RESET, CYAN, diag.code, RESET, diag.message_text
        );
    } else {
        eprintln!("{}", diag);
    }
}
