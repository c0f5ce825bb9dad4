use clap::{Parser, Subcommand};
use tagcheck_validator::{ValidateError, Verdict};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tagcheck")]
#[command(about = "tagcheck: check that markup tags are matched and properly nested")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check files for balanced tags
    Check {
        /// Input files, or `-` for stdin
        #[arg(required = true)]
        paths: Vec<String>,

        /// Print nothing; report through the exit status only
        #[arg(short, long)]
        quiet: bool,
    },
}

/// All inputs balanced.
const EXIT_OK: i32 = 0;
/// At least one input unbalanced.
const EXIT_UNBALANCED: i32 = 1;
/// At least one input could not be read.
const EXIT_ERROR: i32 = 2;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let code = match cli.command {
        Command::Check { paths, quiet } => cmd_check(&paths, quiet),
    };
    std::process::exit(code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn check_source(path: &str) -> Result<Verdict, ValidateError> {
    if path == "-" {
        tagcheck_validator::check_reader(std::io::stdin().lock())
    } else {
        tagcheck_validator::check_path(path)
    }
}

fn cmd_check(paths: &[String], quiet: bool) -> i32 {
    let mut code = EXIT_OK;

    for path in paths {
        match check_source(path) {
            Ok(Verdict::Balanced) => {
                if !quiet {
                    println!("OK: {path}");
                }
            }
            Ok(verdict) => {
                if !quiet {
                    println!("Unbalanced: {path}: {verdict}");
                }
                code = code.max(EXIT_UNBALANCED);
            }
            Err(e) => {
                warn!(path = %path, error = %e, "could not check input");
                eprintln!("Error: {e}");
                code = EXIT_ERROR;
            }
        }
    }

    code
}
