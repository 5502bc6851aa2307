use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use knowdiff::ColorMode;
use knowdiff::areas::session::{CompareConfig, Session};
use knowdiff::artifacts::core::logging;
use knowdiff::artifacts::input::{
    LARGE_INPUT_THRESHOLD_BYTES, MAX_COMBINED_INPUT_BYTES, MAX_FILE_SIZE_BYTES,
};
use knowdiff::commands::diff::DiffViewOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "knowdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two text files line by line",
    long_about = "Computes a minimal line diff between two text files using Myers' algorithm, \
    with optional whitespace-insensitive matching and character-level highlighting \
    of edited lines.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, global = true, help = "Log engine activity to stderr")]
    verbose: bool,
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto, help = "When to color output")]
    color: ColorMode,
}

#[derive(Args)]
struct CompareArgs {
    #[arg(index = 1, help = "The original file")]
    original: PathBuf,
    #[arg(index = 2, help = "The modified file")]
    modified: PathBuf,
    #[arg(short = 'w', long, help = "Ignore leading and trailing whitespace when matching lines")]
    ignore_whitespace: bool,
    #[arg(
        long,
        env = "KNOWDIFF_MAX_INPUT_BYTES",
        default_value_t = MAX_COMBINED_INPUT_BYTES,
        help = "Maximum combined size of both inputs in bytes"
    )]
    max_input_bytes: usize,
    #[arg(
        long,
        env = "KNOWDIFF_MAX_FILE_BYTES",
        default_value_t = MAX_FILE_SIZE_BYTES,
        help = "Maximum size of a single input file in bytes"
    )]
    max_file_bytes: usize,
    #[arg(
        long,
        env = "KNOWDIFF_OFFLOAD_THRESHOLD",
        default_value_t = LARGE_INPUT_THRESHOLD_BYTES,
        help = "Combined size above which the diff runs on a worker thread"
    )]
    offload_threshold: usize,
    #[arg(long, help = "Accept files of any extension")]
    any_extension: bool,
}

impl CompareArgs {
    fn config(&self) -> CompareConfig {
        CompareConfig::new(
            self.ignore_whitespace,
            self.max_input_bytes,
            self.max_file_bytes,
            self.offload_threshold,
            self.any_extension,
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show the line diff of two files",
        long_about = "This command prints every line of both files with its line numbers, \
        marking removed lines with '-' and added lines with '+', followed by a summary."
    )]
    Diff {
        #[command(flatten)]
        args: CompareArgs,
        #[arg(long, help = "Do not highlight changed characters within lines")]
        no_inline: bool,
        #[arg(long, help = "Hide unchanged lines far from any change")]
        collapse: bool,
    },
    #[command(
        name = "json",
        about = "Print the diff result as JSON",
        long_about = "This command prints the addressed diff result (chunks, stats and line counts) as JSON."
    )]
    Json {
        #[command(flatten)]
        args: CompareArgs,
        #[arg(long, help = "Pretty-print the JSON")]
        pretty: bool,
    },
    #[command(
        name = "stat",
        about = "Print only the diff statistics",
        long_about = "This command prints the detected language, the line counts of both files \
        and the added/removed/unchanged totals."
    )]
    Stat {
        #[command(flatten)]
        args: CompareArgs,
    },
    #[command(
        name = "chars",
        about = "Show the character diff of two lines",
        long_about = "This command compares two single lines character by character, \
        wrapping removed text in [-..-] and added text in {+..+}."
    )]
    Chars {
        #[arg(index = 1, help = "The old line")]
        old_line: String,
        #[arg(index = 2, help = "The new line")]
        new_line: String,
        #[arg(long, help = "Print the segments as JSON")]
        json: bool,
    },
}

fn open_session(config: CompareConfig) -> Result<Session> {
    let pwd = std::env::current_dir().context("failed to resolve the working directory")?;
    Session::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()), config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    cli.color.apply();

    match &cli.command {
        Commands::Diff {
            args,
            no_inline,
            collapse,
        } => {
            let session = open_session(args.config())?;
            let opts = DiffViewOptions {
                inline: !no_inline,
                collapse: *collapse,
            };

            session.diff(&args.original, &args.modified, &opts).await?
        }
        Commands::Json { args, pretty } => {
            let session = open_session(args.config())?;

            session.json(&args.original, &args.modified, *pretty).await?
        }
        Commands::Stat { args } => {
            let session = open_session(args.config())?;

            session.stat(&args.original, &args.modified).await?
        }
        Commands::Chars {
            old_line,
            new_line,
            json,
        } => {
            let session = open_session(CompareConfig::default())?;

            session.chars(old_line, new_line, *json)?
        }
    }

    Ok(())
}
