mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "matchscore",
    version,
    about = "Score how well a resume matches a job description"
)]
struct Cli {
    /// Log pipeline stages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Backend {
    /// pdftotext when installed, pdf-extract otherwise
    Auto,
    Pdftotext,
    Native,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a resume (PDF or plain text) against a job description
    Score {
        /// Path to the resume (PDF, or .txt/.md)
        resume: PathBuf,

        /// File containing the job description ("-" reads stdin)
        #[arg(short, long, value_name = "FILE", conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description given inline
        #[arg(long, value_name = "TEXT")]
        job_text: Option<String>,

        /// Number of job keywords to report
        #[arg(short = 'n', long, default_value_t = 10)]
        top: usize,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// PDF extraction backend
        #[arg(long, value_enum, default_value = "auto")]
        backend: Backend,

        /// Custom JSON lexicon file (default: built-in English)
        #[arg(long, value_name = "FILE")]
        lexicon: Option<PathBuf>,
    },
    /// List the most frequent nouns and adjectives of a text file
    Keywords {
        /// Path to a text file ("-" reads stdin)
        input_file: PathBuf,

        /// Number of keywords
        #[arg(short = 'n', long, default_value_t = 10)]
        top: usize,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Custom JSON lexicon file (default: built-in English)
        #[arg(long, value_name = "FILE")]
        lexicon: Option<PathBuf>,
    },
    /// Print the normalized form of a text file
    Normalize {
        /// Path to a text file ("-" reads stdin)
        input_file: PathBuf,

        /// Custom JSON lexicon file (default: built-in English)
        #[arg(long, value_name = "FILE")]
        lexicon: Option<PathBuf>,
    },
    /// Inspect and validate lexicons
    Lexicon {
        #[command(subcommand)]
        action: LexiconAction,
    },
}

#[derive(Subcommand)]
enum LexiconAction {
    /// List predefined lexicons
    List,
    /// Describe a predefined lexicon
    Explain {
        /// Preset name (e.g., "en")
        preset: String,
    },
    /// Validate a custom lexicon file
    Validate {
        /// Path to JSON lexicon file
        file: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "matchscore_core={default_level},matchscore={default_level}"
        ))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Score {
            resume,
            job,
            job_text,
            top,
            output,
            backend,
            lexicon,
        } => commands::score::run(commands::score::ScoreArgs {
            resume,
            job,
            job_text,
            top,
            output_format: output,
            backend,
            lexicon,
        }),
        Commands::Keywords {
            input_file,
            top,
            output,
            lexicon,
        } => commands::keywords::run(input_file, top, &output, lexicon),
        Commands::Normalize {
            input_file,
            lexicon,
        } => commands::normalize::run(input_file, lexicon),
        Commands::Lexicon { action } => match action {
            LexiconAction::List => commands::lexicon::list(),
            LexiconAction::Explain { preset } => commands::lexicon::explain(&preset),
            LexiconAction::Validate { file } => commands::lexicon::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
