//! interviewsim CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use interviewsim_core::model::Role;
use interviewsim_providers::ScoringMode;

mod commands;

#[derive(Parser)]
#[command(
    name = "interviewsim",
    version,
    about = "Scripted technical interview simulator with response scoring"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive interview (one line of stdin per answer)
    Interview {
        /// Candidate name
        #[arg(long)]
        name: String,

        /// Role: data-scientist or data-engineer
        #[arg(long)]
        role: Role,

        /// Scoring strategy: deterministic or remote-evaluation
        #[arg(long)]
        scoring: Option<ScoringMode>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Score a single response
    Score {
        /// The response text
        text: String,

        /// Role: data-scientist or data-engineer
        #[arg(long)]
        role: Role,

        /// Index of the question being answered
        #[arg(long, default_value = "0")]
        question_index: usize,

        /// Scoring strategy: deterministic or remote-evaluation
        #[arg(long)]
        scoring: Option<ScoringMode>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the question bank for a role
    Questions {
        /// Role: data-scientist or data-engineer
        #[arg(long)]
        role: Role,
    },

    /// List stored interviews, or show one in detail
    Records {
        /// Record id (or unique prefix) to show
        #[arg(long)]
        id: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Export stored interviews
    Export {
        /// Output path (default: interview-records-<date>.json)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format: json, html
        #[arg(long, default_value = "json")]
        format: String,

        /// Export only this record (id or unique prefix)
        #[arg(long)]
        id: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Run the remote evaluation endpoint
    Serve {
        /// Port to listen on (default from config: 3001)
        #[arg(long)]
        port: Option<u16>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("interviewsim=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Interview {
            name,
            role,
            scoring,
            config,
        } => commands::interview::execute(name, role, scoring, config).await,
        Commands::Score {
            text,
            role,
            question_index,
            scoring,
            config,
        } => commands::score::execute(text, role, question_index, scoring, config).await,
        Commands::Questions { role } => commands::questions::execute(role),
        Commands::Records { id, config } => commands::records::execute(id, config),
        Commands::Export {
            output,
            format,
            id,
            config,
        } => commands::export::execute(output, format, id, config),
        Commands::Serve { port, config } => commands::serve::execute(port, config).await,
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
