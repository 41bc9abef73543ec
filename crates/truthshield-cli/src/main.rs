//! TruthShield CLI
//!
//! Command-line front end for the hybrid risk engine: analyze a pasted
//! message or score a call-log entry, printing the assessment as JSON.
//! Without a `GEMINI_API_KEY` the engine runs fully offline on the
//! deterministic fallback classifiers.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use truthshield_core::{CallDirection, CallRecord};
use truthshield_engine::RiskEngine;

mod config;

use config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "truthshield")]
#[command(about = "Anti-fraud risk analysis for messages and calls", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "truthshield.yaml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a pasted message for scam indicators
    Message {
        /// The message text to analyze
        text: String,
    },

    /// Score a call-log entry
    Call {
        /// Caller or callee number
        #[arg(long)]
        number: String,

        /// Contact name, if the number is in the address book
        #[arg(long)]
        contact: Option<String>,

        /// Call duration in seconds
        #[arg(long, default_value_t = 0)]
        duration: u64,

        /// Call direction
        #[arg(long, value_enum, default_value_t = DirectionArg::Incoming)]
        direction: DirectionArg,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum DirectionArg {
    Incoming,
    Outgoing,
}

impl From<DirectionArg> for CallDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Incoming => Self::Incoming,
            DirectionArg::Outgoing => Self::Outgoing,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = AppConfig::load(&cli.config)?;
    let engine = RiskEngine::new(config.engine)?;

    if engine.has_remote() {
        info!("remote classifier configured");
    } else {
        info!("running offline, fallback classifiers only");
    }

    match cli.command {
        Command::Message { text } => {
            let assessment = engine.assess_message(&text).await;
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        }
        Command::Call {
            number,
            contact,
            duration,
            direction,
        } => {
            let record = CallRecord {
                phone_number: number,
                contact_name: contact,
                duration_secs: duration,
                direction: direction.into(),
            };
            let assessment = engine.assess_call(&record).await;
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("truthshield=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("truthshield=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
