mod render;
mod wizard;

use std::fs;
use std::future::Future;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use somnia_agents::{AgentConfig, DreamAgent};
use somnia_core::{CatalogCategory, ConsultationRequest, DreamRequest, DreamType};
use somnia_observability::{init_tracing, AppMetrics};

use crate::wizard::{WizardOutcome, WizardState};

#[derive(Debug, Parser)]
#[command(name = "somnia")]
#[command(about = "Keyword-driven dream interpretation")]
struct Cli {
    /// Simulated analysis latency in milliseconds.
    #[arg(long, global = true, env = "SOMNIA_ANALYSIS_DELAY_MS")]
    delay_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a dream given as an argument, a file, or stdin.
    Analyze {
        text: Option<String>,
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Replace the classified dream type with your own choice.
        #[arg(long = "type")]
        dream_type: Option<DreamType>,
        #[arg(long)]
        json: bool,
    },
    /// Describe, classify and review a dream step by step.
    Wizard {
        #[arg(long)]
        json: bool,
    },
    /// Search the dream meanings reference.
    Meanings {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = "all")]
        category: String,
        #[arg(long)]
        json: bool,
    },
    /// Request a session with a professional dream consultant.
    Consult {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        preferred_time: String,
        #[arg(long, conflicts_with = "file")]
        description: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// List the dream types the analyzer can assign.
    Types,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("somnia_cli");
    let cli = Cli::parse();

    let agent = build_agent(cli.delay_ms);

    match cli.command {
        Command::Analyze {
            text,
            file,
            dream_type,
            json,
        } => {
            let text = read_dream_text(text, file)?;
            let request = DreamRequest::new(text).with_override(dream_type);
            let analysis =
                with_loading("Analyzing your dream", agent.interpret(request)).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print!("{}", render::analysis_report(&analysis));
            }
        }
        Command::Wizard { json } => run_wizard(agent, json).await?,
        Command::Meanings {
            query,
            category,
            json,
        } => {
            let category =
                CatalogCategory::parse_filter(&category).map_err(anyhow::Error::msg)?;
            let hits = agent.meanings(&query, category);

            if json {
                println!("{}", serde_json::to_string_pretty(&hits)?);
            } else {
                print!("{}", render::meanings_report(&hits));
            }
        }
        Command::Consult {
            name,
            email,
            phone,
            preferred_time,
            description,
            file,
            json,
        } => {
            let dream_description = match (description, file) {
                (Some(text), _) => text,
                (None, Some(path)) => read_file(&path)?,
                (None, None) => String::new(),
            };
            let request = ConsultationRequest {
                name,
                email,
                phone,
                dream_description,
                preferred_time,
            };
            let receipt = with_loading("Processing", agent.submit_consultation(request)).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&receipt)?);
            } else {
                print!("{}", render::receipt_report(&receipt));
            }
        }
        Command::Types => {
            for dream_type in DreamType::ALL {
                println!("{dream_type}");
            }
        }
    }

    Ok(())
}

fn build_agent(delay_ms: Option<u64>) -> DreamAgent {
    let mut config = AgentConfig::from_env();
    if let Some(ms) = delay_ms {
        config = config.with_analysis_delay(Duration::from_millis(ms));
    }

    DreamAgent::with_keyword_rules(config, AppMetrics::shared())
}

async fn run_wizard(agent: DreamAgent, json: bool) -> Result<()> {
    let mut wizard = WizardState::new();

    println!("Dream wizard. type 'back' to return a step, 'quit' to leave.");

    loop {
        println!("\n{}", wizard.prompt());
        print!("[{}/3]> ", wizard.step().number());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(());
        }

        match wizard.advance(&line) {
            WizardOutcome::Continue => {}
            WizardOutcome::Rejected(message) => println!("{message}"),
            WizardOutcome::Quit => return Ok(()),
            WizardOutcome::Submit(request) => {
                let analysis =
                    with_loading("Analyzing your dream", agent.interpret(request)).await?;
                println!();
                if json {
                    println!("{}", serde_json::to_string_pretty(&analysis)?);
                } else {
                    print!("{}", render::analysis_report(&analysis));
                }
                return Ok(());
            }
        }
    }
}

/// Prints a dot every half second on stderr while `work` is pending.
async fn with_loading<T>(label: &str, work: impl Future<Output = T>) -> T {
    let mut ticker = tokio::time::interval(Duration::from_millis(500));
    tokio::pin!(work);

    eprint!("{label}");
    let output = loop {
        tokio::select! {
            output = &mut work => break output,
            _ = ticker.tick() => eprint!("."),
        }
    };
    eprintln!();

    output
}

fn read_dream_text(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        return read_file(&path);
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Describe your dream, then press Ctrl-D:");
    }
    let mut buffer = String::new();
    stdin
        .read_to_string(&mut buffer)
        .context("failed reading dream text from stdin")?;
    Ok(buffer)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed reading {}", path.display()))
}
