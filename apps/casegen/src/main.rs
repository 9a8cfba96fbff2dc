use anyhow::{Context, Result, bail};
use casegen_aggregator::{EditSteps, ProviderReport, RunHistory, aggregate};
use casegen_config::{CasegenConfig, load_config};
use casegen_export::{ExportFormat, ExportOptions, export_run};
use casegen_ids::CaseId;
use casegen_logging::LogLevel;
use casegen_parse::parse_response;
use casegen_prompt::{system_prompt, user_prompt};
use casegen_schema::case::CaseFormat;
use casegen_schema::provider::Provider;
use casegen_schema::run::{ProviderStatus, Run};
use clap::{ArgAction, Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "casegen")]
#[command(about = "Parse LLM test-case responses into comparable runs and export them.", long_about = None)]
struct Cli {
    /// YAML or JSON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse raw provider responses into a run.
    Parse {
        /// "gherkin" or "plain"; defaults to the configured format.
        #[arg(long)]
        format: Option<CaseFormat>,
        /// OpenAI response text ("-" reads stdin).
        #[arg(long)]
        openai: Option<PathBuf>,
        /// Gemini response text ("-" reads stdin).
        #[arg(long)]
        gemini: Option<PathBuf>,
        /// Claude response text ("-" reads stdin).
        #[arg(long)]
        claude: Option<PathBuf>,
        /// Record a provider call that failed upstream, as PROVIDER=REASON.
        #[arg(long, value_parser = parse_failure)]
        failed: Vec<(Provider, String)>,
        /// Where the run is written as JSON.
        #[arg(long, default_value = "run.json")]
        out: PathBuf,
        /// Also append the run to this history file.
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Export a run for spreadsheets, Gherkin tooling or browser automation.
    Export {
        #[arg(long)]
        run: PathBuf,
        /// json, csv, feature, playwright or webdriverio.
        #[arg(long, default_value = "json")]
        format: ExportFormat,
        /// Requirement text used to name the feature.
        #[arg(long)]
        requirement: Option<String>,
        /// Output file; stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the prompts that request test cases in a given format.
    Prompt {
        #[arg(long)]
        format: Option<CaseFormat>,
        /// Feature description ("-" reads stdin).
        #[arg(long)]
        input: PathBuf,
    },

    /// Replace the steps of one case in a saved run.
    Edit {
        #[arg(long)]
        run: PathBuf,
        /// Case id as shown in the run file.
        #[arg(long = "case")]
        case_id: String,
        /// New steps, one per line ("-" reads stdin).
        #[arg(long)]
        steps: PathBuf,
    },

    /// Inspect or rewind the run history.
    History {
        /// History file; defaults to the configured path.
        #[arg(long)]
        file: Option<PathBuf>,
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand, Debug)]
enum HistoryAction {
    /// List stored runs, oldest first.
    List,
    /// Drop the newest run.
    Undo,
    /// Remove every run.
    Clear,
}

fn parse_failure(s: &str) -> Result<(Provider, String), String> {
    let (provider, reason) = s
        .split_once('=')
        .ok_or_else(|| format!("expected PROVIDER=REASON, got {s:?}"))?;
    let provider: Provider = provider.parse()?;
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(format!("missing failure reason for {provider}"));
    }
    Ok((provider, reason.to_string()))
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("read {path:?}"))
}

fn read_run(path: &Path) -> Result<Run> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read run {path:?}"))?;
    serde_json::from_str(&text).with_context(|| format!("parse run json {path:?}"))
}

fn write_run(run: &Run, path: &Path) -> Result<()> {
    let text = serde_json::to_string_pretty(run).context("serialize run")?;
    std::fs::write(path, text).with_context(|| format!("write run {path:?}"))
}

fn load_settings(cli: &Cli) -> Result<CasegenConfig> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CasegenConfig::default(),
    };
    config.validate()?;

    let mut logging = config.logging.clone();
    if cli.verbose > 0 {
        logging.level = LogLevel::Info.raised_by(cli.verbose);
    }
    casegen_logging::init(&logging)?;
    Ok(config)
}

fn status_line(run: &Run, provider: Provider) -> String {
    match run.status(provider) {
        ProviderStatus::NotRequested => format!("{provider}: not requested"),
        ProviderStatus::Failed(reason) => format!("{provider}: failed ({reason})"),
        ProviderStatus::Empty => format!("{provider}: no test cases"),
        ProviderStatus::Cases(cases) => format!("{provider}: {} test cases", cases.len()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_settings(&cli)?;

    match cli.cmd {
        Command::Parse { format, openai, gemini, claude, failed, out, history } => {
            let format = format.unwrap_or(config.format);
            let inputs = [
                (Provider::OpenAi, openai),
                (Provider::Gemini, gemini),
                (Provider::Claude, claude),
            ];

            let mut reports = Vec::new();
            for (provider, path) in inputs {
                if let Some(path) = path {
                    let raw = read_input(&path)?;
                    tracing::debug!(%provider, bytes = raw.len(), "parsing response");
                    reports.push((provider, ProviderReport::Parsed(parse_response(&raw, format))));
                }
            }
            reports.extend(
                failed
                    .into_iter()
                    .map(|(provider, reason)| (provider, ProviderReport::Failed(reason))),
            );
            if reports.is_empty() {
                bail!("no provider input given; pass --openai, --gemini, --claude or --failed");
            }

            let requested: Vec<Provider> = reports.iter().map(|(p, _)| *p).collect();
            let run = aggregate(&requested, format, reports);
            write_run(&run, &out)?;

            if let Some(path) = history {
                let mut runs = RunHistory::load(&path, config.max_history)?;
                let evicted = runs.push(run.clone());
                if !evicted.is_empty() {
                    tracing::info!(evicted = evicted.len(), "history full, dropped oldest runs");
                }
                runs.save(&path)?;
            }

            println!("run {} ({format})", run.id);
            for &provider in &run.requested {
                println!("- {}", status_line(&run, provider));
            }
            println!("wrote {}", out.display());
        }

        Command::Export { run, format, requirement, out } => {
            let run = read_run(&run)?;
            let options = ExportOptions {
                format,
                requirement: requirement.or(config.requirement),
                ..ExportOptions::default()
            };
            let text = export_run(&run, &options)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, text).with_context(|| format!("write {path:?}"))?;
                    println!("wrote {}", path.display());
                }
                None => print!("{text}"),
            }
        }

        Command::Prompt { format, input } => {
            let format = format.unwrap_or(config.format);
            let description = read_input(&input)?;
            if description.trim().is_empty() {
                bail!("feature description is empty");
            }
            println!("{}", system_prompt(format));
            println!();
            println!("{}", user_prompt(&description));
        }

        Command::Edit { run, case_id, steps } => {
            let mut loaded = read_run(&run)?;
            let case_id = CaseId::from(case_id.as_str());
            let lines: Vec<String> = read_input(&steps)?.lines().map(str::to_string).collect();
            loaded.edit_steps(&case_id, lines)?;
            write_run(&loaded, &run)?;

            let count = loaded.case(&case_id).map_or(0, |c| c.steps.len());
            println!("updated {case_id}: {count} steps");
        }

        Command::History { file, action } => {
            let path = file.unwrap_or(config.history_path);
            let mut history = RunHistory::load(&path, config.max_history)?;
            match action {
                HistoryAction::List => {
                    if history.is_empty() {
                        println!("no runs recorded");
                    }
                    for run in history.iter() {
                        println!(
                            "{}  {}  {}  {} test cases",
                            run.id,
                            run.created_at.format("%Y-%m-%d %H:%M:%S"),
                            run.format,
                            run.total_cases()
                        );
                    }
                }
                HistoryAction::Undo => {
                    match history.undo() {
                        Some(run) => println!("removed {}", run.id),
                        None => println!("no runs recorded"),
                    }
                    history.save(&path)?;
                }
                HistoryAction::Clear => {
                    history.clear();
                    history.save(&path)?;
                    println!("history cleared");
                }
            }
        }
    }

    Ok(())
}
