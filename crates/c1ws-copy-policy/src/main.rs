use anyhow::Result;
use c1ws_policy::{
    connect, execute, logging, plan_copy, snapshot, CopySource, ExecuteOptions, PolicySelector,
    Prompter, ToolConfig,
};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

const SOURCE_PROMPT: &str = "Enter the name of the source policy to copy from: ";
const TARGET_PROMPT: &str = "Enter the name of the target policy to update: ";

#[derive(Parser, Debug)]
#[command(name = "c1ws-copy-policy")]
#[command(
    about = "Copy the configuration of one Workload Security policy onto another",
    long_about = "Copy the configuration of one Workload Security policy onto another.\n\n\
                  Policies are given by name, or by path from the root of the policy tree \
                  using '->' between names (e.g. \"Base Policy -> Linux Server\"). The \
                  target keeps its own ID, name, description and parent."
)]
#[command(version)]
struct Args {
    /// Cloud One region (e.g., de-1); prompted for when omitted
    #[arg(long)]
    region: Option<String>,

    /// Source policy name or path; prompted for when omitted
    #[arg(long, conflicts_with = "source_file")]
    source: Option<String>,

    /// Target policy name or path; prompted for when omitted
    #[arg(long)]
    target: Option<String>,

    /// Use policy details saved by `c1ws-get-policy --save` as the source
    #[arg(long)]
    source_file: Option<PathBuf>,

    /// Resolve both policies and print the payload without updating
    #[arg(long)]
    dry_run: bool,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    yes: bool,

    /// YAML config file (region, base_url, timeout_secs, logging)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let config = ToolConfig::load(args.config.as_deref())?;
    logging::init(&config.logging);

    // A missing snapshot fails before any prompt or request.
    let saved = match &args.source_file {
        Some(path) => Some(snapshot::load(path)?),
        None => None,
    };

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let client = connect(&mut prompter, &config, args.region)?;
    let source = match saved {
        Some(detail) => CopySource::Snapshot(detail),
        None => CopySource::Remote(PolicySelector::parse(
            &prompter.ask_unless(args.source, SOURCE_PROMPT)?,
        )),
    };
    let target = PolicySelector::parse(&prompter.ask_unless(args.target, TARGET_PROMPT)?);

    let plan = plan_copy(&client, &source, &target).await?;
    tracing::debug!(
        fields = plan.payload.as_object().map_or(0, |o| o.len()),
        "copy payload built"
    );

    let options = ExecuteOptions {
        dry_run: args.dry_run,
        assume_yes: args.yes,
    };
    execute(&plan, &client, &mut prompter, options).await?;
    Ok(())
}
