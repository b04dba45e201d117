use anyhow::Result;
use c1ws_policy::{connect, fetch_policy_details, logging, snapshot, Prompter, ToolConfig};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

const POLICY_PROMPT: &str = "Which Policy you want to retrieve: ";

#[derive(Parser, Debug)]
#[command(name = "c1ws-get-policy")]
#[command(about = "Retrieve a Workload Security policy by name and print its full details")]
#[command(version)]
struct Args {
    /// Cloud One region (e.g., de-1); prompted for when omitted
    #[arg(long)]
    region: Option<String>,

    /// Exact policy name; prompted for when omitted
    #[arg(long)]
    policy: Option<String>,

    /// Also write the details to this file (usable as --source-file for c1ws-copy-policy)
    #[arg(long)]
    save: Option<PathBuf>,

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

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let client = connect(&mut prompter, &config, args.region)?;
    let name = prompter.ask_unless(args.policy, POLICY_PROMPT)?;

    tracing::info!("Fetching policy '{}' from {}", name, client.base_url());
    let details = fetch_policy_details(&client, &name).await?;
    println!("{}", serde_json::to_string_pretty(&details)?);

    if let Some(path) = args.save {
        snapshot::save(&path, &details)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_flags_preanswer_prompts() {
        let args = Args::try_parse_from([
            "c1ws-get-policy",
            "--region",
            "de-1",
            "--policy",
            "Linux Server",
            "--save",
            "linux.json",
        ])
        .expect("parse");
        assert_eq!(args.region.as_deref(), Some("de-1"));
        assert_eq!(args.policy.as_deref(), Some("Linux Server"));
        assert_eq!(args.save, Some(PathBuf::from("linux.json")));
    }
}
