use anyhow::Result;
use clap::Parser;

use bump_release::cli::{run_bump_workflow, BumpOutcome, BumpWorkflowArgs};
use bump_release::config::{self, Config};
use bump_release::domain::BumpRequest;
use bump_release::exec::ProcessRunner;
use bump_release::git::Git2Repository;
use bump_release::{ui, BumpError};

#[derive(clap::Parser)]
#[command(
    name = "bump-release",
    version,
    about = "Bump the project version, commit it, and push a matching tag"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Print the effective configuration and exit")]
    print_config: bool,

    #[arg(
        value_name = "REQUEST",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Version, bump rule, or arguments forwarded to '<version manager> version' \
                (falls back to RELEASE_VERSION)"
    )]
    request: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(e.exit_code());
        }
    };

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    if let Err(e) = release(&args, &config) {
        match e {
            BumpError::VersionUnchanged(_) => ui::display_warning(&e.to_string()),
            _ => ui::display_error(&e.to_string()),
        }
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn release(args: &Args, config: &Config) -> bump_release::Result<BumpOutcome> {
    let request = BumpRequest::from_cli(&args.request)?;

    let workdir = std::env::current_dir()?;
    let repo = Git2Repository::open(&workdir)?;
    let runner = ProcessRunner::new(&workdir);

    let workflow_args = BumpWorkflowArgs { request, workdir };
    let outcome = run_bump_workflow(&workflow_args, config, &runner, &repo)?;
    ui::display_summary(&outcome);

    Ok(outcome)
}
