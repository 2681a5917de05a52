//! CLI entry point for the query rephraser.

mod cli;
mod commands;
mod history;
mod output;

use std::path::{Path, PathBuf};

use clap::Parser;
use rephrase_constant::app;
use rephrase_observability::ObservabilityConfig;

use crate::cli::Cli;

/// Walk up from `start` looking for `relative`; at most 32 levels.
fn find_upwards(start: &Path, relative: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    for _ in 0..32 {
        let candidate = dir.join(relative);
        if candidate.exists() {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Env files to load, highest precedence first. dotenvy never overrides a
/// variable that is already set, so the first file to define a key wins and
/// the process environment beats all of them.
fn env_files(cwd: Option<&Path>, home: Option<&Path>) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Some(cwd) = cwd {
        let project_env = Path::new(app::DATA_DIR).join(app::ENV_FILE);
        files.extend(find_upwards(cwd, &project_env));
        files.extend(find_upwards(cwd, Path::new(".env")));
    }
    if let Some(home) = home {
        let global_env = home.join(app::DATA_DIR).join(app::ENV_FILE);
        if global_env.exists() && !files.contains(&global_env) {
            files.push(global_env);
        }
    }
    files
}

fn load_env_files() {
    let cwd = std::env::current_dir().ok();
    let home = dirs::home_dir();
    for path in env_files(cwd.as_deref(), home.as_deref()) {
        let _ = dotenvy::from_path(&path);
    }
}

fn init_tracing(verbose: bool) {
    let mut config = ObservabilityConfig::from_env().with_version(app::VERSION);
    if verbose {
        config = config.with_log_level("debug");
    }
    if let Err(e) = rephrase_observability::init(config) {
        output::warning(&format!("tracing disabled: {e}"));
    }
}

#[tokio::main]
async fn main() {
    load_env_files();
    let cli = Cli::parse();
    output::init(cli.output);
    init_tracing(cli.verbose);

    let result = commands::handle(cli).await;
    rephrase_observability::shutdown();

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
