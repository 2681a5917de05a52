//! `rephrase config`: show or persist settings.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};
use rephrase_constant::{app, env};
use rephrase_llms::OpenAiConfig;
use rephrase_runtime::RephraseConfig;
use serde::Serialize;

use crate::cli::ConfigAction;
use crate::output;

#[derive(Serialize)]
struct ConfigView {
    model: String,
    mode: String,
    max_turns_considered: usize,
    max_history_tokens: usize,
    base_url: String,
    api_key: Option<String>,
    env_file: Option<String>,
}

pub fn handle(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => show(),
        ConfigAction::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let config = RephraseConfig::from_env();
    let endpoint = OpenAiConfig::from_env();
    let view = ConfigView {
        model: config.model,
        mode: config.mode.to_string(),
        max_turns_considered: config.max_turns_considered,
        max_history_tokens: config.max_history_tokens,
        base_url: endpoint.base_url,
        api_key: (!endpoint.api_key.is_empty()).then(|| mask_key(&endpoint.api_key)),
        env_file: config_path().ok().map(|p| p.display().to_string()),
    };

    if output::is_json() {
        output::data("config", &view);
        return Ok(());
    }

    output::header(&format!("{} configuration", app::DISPLAY_NAME));
    output::kv("model", &view.model);
    output::kv("mode", &view.mode);
    output::kv("max turns", &view.max_turns_considered.to_string());
    output::kv("max history tokens", &view.max_history_tokens.to_string());
    output::kv("base url", &view.base_url);
    output::kv("api key", view.api_key.as_deref().unwrap_or("(not set)"));
    if let Some(path) = &view.env_file {
        output::dim(&format!("Settings file: {path}"));
    }
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let var = env_var_for(key)?;
    let value = value.trim();
    if value.is_empty() {
        bail!("Value for '{key}' must not be empty");
    }

    let path = config_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let existing = if path.exists() {
        fs::read_to_string(&path)?
    } else {
        String::new()
    };
    fs::write(&path, upsert_export(&existing, var, value))?;
    restrict_permissions(&path)?;

    let shown = if var == env::API_KEY {
        mask_key(value)
    } else {
        value.to_string()
    };
    output::success(&format!("Saved {var}={shown} to {}", path.display()));
    Ok(())
}

fn env_var_for(key: &str) -> Result<&'static str> {
    match key.trim().to_ascii_lowercase().replace('_', "-").as_str() {
        "model" => Ok(env::MODEL),
        "mode" => Ok(env::MODE),
        "max-turns" => Ok(env::MAX_TURNS),
        "max-history-tokens" => Ok(env::MAX_HISTORY_TOKENS),
        "api-key" => Ok(env::API_KEY),
        "base-url" => Ok(env::BASE_URL),
        other => Err(anyhow!(
            "Unknown setting '{other}'. Expected one of: model, mode, max-turns, max-history-tokens, api-key, base-url"
        )),
    }
}

fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(app::DATA_DIR).join(app::ENV_FILE))
}

/// Rewrite an env file with `var` set, keeping the other `export` lines sorted.
fn upsert_export(existing: &str, var: &str, value: &str) -> String {
    let mut entries: BTreeMap<String, String> = existing
        .lines()
        .filter_map(|line| {
            let (k, v) = line.trim().strip_prefix("export ")?.split_once('=')?;
            Some((k.trim().to_string(), v.trim().to_string()))
        })
        .collect();
    entries.insert(var.to_string(), format!("\"{}\"", value.replace('"', "\\\"")));

    let mut content = format!(
        "# {} configuration\n# Loaded automatically; can also be sourced: source ~/{}/{}\n\n",
        app::DISPLAY_NAME,
        app::DATA_DIR,
        app::ENV_FILE
    );
    for (k, v) in &entries {
        content.push_str(&format!("export {k}={v}\n"));
    }
    content
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
