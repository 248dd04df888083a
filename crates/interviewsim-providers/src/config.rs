//! Configuration loading and scorer factory.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use interviewsim_core::scoring::DeterministicScorer;
use interviewsim_core::session::DEFAULT_QUESTION_CAP;
use interviewsim_core::traits::ResponseScorer;

use crate::anthropic::{DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use crate::fallback::FallbackScorer;
use crate::remote::{RemoteEvaluationClient, DEFAULT_ENDPOINT_URL};

/// Which scoring strategy an interview uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringMode {
    #[default]
    Deterministic,
    RemoteEvaluation,
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringMode::Deterministic => write!(f, "deterministic"),
            ScoringMode::RemoteEvaluation => write!(f, "remote-evaluation"),
        }
    }
}

impl FromStr for ScoringMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deterministic" | "local" => Ok(ScoringMode::Deterministic),
            "remote-evaluation" | "remote" | "llm" => Ok(ScoringMode::RemoteEvaluation),
            other => Err(format!("unknown scoring mode: {other}")),
        }
    }
}

/// Where the remote-evaluation strategy sends responses.
///
/// Note: Custom Debug impl masks the API key to prevent accidental exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Model provider settings used by the evaluation endpoint server.
#[derive(Clone, Serialize, Deserialize)]
pub struct AnthropicConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_anthropic_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn mask(key: &Option<String>) -> Option<&'static str> {
    key.as_ref().map(|_| "***")
}

impl fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("endpoint_url", &self.endpoint_url)
            .field("api_key", &mask(&self.api_key))
            .finish()
    }
}

impl fmt::Debug for AnthropicConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnthropicConfig")
            .field("api_key", &mask(&self.api_key))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

fn default_endpoint_url() -> String {
    DEFAULT_ENDPOINT_URL.to_string()
}
fn default_anthropic_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}
fn default_port() -> u16 {
    3001
}
fn default_question_cap() -> usize {
    DEFAULT_QUESTION_CAP
}
fn default_records_path() -> PathBuf {
    PathBuf::from("./interviewsim-records.json")
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            api_key: None,
        }
    }
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_anthropic_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

/// Top-level interviewsim configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewsimConfig {
    /// Scoring strategy for interviews.
    #[serde(default)]
    pub scoring: ScoringMode,
    /// Maximum number of questions per interview.
    #[serde(default = "default_question_cap")]
    pub question_cap: usize,
    /// JSON file holding finished interview records.
    #[serde(default = "default_records_path")]
    pub records_path: PathBuf,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub anthropic: AnthropicConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for InterviewsimConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringMode::default(),
            question_cap: default_question_cap(),
            records_path: default_records_path(),
            remote: RemoteConfig::default(),
            anthropic: AnthropicConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + end];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// Resolve env vars in an optional credential; empty results count as unset.
fn resolve_key(key: &Option<String>) -> Option<String> {
    key.as_deref()
        .map(resolve_env_vars)
        .filter(|k| !k.trim().is_empty())
}

impl InterviewsimConfig {
    fn resolve(mut self) -> Self {
        self.remote.endpoint_url = resolve_env_vars(&self.remote.endpoint_url);
        self.remote.api_key = resolve_key(&self.remote.api_key);
        self.anthropic.base_url = resolve_env_vars(&self.anthropic.base_url);
        self.anthropic.api_key = resolve_key(&self.anthropic.api_key);
        self
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("ANTHROPIC_API_KEY") {
            if !key.trim().is_empty() {
                self.anthropic.api_key = Some(key);
            }
        }
        if let Ok(key) = std::env::var("INTERVIEWSIM_API_KEY") {
            if !key.trim().is_empty() {
                self.remote.api_key = Some(key);
            }
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `interviewsim.toml` in the current directory
/// 2. `~/.config/interviewsim/config.toml`
///
/// Environment variable overrides: `ANTHROPIC_API_KEY`, `INTERVIEWSIM_API_KEY`.
pub fn load_config() -> Result<InterviewsimConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<InterviewsimConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("interviewsim.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => InterviewsimConfig::default(),
    };

    config.apply_env_overrides();
    Ok(config)
}

/// Parse a TOML config document and resolve `${VAR}` references.
pub fn parse_config(content: &str) -> Result<InterviewsimConfig> {
    let config: InterviewsimConfig = toml::from_str(content)?;
    anyhow::ensure!(config.question_cap >= 1, "question_cap must be at least 1");
    Ok(config.resolve())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("interviewsim"))
}

/// Build the scorer for `mode`.
///
/// The remote strategy is wrapped in [`FallbackScorer`]. A missing credential
/// is not an error here; it surfaces as a configuration error on the first
/// evaluation.
pub fn create_scorer(mode: ScoringMode, config: &InterviewsimConfig) -> Arc<dyn ResponseScorer> {
    match mode {
        ScoringMode::Deterministic => Arc::new(DeterministicScorer),
        ScoringMode::RemoteEvaluation => {
            if config.remote.api_key.is_none() {
                tracing::warn!("remote evaluation selected without an API key");
            }
            Arc::new(FallbackScorer::new(RemoteEvaluationClient::new(
                Some(config.remote.endpoint_url.clone()),
                config.remote.api_key.clone(),
            )))
        }
    }
}
