use std::{net::SocketAddr, str::FromStr};

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 150;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY must be set when CHAT_BACKEND is `openai`")]
    MissingApiKey,

    #[error("invalid value for {name}: {value:?} ({reason})")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Which completion client serves `/api/chat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    OpenAi,
    Fallback,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Ok(Backend::OpenAi),
            "fallback" => Ok(Backend::Fallback),
            other => Err(format!("expected `openai` or `fallback`, got `{other}`")),
        }
    }
}

/// How relay failures surface on `/api/chat`.
///
/// `Strict` maps them to a non-200 status with an `error` body. `Legacy`
/// returns the failure text as a 200 `response`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMode {
    Strict,
    Legacy,
}

impl FromStr for ErrorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(ErrorMode::Strict),
            "legacy" => Ok(ErrorMode::Legacy),
            other => Err(format!("expected `strict` or `legacy`, got `{other}`")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub bind_addr: SocketAddr,
    pub backend: Backend,
    pub error_mode: ErrorMode,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let backend = parse_or(get("CHAT_BACKEND"), "CHAT_BACKEND", Backend::OpenAi)?;
        let error_mode = parse_or(get("CHAT_ERROR_MODE"), "CHAT_ERROR_MODE", ErrorMode::Strict)?;
        let max_tokens = parse_or(get("OPENAI_MAX_TOKENS"), "OPENAI_MAX_TOKENS", DEFAULT_MAX_TOKENS)?;
        if max_tokens == 0 {
            return Err(ConfigError::Invalid {
                name: "OPENAI_MAX_TOKENS",
                value: "0".into(),
                reason: "must be positive".into(),
            });
        }
        let bind_addr = parse_or(
            get("BIND_ADDR"),
            "BIND_ADDR",
            SocketAddr::from(([0, 0, 0, 0], 8080)),
        )?;

        let api_key = match (get("OPENAI_API_KEY"), backend) {
            (Some(key), _) => key,
            (None, Backend::Fallback) => String::new(),
            (None, Backend::OpenAi) => return Err(ConfigError::MissingApiKey),
        };

        Ok(Self {
            api_key,
            base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens,
            bind_addr,
            backend,
            error_mode,
        })
    }
}

fn parse_or<T>(value: Option<String>, name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    match value {
        None => Ok(default),
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}
