use crate::completion::gemini::DEFAULT_API_BASE;
use anyhow::{anyhow, Context, Result};
use std::env;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Only the API key is required;
    /// there is no built-in credential.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| anyhow!("GEMINI_API_KEY must be set"))?;

        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("Failed to parse PORT {port:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            api_base: lookup("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            port,
        })
    }
}
