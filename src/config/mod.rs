use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub google: GoogleConfig,
    pub models: ModelConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    3000
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub api_key: String,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model used for answer generation (e.g., gemini-1.5-flash)
    pub text_model: String,
}

#[derive(Debug, Clone)]
pub struct StaticFilesConfig {
    /// Directory served at the router root.
    pub dir: String,
}

impl ServerConfig {
    fn load() -> Result<Self, AppError> {
        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let server = ServerConfig::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(AppConfig {
            server,
            google: GoogleConfig {
                // No default in any environment: the relay is useless without it.
                api_key: get_env("GOOGLE_API_KEY", None, is_prod)?,
            },
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", Some("gemini-1.5-flash"), is_prod)?,
            },
            static_files: StaticFilesConfig {
                dir: get_env("STATIC_DIR", Some("public"), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
