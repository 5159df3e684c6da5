// src/config.rs
use std::{ffi::OsString, path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};

use crate::services::model_client::GenerationParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    Rules,
    Model,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub params: GenerationParams,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8500".to_string(),
            timeout: Duration::from_secs(60),
            params: GenerationParams::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub engine: EngineKind,
    pub log_dir: PathBuf,
    pub model: ModelConfig,
}

/// Command line, with every flag also readable from a `CHATBOT_*` variable.
#[derive(Debug, Parser)]
#[command(name = "multilingual-chatbot", version, about = "Multilingual chatbot API")]
pub struct Cli {
    /// Host to bind.
    #[arg(long, env = "CHATBOT_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "CHATBOT_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Responder to serve.
    #[arg(long, env = "CHATBOT_ENGINE", value_enum, ignore_case = true, default_value_t = EngineKind::Rules)]
    pub engine: EngineKind,

    /// Directory for log files.
    #[arg(long, env = "CHATBOT_LOG_DIR", default_value = "logs")]
    pub log_dir: PathBuf,

    /// Base URL of the inference server.
    #[arg(long, env = "CHATBOT_MODEL_URL", default_value = "http://127.0.0.1:8500")]
    pub model_url: String,

    /// Per-request timeout for the inference server, in seconds.
    #[arg(
        long,
        env = "CHATBOT_MODEL_TIMEOUT_SECS",
        default_value_t = 60,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub model_timeout_secs: u64,

    #[arg(
        long,
        env = "CHATBOT_MAX_LENGTH",
        default_value_t = 100,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_length: u32,

    #[arg(
        long,
        env = "CHATBOT_NUM_BEAMS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub num_beams: u32,

    #[arg(long, env = "CHATBOT_TEMPERATURE", default_value_t = 0.7, value_parser = parse_temperature)]
    pub temperature: f32,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            host: cli.host,
            port: cli.port,
            engine: cli.engine,
            log_dir: cli.log_dir,
            model: ModelConfig {
                base_url: cli.model_url,
                timeout: Duration::from_secs(cli.model_timeout_secs),
                params: GenerationParams {
                    max_length: cli.max_length,
                    num_beams: cli.num_beams,
                    temperature: cli.temperature,
                    ..GenerationParams::default()
                },
            },
        }
    }
}

impl Config {
    /// Parse the process arguments and environment, loading `.env` first
    /// when present. Exits with a usage message on invalid values.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Cli::parse().into()
    }

    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).map(Config::from)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_temperature(raw: &str) -> Result<f32, String> {
    let value: f32 = raw.trim().parse().map_err(|e| format!("{e}"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err("must be a positive number".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("multilingual-chatbot").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_bind_all_interfaces_on_8000() {
        let cfg = parse(&[]).unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8000");
        assert_eq!(cfg.engine, EngineKind::Rules);
        assert_eq!(cfg.log_dir, PathBuf::from("logs"));
        assert_eq!(cfg.model, ModelConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = parse(&[
            "--host", "127.0.0.1",
            "--port", "9000",
            "--engine", "Model",
            "--log-dir", "/var/log/chatbot",
            "--model-url", "http://inference:8080/",
            "--model-timeout-secs", "5",
            "--num-beams", "3",
            "--temperature", "1.5",
        ])
        .unwrap();
        assert_eq!(cfg.bind_addr(), "127.0.0.1:9000");
        assert_eq!(cfg.engine, EngineKind::Model);
        assert_eq!(cfg.log_dir, PathBuf::from("/var/log/chatbot"));
        assert_eq!(cfg.model.base_url, "http://inference:8080/");
        assert_eq!(cfg.model.timeout, Duration::from_secs(5));
        assert_eq!(cfg.model.params.num_beams, 3);
        assert_eq!(cfg.model.params.temperature, 1.5);
        assert_eq!(cfg.model.params.max_length, 100);
    }

    #[test]
    fn rejects_bad_values() {
        let err = parse(&["--port", "eighty"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = parse(&["--engine", "gpt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);

        let err = parse(&["--temperature", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = parse(&["--model-timeout-secs", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = parse(&["--num-beams", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
