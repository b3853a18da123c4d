use std::path::PathBuf;

use common_utils::consts;
use domain_types::{router_data::GatewaySettings, types::Proxy};
use hyperswitch_masking::Secret;

use crate::logger::config::Log;

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Config {
    pub common: Common,
    pub server: Server,
    pub log: Log,
    #[serde(default)]
    pub proxy: Proxy,
    pub connectors: Connectors,
    pub gateway: Gateway,
    #[serde(default)]
    pub clients: Clients,
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Common {
    pub environment: consts::Env,
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Connectors {
    pub paysera: PayseraConnector,
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct PayseraConnector {
    /// Hosted payment page the payer is redirected to
    pub pay_url: String,
}

/// Stored gateway settings plus the public callback endpoint of this service.
#[derive(Clone, serde::Deserialize, Debug)]
pub struct Gateway {
    pub project_id: String,
    pub project_password: Secret<String>,
    #[serde(default)]
    pub sandbox: Option<String>,
    pub callback_url: String,
}

impl Gateway {
    pub fn settings(&self) -> GatewaySettings {
        GatewaySettings {
            project_id: self.project_id.clone(),
            project_password: self.project_password.clone(),
            sandbox: self.sandbox.clone(),
        }
    }
}

/// Where client ids read back from order ids are confirmed.
#[derive(Clone, serde::Deserialize, Debug, Default)]
pub struct Clients {
    /// Base URL answering `GET {lookup_url}/{client_id}` with 2xx for known clients
    #[serde(default)]
    pub lookup_url: Option<String>,
    /// Used when no lookup URL is configured
    #[serde(default)]
    pub known_ids: Vec<String>,
}

impl Config {
    /// Function to build the configuration by picking it from default locations
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::new_with_config_path(None)
    }

    /// Function to build the configuration by picking it from default locations
    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> Result<Self, config::ConfigError> {
        let env = consts::Env::current_env();
        let config_path = Self::config_path(&env, explicit_config_path);

        let config = Self::builder(&env)?
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(consts::ENV_PREFIX)
                    .try_parsing(true)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("clients.known_ids"),
            )
            .build()?;

        #[allow(clippy::print_stderr)]
        let config: Self = serde_path_to_error::deserialize(config).map_err(|error| {
            eprintln!("Unable to deserialize application configuration: {error}");
            error.into_inner()
        })?;

        Ok(config)
    }

    pub fn builder(
        environment: &consts::Env,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            // "env" can't be altered by config field.
            .set_override("env", environment.to_string())
    }

    /// Config path.
    pub fn config_path(
        environment: &consts::Env,
        explicit_config_path: Option<PathBuf>,
    ) -> PathBuf {
        let mut config_path = PathBuf::new();
        if let Some(explicit_config_path_val) = explicit_config_path {
            config_path.push(explicit_config_path_val);
        } else {
            config_path.push(workspace_path());
            config_path.push("config");
            config_path.push(environment.config_path());
        }
        config_path
    }
}

pub fn workspace_path() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let mut path = PathBuf::from(manifest_dir);
        path.pop();
        path.pop();
        path
    } else {
        PathBuf::from(".")
    }
}
