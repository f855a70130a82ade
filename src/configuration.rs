//! src/configuration.rs
use config::{Config, ConfigError, File};
use secrecy::Secret;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub supabase: SupabaseSettings,
}

impl Settings {
    pub fn set_supabase_url(&mut self, supabase_url: String) {
        self.supabase.url = supabase_url;
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SupabaseSettings {
    pub url: String,
    pub api_key: Secret<String>,
    pub tables: TableSettings,
}

/// Where each data route reads from.
#[derive(Deserialize, Clone, Debug)]
pub struct TableSettings {
    pub products: TableSource,
    pub ranking: TableSource,
    pub scores: TableSource,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TableSource {
    pub name: String,
    /// PostgREST order expression, e.g. `score_global_final.desc`.
    #[serde(default)]
    pub order: Option<String>,
}

/// `SUPABASE_*` variables, named the way the hosted client libraries
/// expect them.
#[derive(Deserialize, Debug)]
struct SupabaseOverrides {
    url: Option<String>,
    key: Option<Secret<String>>,
    table_produtos: Option<String>,
    view_ranking: Option<String>,
    view_pontuacao: Option<String>,
    order_produtos: Option<String>,
    order_ranking: Option<String>,
    order_pontuacao: Option<String>,
}

impl SupabaseSettings {
    fn apply(&mut self, overrides: SupabaseOverrides) {
        if let Some(url) = overrides.url {
            self.url = url;
        }
        if let Some(key) = overrides.key {
            self.api_key = key;
        }

        let tables = &mut self.tables;
        tables.products.apply(overrides.table_produtos, overrides.order_produtos);
        tables.ranking.apply(overrides.view_ranking, overrides.order_ranking);
        tables.scores.apply(overrides.view_pontuacao, overrides.order_pontuacao);
    }
}

impl TableSource {
    fn apply(&mut self, name: Option<String>, order: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
        if order.is_some() {
            self.order = order;
        }
    }
}

#[derive(PartialEq, Debug)]
pub enum Environment {
    Local,
    Production,
}
impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_ref() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                s
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    // Deployments set variables directly, so a missing `.env` is fine.
    dotenvy::dotenv().ok();

    load(&configuration_directory, std::env::vars())
}

/// Builds the settings from the files in `configuration_directory`, with
/// `vars` standing in for the process environment.
pub fn load<I>(configuration_directory: &Path, vars: I) -> Result<Settings, ConfigError>
where
    I: IntoIterator<Item = (String, String)>,
{
    // Empty values count as unset.
    let vars: HashMap<String, String> = vars
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect();

    // Detect the running environment.
    // Default to `local` if not specified.
    let environment: Environment = vars
        .get("APP_ENVIRONMENT")
        .cloned()
        .unwrap_or_else(|| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    let settings = Config::builder()
        .add_source(File::from(configuration_directory.join("base")).required(true))
        .add_source(File::from(configuration_directory.join(environment.as_str())).required(true))
        .set_override_option("application.port", vars.get("PORT").cloned())?
        .build()?;

    let mut settings: Settings = settings.try_deserialize()?;

    let overrides = envy::prefixed("SUPABASE_")
        .from_iter::<_, SupabaseOverrides>(vars)
        .map_err(|e| ConfigError::Foreign(Box::new(e)))?;
    settings.supabase.apply(overrides);

    Ok(settings)
}
