use config::{Config, ConfigError, File};
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Debug)]
pub enum Environment {
    Development,
    Production,
}

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub storage: StorageSettings,
    pub copy_client: CopyClientSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    pub base_url: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct StorageSettings {
    pub data_dir: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct CopyClientSettings {
    pub base_url: String,
    pub model: String,
    // secrecy protects secret information and prevents them to be exposed (eg: via logs).
    // The key is optional: a deployment without one still serves signups, only the
    // copy endpoint reports itself as unconfigured.
    pub api_key: Option<Secret<String>>,
}

impl Settings {
    pub fn get_address(&self) -> String {
        format!(
            "{}:{}",
            self.application.get_host(),
            self.application.get_port()
        )
    }

    pub fn get_app_base_url(&self) -> String {
        self.application.get_base_url()
    }

    pub fn get_storage_data_dir(&self) -> String {
        self.storage.get_data_dir()
    }

    pub fn get_copy_client_base_url(&self) -> String {
        self.copy_client.get_base_url()
    }

    pub fn get_copy_client_model(&self) -> String {
        self.copy_client.get_model()
    }

    pub fn get_copy_client_api_key(&self) -> Option<Secret<String>> {
        self.copy_client.get_api_key()
    }

    pub fn set_app_port(&mut self, port: u16) {
        self.application.port = port;
    }

    pub fn set_storage_data_dir(&mut self, data_dir: String) {
        self.storage.data_dir = data_dir;
    }

    pub fn set_copy_client_base_url(&mut self, new_base_url: String) {
        self.copy_client.base_url = new_base_url;
    }

    pub fn set_copy_client_api_key(&mut self, api_key: Option<Secret<String>>) {
        self.copy_client.api_key = api_key;
    }
}

impl ApplicationSettings {
    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub fn get_host(&self) -> String {
        self.host.clone()
    }

    pub fn get_base_url(&self) -> String {
        self.base_url.clone()
    }
}

impl StorageSettings {
    pub fn get_data_dir(&self) -> String {
        self.data_dir.clone()
    }
}

impl CopyClientSettings {
    pub fn get_base_url(&self) -> String {
        self.base_url.clone()
    }

    pub fn get_model(&self) -> String {
        self.model.clone()
    }

    pub fn get_api_key(&self) -> Option<Secret<String>> {
        self.api_key.clone()
    }
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            unknown_env => Err(format!(
                "{} is not supported environment. Use either 'development' or 'production'.",
                unknown_env
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let root_path = std::env::current_dir().expect("Failed to determine the current directory");
    let config_directory = root_path.join("config");
    // Uses development environment by default
    let enviroment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "development".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT");
    let config_base_filepath = config_directory.join("base");
    let config_env_filepath = config_directory.join(enviroment.as_str());

    // It merges the base configuration file with the one from the specific environment (development or production)
    let settings = Config::builder()
        .add_source(File::from(config_base_filepath).required(true))
        .add_source(File::from(config_env_filepath).required(true))
        // Merge settings from environment variables with a prefix of APP and "__" separator
        // E.g APP_COPY_CLIENT__API_KEY would set Settings.copy_client.api_key
        .add_source(config::Environment::with_prefix("app").separator("__"))
        .build()?;

    tracing::info!("Application environment = {:?}", enviroment);

    // Try to convert the value from the configuration file into a Settings type
    settings.try_deserialize()
}
