use crate::domain::contact::models::{
    email::{EmailAddress, EmailError},
    owner::OwnerProfile,
};
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

const OWNER_EMAIL_PLACEHOLDER: &str = "your-email@example.com";

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub general: GeneralSettings,
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub contact: ContactSettings,
}

impl Settings {
    pub fn log_level(&self) -> String {
        self.general.log_level.clone()
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct GeneralSettings {
    pub log_level: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub authorization_token: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<EmailAddress, EmailError> {
        EmailAddress::parse(self.sender_email.clone())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct ContactSettings {
    #[serde(default = "default_owner_email")]
    pub owner_email: String,
    pub owner_name: String,
    pub owner_title: String,
    pub github_url: String,
    pub linkedin_url: String,
    pub notification_sender_name: String,
}

fn default_owner_email() -> String {
    OWNER_EMAIL_PLACEHOLDER.to_string()
}

impl ContactSettings {
    pub fn owner_profile(&self) -> Result<OwnerProfile, EmailError> {
        Ok(OwnerProfile {
            email: EmailAddress::parse(self.owner_email.clone())?,
            name: self.owner_name.clone(),
            title: self.owner_title.clone(),
            github_url: self.github_url.clone(),
            linkedin_url: self.linkedin_url.clone(),
            notification_sender_name: self.notification_sender_name.clone(),
        })
    }
}

/// Layers, last one wins: `configuration/base`, `configuration/{environment}`,
/// `APP_*` variables (`__` separates nested keys), then the provider-style
/// `RESEND_API_KEY` and `CONTACT_EMAIL` variables.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let mut settings = config::Config::default();
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {e}"))
    })?;
    let configuration_directory = base_path.join("configuration");

    settings.merge(config::File::from(configuration_directory.join("base")).required(true))?;

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    settings.merge(
        config::File::from(configuration_directory.join(environment.as_str())).required(true),
    )?;

    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    if let Some(api_key) = non_empty_var("RESEND_API_KEY") {
        settings.set("email_client.authorization_token", api_key)?;
    }
    if let Some(owner_email) = non_empty_var("CONTACT_EMAIL") {
        settings.set("contact.owner_email", owner_email)?;
    }

    settings.try_into()
}

/// An empty variable counts as unset.
fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

#[derive(Debug)]
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
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
