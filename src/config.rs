//! Configuration for the cloud storage front end
//!
//! The front end reads a single static configuration object: branding text,
//! backend connectivity, form validation rules and feature toggles. Values
//! are loaded once at startup from config.toml with environment overrides
//! and never change afterwards.
//!
//! Field names are snake_case on the way in (TOML, environment) and
//! camelCase on the way out, so the serialized object matches the field
//! names the front end has always used (`githubLink`, `validUsername`, ...).

use config::{Config, Environment, File, FileFormat};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Complete front-end configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(flatten)]
    pub branding: BrandingConfig,

    #[serde(flatten)]
    pub api: ApiConfig,

    #[serde(flatten)]
    pub forms: FormValidationConfig,

    #[serde(flatten)]
    pub features: FeatureFlags,
}

/// Text shown in the page header
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct BrandingConfig {
    /// Link to the project repository, shown in the header
    pub github_link: String,

    /// Application name displayed in the header
    pub main_name: String,
}

/// Backend connectivity
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ApiConfig {
    /// Backend address. Empty means same origin as the front end;
    /// under docker compose this is the backend's name on the docker network
    pub base_url: String,

    /// API prefix of the backend
    pub base_api: String,
}

/// Form validation rules
///
/// The rules are data only. The consuming application applies them while
/// the user types; nothing in this crate evaluates the patterns.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FormValidationConfig {
    /// When true the login form validates input and enables the submit
    /// button only for valid data. When false the form submits as-is
    pub validate_login_form: bool,
    pub validate_registration_form: bool,

    pub valid_username: ValidationRule,
    pub valid_password: ValidationRule,
    pub valid_folder_name: ValidationRule,
}

/// Length bounds and a regex pattern for one input field
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct ValidationRule {
    pub min_length: u32,
    pub max_length: u32,
    pub pattern: String,
}

/// Toggles for optional file-management interactions
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FeatureFlags {
    /// Allow moving selected files and folders by dragging them into
    /// neighboring folders
    pub is_move_allowed: bool,

    /// Allow cut and paste of files/folders (uses the backend /move endpoint)
    pub is_cut_paste_allowed: bool,

    /// Allow the custom context menu on files and selections
    pub is_file_context_menu_allowed: bool,

    /// Allow page shortcuts: Ctrl+X, Ctrl+V, Del on selected items
    pub is_shortcuts_allowed: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            branding: BrandingConfig {
                github_link:
                    "https://gist.github.com/zhukovsd/1052313b231bb1eebd5b910990ee1050".to_string(),
                main_name: "CLOUD".to_string(),
            },
            api: ApiConfig {
                base_url: String::new(),
                base_api: "/api".to_string(),
            },
            forms: FormValidationConfig {
                validate_login_form: true,
                validate_registration_form: true,
                valid_username: ValidationRule {
                    min_length: 3,
                    max_length: 20,
                    pattern: "^[a-zA-Z0-9]+[a-zA-Z_0-9]*[a-zA-Z0-9]+$".to_string(),
                },
                valid_password: ValidationRule {
                    min_length: 6,
                    max_length: 20,
                    pattern: r#"^[a-zA-Z0-9!@#$%^&*(),.?":{}|<>[\]/`~+=-_';]*$"#.to_string(),
                },
                valid_folder_name: ValidationRule {
                    min_length: 1,
                    max_length: 200,
                    pattern: r#"^[^/\\:*?"<>|]+$"#.to_string(),
                },
            },
            features: FeatureFlags {
                is_move_allowed: true,
                is_cut_paste_allowed: true,
                is_file_context_menu_allowed: true,
                is_shortcuts_allowed: true,
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml with environment overrides
    ///
    /// Environment variables use the CLOUD_UI prefix with `__` separating
    /// nested keys, e.g. CLOUD_UI_VALID_USERNAME__MAX_LENGTH. A missing
    /// config.toml falls back to the built-in defaults (environment
    /// overrides still apply); a malformed config.toml is an error.
    pub fn load() -> Result<Self, ConfigError> {
        // Try production path first, then development path
        let config_paths = [
            "cloud-ui-config/config", // Docker production: /app/cloud-ui-config/config.toml
            "config",                 // Local development: ./config.toml
        ];

        let environment = Environment::with_prefix("CLOUD_UI")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true);

        Self::load_from(&config_paths, environment)
    }

    /// Layer the sources: built-in defaults, then the first config.toml
    /// that exists, then environment overrides
    fn load_from(config_paths: &[&str], environment: Environment) -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();
        let rules = defaults.forms;

        let mut builder = Config::builder()
            .set_default("github_link", defaults.branding.github_link)?
            .set_default("main_name", defaults.branding.main_name)?
            .set_default("base_url", defaults.api.base_url)?
            .set_default("base_api", defaults.api.base_api)?
            .set_default("validate_login_form", rules.validate_login_form)?
            .set_default("validate_registration_form", rules.validate_registration_form)?
            .set_default(
                "valid_username.min_length",
                u64::from(rules.valid_username.min_length),
            )?
            .set_default(
                "valid_username.max_length",
                u64::from(rules.valid_username.max_length),
            )?
            .set_default("valid_username.pattern", rules.valid_username.pattern)?
            .set_default(
                "valid_password.min_length",
                u64::from(rules.valid_password.min_length),
            )?
            .set_default(
                "valid_password.max_length",
                u64::from(rules.valid_password.max_length),
            )?
            .set_default("valid_password.pattern", rules.valid_password.pattern)?
            .set_default(
                "valid_folder_name.min_length",
                u64::from(rules.valid_folder_name.min_length),
            )?
            .set_default(
                "valid_folder_name.max_length",
                u64::from(rules.valid_folder_name.max_length),
            )?
            .set_default("valid_folder_name.pattern", rules.valid_folder_name.pattern)?
            .set_default("is_move_allowed", defaults.features.is_move_allowed)?
            .set_default("is_cut_paste_allowed", defaults.features.is_cut_paste_allowed)?
            .set_default(
                "is_file_context_menu_allowed",
                defaults.features.is_file_context_menu_allowed,
            )?
            .set_default("is_shortcuts_allowed", defaults.features.is_shortcuts_allowed)?;

        // Only a file that exists becomes a source, so a parse error in an
        // existing file propagates instead of being mistaken for absence
        match config_paths
            .iter()
            .copied()
            .find(|path| Path::new(&format!("{path}.toml")).exists())
        {
            Some(config_path) => {
                info!("Loading front-end configuration from {config_path}.toml");
                builder = builder.add_source(File::new(config_path, FileFormat::Toml));
            }
            None => {
                warn!("No config.toml found. Tried: {config_paths:?}. Using built-in defaults");
            }
        }

        let config: AppConfig = builder
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.api.base_api.is_empty() && !self.api.base_api.starts_with('/') {
            return Err(ConfigError::Invalid(
                "base_api must start with '/' when set".into(),
            ));
        }

        self.forms.valid_username.validate("valid_username")?;
        self.forms.valid_password.validate("valid_password")?;
        self.forms.valid_folder_name.validate("valid_folder_name")?;

        Ok(())
    }
}

impl ValidationRule {
    /// Check that the rule itself is well formed
    fn validate(&self, field: &str) -> Result<(), ConfigError> {
        if self.min_length == 0 {
            return Err(ConfigError::Invalid(format!(
                "{field}: min_length must be greater than 0"
            )));
        }

        if self.min_length > self.max_length {
            return Err(ConfigError::Invalid(format!(
                "{field}: min_length must not exceed max_length"
            )));
        }

        if self.pattern.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "{field}: pattern cannot be empty"
            )));
        }

        Ok(())
    }
}
