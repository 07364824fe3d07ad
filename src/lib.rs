// Module declarations
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod registration;
pub mod validation;


// Re-export commonly used items
pub use config::{Config, load_config, load_config_from, load_config_or_default, save_config, save_config_to};
pub use error::{RegError, RegResult};
pub use registration::{Field, RegistrationDraft};
pub use validation::{is_valid_email, is_valid_password, PasswordPolicy, Rule};
