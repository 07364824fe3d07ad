pub const CONFIG_FILE: &str = ".regform-config.json";
pub const PASSWORD_MIN_LENGTH_ENV: &str = "REGFORM_PASSWORD_MIN_LENGTH";

/// Minimum password length when nothing else is configured.
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 6;

/// Loose `<something>@<something>.<something>` shape, unanchored.
pub const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";
