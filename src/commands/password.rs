use clap::ArgMatches;

use crate::config::Config;
use crate::error::{RegError, RegResult};
use crate::formatting::format_verdict;
use crate::logging::log_info;
use crate::validation::PasswordPolicy;

pub fn handle_password(matches: &ArgMatches, config: &Config) -> RegResult<bool> {
    let input = matches.get_one::<String>("input")
        .ok_or_else(|| RegError::InvalidInput("Password input is required".to_string()))?;

    let policy = match matches.get_one::<usize>("min-length") {
        Some(min) => PasswordPolicy::new(*min),
        None => config.password_policy(),
    };

    let valid = policy.check(input);
    log_info(&format!("password check: min_length={} valid={}", policy.min_length, valid));
    // Never echo the password itself.
    println!("{}", format_verdict("password", &"*".repeat(input.chars().count()), valid));

    Ok(valid)
}
