use clap::ArgMatches;

use crate::error::{RegError, RegResult};
use crate::formatting::format_verdict;
use crate::logging::log_info;
use crate::validation::is_valid_email;

pub fn handle_email(matches: &ArgMatches) -> RegResult<bool> {
    let input = matches.get_one::<String>("input")
        .ok_or_else(|| RegError::InvalidInput("Email input is required".to_string()))?;

    let valid = is_valid_email(input);
    log_info(&format!("email check: valid={}", valid));
    println!("{}", format_verdict("email", input, valid));

    Ok(valid)
}
