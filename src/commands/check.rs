use clap::ArgMatches;

use crate::error::{RegError, RegResult};
use crate::formatting::format_verdict;
use crate::logging::log_info;
use crate::validation::Rule;

pub fn handle_check(matches: &ArgMatches) -> RegResult<bool> {
    let rule = matches.get_one::<String>("rule")
        .ok_or_else(|| RegError::InvalidInput("Rule name is required".to_string()))?
        .parse::<Rule>()?;
    let input = matches.get_one::<String>("input")
        .ok_or_else(|| RegError::InvalidInput("Input is required".to_string()))?;

    let valid = rule.check(input);
    log_info(&format!("{} check: valid={}", rule, valid));

    let shown = match rule {
        Rule::Password => "*".repeat(input.chars().count()),
        Rule::Email => input.clone(),
    };
    println!("{}", format_verdict(rule.name(), &shown, valid));

    Ok(valid)
}
