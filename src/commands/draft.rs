use clap::ArgMatches;

use crate::error::{RegError, RegResult};
use crate::formatting::{format_draft, format_draft_json};
use crate::logging::log_info;
use crate::registration::RegistrationDraft;

/// Split a `FIELD=VALUE` assignment. The value may itself contain `=`.
pub fn parse_assignment(raw: &str) -> RegResult<(&str, &str)> {
    raw.split_once('=')
        .ok_or_else(|| RegError::InvalidInput(format!("Expected FIELD=VALUE, got '{}'", raw)))
}

/// Build a draft by applying assignments in order.
pub fn build_draft<'a, I>(assignments: I) -> RegResult<RegistrationDraft>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut draft = RegistrationDraft::new();
    for raw in assignments {
        let (field, value) = parse_assignment(raw)?;
        draft.apply_named(field, value)?;
    }
    Ok(draft)
}

pub fn handle_draft(matches: &ArgMatches) -> RegResult<()> {
    let assignments: Vec<&str> = matches.get_many::<String>("set")
        .map(|values| values.map(|s| s.as_str()).collect())
        .unwrap_or_default();

    let draft = build_draft(assignments)?;
    log_info(&format!("draft built, submittable={}", draft.is_submittable()));

    let format = matches.get_one::<String>("format").map(|s| s.as_str()).unwrap_or("simple");
    match format {
        "json" => println!("{}", format_draft_json(&draft)?),
        _ => println!("{}", format_draft(&draft)),
    }

    Ok(())
}
