use colored::*;
use serde_json::json;

use crate::error::RegResult;
use crate::formatting::verdict::format_email_valid;
use crate::registration::RegistrationDraft;

pub fn format_draft(draft: &RegistrationDraft) -> String {
    let name = if draft.name().is_empty() {
        "<empty>".dimmed().to_string()
    } else {
        draft.name().to_string()
    };
    let email = if draft.email().is_empty() {
        "<empty>".dimmed().to_string()
    } else {
        draft.email().to_string()
    };
    let submittable = if draft.is_submittable() {
        "yes".green()
    } else {
        "no".yellow()
    };

    [
        format!("{:<12} {}", "Name:".bold(), name),
        format!("{:<12} {}", "Email:".bold(), email),
        format!("{:<12} {}", "Email check:".bold(), format_email_valid(draft.email_valid())),
        format!("{:<12} {}", "Submittable:".bold(), submittable),
    ]
    .join("\n")
}

/// Serialized draft plus the derived `submittable` flag.
pub fn format_draft_json(draft: &RegistrationDraft) -> RegResult<String> {
    let mut value = serde_json::to_value(draft)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("submittable".to_string(), json!(draft.is_submittable()));
    }
    Ok(serde_json::to_string_pretty(&value)?)
}
