use colored::*;

/// One line describing whether `input` passed `rule`.
pub fn format_verdict(rule: &str, input: &str, valid: bool) -> String {
    if valid {
        format!("{} {} {}", "✅".green(), format!("valid {}:", rule).green().bold(), input)
    } else {
        format!("{} {} {}", "❌".red(), format!("invalid {}:", rule).red().bold(), input)
    }
}

pub fn format_email_valid(email_valid: Option<bool>) -> ColoredString {
    match email_valid {
        Some(true) => "valid".green(),
        Some(false) => "invalid".red(),
        None => "not checked".dimmed(),
    }
}
