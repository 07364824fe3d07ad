use std::process;
use colored::*;

use clap::{Arg, ArgAction, Command};

use regform::commands::{check, draft, email, password};
use regform::config::load_config;
use regform::logging::{init_logging, log_error};

fn build_cli() -> Command {
    Command::new("regform")
        .about("Check registration form input from the command line")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("email")
                .about("Check whether an email address looks valid")
                .arg(
                    Arg::new("input")
                        .value_name("EMAIL")
                        .allow_hyphen_values(true)
                        .help("Address to check")
                        .required(true)
                )
        )
        .subcommand(
            Command::new("password")
                .about("Check a password against the password rule")
                .arg(
                    Arg::new("input")
                        .value_name("PASSWORD")
                        .allow_hyphen_values(true)
                        .help("Password to check")
                        .required(true)
                )
                .arg(
                    Arg::new("min-length")
                        .long("min-length")
                        .value_name("N")
                        .help("Minimum length (defaults to the configured value)")
                        .value_parser(clap::value_parser!(usize))
                )
        )
        .subcommand(
            Command::new("check")
                .about("Apply a named rule (email, password) to some input")
                .arg(
                    Arg::new("rule")
                        .value_name("RULE")
                        .help("Rule name: email or password")
                        .required(true)
                )
                .arg(
                    Arg::new("input")
                        .value_name("INPUT")
                        .allow_hyphen_values(true)
                        .help("Input to check")
                        .required(true)
                )
        )
        .subcommand(
            Command::new("draft")
                .about("Fill in a registration draft and show its state")
                .arg(
                    Arg::new("set")
                        .long("set")
                        .short('s')
                        .value_name("FIELD=VALUE")
                        .allow_hyphen_values(true)
                        .help("Set a field (name or email); may be repeated")
                        .action(ArgAction::Append)
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: simple, json")
                        .value_parser(["simple", "json"])
                        .default_value("simple")
                )
        )
}

fn main() {
    let matches = build_cli().get_matches();
    let config = load_config();

    if config.log_to_file {
        if let Err(e) = init_logging() {
            eprintln!("{} {}", "Warning:".yellow().bold(), format!("could not start logging: {}", e));
        }
    }

    let result = match matches.subcommand() {
        Some(("email", sub_matches)) => email::handle_email(sub_matches),
        Some(("password", sub_matches)) => password::handle_password(sub_matches, &config),
        Some(("check", sub_matches)) => check::handle_check(sub_matches),
        Some(("draft", sub_matches)) => draft::handle_draft(sub_matches).map(|_| true),
        _ => unreachable!("subcommand_required is set"),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            log_error(&e.to_string());
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regform::{Config, RegError};

    #[test]
    fn test_cli_is_well_formed() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_draft_collects_repeated_set() {
        let matches = build_cli()
            .try_get_matches_from(["regform", "draft", "--set", "name=Newman", "-s", "email=n@usps.gov", "-f", "json"])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "draft");
        let sets: Vec<&String> = sub.get_many::<String>("set").unwrap().collect();
        assert_eq!(sets.len(), 2);
        assert_eq!(sub.get_one::<String>("format").unwrap(), "json");
    }

    #[test]
    fn test_inputs_may_start_with_hyphen() {
        let matches = build_cli().try_get_matches_from(["regform", "password", "-Abc123"]).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<String>("input").unwrap(), "-Abc123");

        let matches = build_cli().try_get_matches_from(["regform", "email", "-a@b.c"]).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<String>("input").unwrap(), "-a@b.c");

        let matches = build_cli().try_get_matches_from(["regform", "check", "password", "-Abc123"]).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<String>("input").unwrap(), "-Abc123");

        let matches = build_cli().try_get_matches_from(["regform", "draft", "--set", "-name=x"]).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<String>("set").unwrap(), "-name=x");
    }

    #[test]
    fn test_hyphenated_password_gets_a_verdict() {
        let matches = build_cli().try_get_matches_from(["regform", "password", "-Abc123"]).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(password::handle_password(sub, &Config::default()).unwrap());
    }

    #[test]
    fn test_password_flag_beats_config() {
        let strict = Config {
            password_min_length: 10,
            log_to_file: false,
        };

        let matches = build_cli().try_get_matches_from(["regform", "password", "Abc123"]).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(!password::handle_password(sub, &strict).unwrap());
        assert!(password::handle_password(sub, &Config::default()).unwrap());

        let matches = build_cli()
            .try_get_matches_from(["regform", "password", "Abc123", "--min-length", "6"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(password::handle_password(sub, &strict).unwrap());

        let matches = build_cli()
            .try_get_matches_from(["regform", "password", "Abc1234567", "--min-length", "12"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(!password::handle_password(sub, &Config::default()).unwrap());
    }

    #[test]
    fn test_email_verdicts() {
        let matches = build_cli().try_get_matches_from(["regform", "email", "x@y.com"]).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(email::handle_email(sub).unwrap());

        let matches = build_cli().try_get_matches_from(["regform", "email", "x@y"]).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(!email::handle_email(sub).unwrap());
    }

    #[test]
    fn test_check_dispatches_by_rule() {
        let matches = build_cli().try_get_matches_from(["regform", "check", "Email", "a@b.c"]).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(check::handle_check(sub).unwrap());

        let matches = build_cli().try_get_matches_from(["regform", "check", "password", "abc123"]).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(!check::handle_check(sub).unwrap());
    }

    #[test]
    fn test_check_unknown_rule_is_an_error() {
        let matches = build_cli().try_get_matches_from(["regform", "check", "zip", "90210"]).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(matches!(check::handle_check(sub), Err(RegError::UnknownRule(r)) if r == "zip"));
    }

    #[test]
    fn test_draft_unknown_field_is_an_error() {
        let matches = build_cli().try_get_matches_from(["regform", "draft", "--set", "phone=555"]).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(matches!(draft::handle_draft(sub), Err(RegError::InvalidField(_))));
    }

    #[test]
    fn test_password_min_length_must_be_numeric() {
        let result = build_cli().try_get_matches_from(["regform", "password", "Abc123", "--min-length", "six"]);
        assert!(result.is_err());
    }
}
