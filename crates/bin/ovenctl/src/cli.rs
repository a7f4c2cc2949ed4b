//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Drive the oven's web panel from the terminal.
#[derive(Debug, Parser)]
#[command(name = "ovenctl", version, about)]
pub struct Cli {
    /// Config file to load instead of `./ovenctl.toml`.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Device base URL, overrides the config file and environment.
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Poll the status readout until interrupted.
    Watch,
    /// Fetch and print the status readout once.
    State,
    /// Bump the setpoint by one degree.
    Increment {
        /// Number of independent increment requests to send.
        #[arg(long, default_value_t = 1)]
        times: u32,
    },
    /// Submit the config form; fields are sent in argument order.
    SetConfig {
        /// Form fields as `NAME=VALUE`.
        #[arg(value_name = "NAME=VALUE", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
    /// Set the setpoint directly.
    SetSetpoint {
        /// Target temperature in °F.
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, _)) if name.is_empty() => Err(format!("missing field name in {raw:?}")),
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected NAME=VALUE, got {raw:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovenpanel_domain::config_form::ConfigFormSubmission;

    #[test]
    fn should_parse_watch() {
        let cli = Cli::try_parse_from(["ovenctl", "watch"]).unwrap();
        assert!(matches!(cli.command, Command::Watch));
        assert!(cli.config.is_none());
        assert!(cli.base_url.is_none());
    }

    #[test]
    fn should_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ovenctl",
            "state",
            "--base-url",
            "http://oven.local",
            "--config",
            "panel.toml",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://oven.local"));
        assert_eq!(cli.config, Some(PathBuf::from("panel.toml")));
    }

    #[test]
    fn should_default_to_single_increment() {
        let cli = Cli::try_parse_from(["ovenctl", "increment"]).unwrap();
        assert!(matches!(cli.command, Command::Increment { times: 1 }));
    }

    #[test]
    fn should_parse_set_config_fields_in_order() {
        let cli =
            Cli::try_parse_from(["ovenctl", "set-config", "power=on", "setpoint=72"]).unwrap();
        let Command::SetConfig { fields } = cli.command else {
            panic!("expected set-config");
        };
        let form: ConfigFormSubmission = fields.into_iter().collect();
        assert_eq!(form.encode(), "power=on&setpoint=72");
    }

    #[test]
    fn should_keep_equals_sign_in_value() {
        assert_eq!(
            parse_field("note=a=b").unwrap(),
            ("note".to_string(), "a=b".to_string())
        );
    }

    #[test]
    fn should_reject_field_without_equals() {
        assert!(Cli::try_parse_from(["ovenctl", "set-config", "power"]).is_err());
        assert!(parse_field("=on").is_err());
    }

    #[test]
    fn should_accept_negative_setpoint() {
        let cli = Cli::try_parse_from(["ovenctl", "set-setpoint", "-5"]).unwrap();
        assert!(matches!(cli.command, Command::SetSetpoint { value: -5 }));
    }
}
