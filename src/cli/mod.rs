//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use userview::config::Config;

use args::Cli;

/// Apply CLI flags on top of the loaded config (highest priority layer).
pub fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ref base_url) = cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(ref template) = cli.template {
        config.api.template = template.clone();
    }
    if let Some(ref level) = cli.log_level {
        config.log.level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.log.format = format;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use userview::logging::LogFormat;

    #[test]
    fn flags_override_config() {
        let cli = Cli::try_parse_from([
            "userview",
            "--base-url",
            "http://cli.example.com/",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "list",
        ])
        .unwrap();
        let mut config = Config::default();
        config.api.template = "rest/user".to_string();

        apply_overrides(&mut config, &cli);

        assert_eq!(config.api.base_url, "http://cli.example.com/");
        assert_eq!(config.api.template, "rest/user");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn absent_flags_keep_config() {
        let cli = Cli::try_parse_from(["userview", "list"]).unwrap();
        let mut config = Config::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config, Config::default());
    }
}
