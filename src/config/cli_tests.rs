//! Tests for CLI argument parsing.

use super::cli::{BuildStateArg, Cli, Command};
use crate::status::BuildState;

fn send_args(extra: &[&str]) -> Vec<String> {
    let mut args = vec![
        "stash-notify",
        "send",
        "--state",
        "successful",
        "--key",
        "REPO-MASTER",
        "--name",
        "REPO-MASTER-42",
        "--url",
        "http://ci/browse/REPO-MASTER-42",
        "--revision",
        "abc123",
    ];
    args.extend(extra);
    args.into_iter().map(String::from).collect()
}

mod parsing {
    use super::*;

    #[test]
    fn parse_send_command() {
        let cli = Cli::parse_from_iter(send_args(&[]));

        let Command::Send(args) = cli.command else {
            panic!("expected send command");
        };
        assert_eq!(args.state, BuildStateArg::Successful);
        assert_eq!(args.key, "REPO-MASTER");
        assert_eq!(args.name, "REPO-MASTER-42");
        assert_eq!(args.url, "http://ci/browse/REPO-MASTER-42");
        assert_eq!(args.revision, "abc123");
        assert_eq!(args.description, "");
        assert!(!args.dry_run);
    }

    #[test]
    fn parse_description_and_dry_run() {
        let cli = Cli::parse_from_iter(send_args(&["--description", "All green", "--dry-run"]));

        let Command::Send(args) = cli.command else {
            panic!("expected send command");
        };
        assert_eq!(args.description, "All green");
        assert!(args.dry_run);
    }

    #[test]
    fn parse_all_states() {
        for (value, expected) in [
            ("in-progress", BuildStateArg::InProgress),
            ("successful", BuildStateArg::Successful),
            ("failed", BuildStateArg::Failed),
        ] {
            let mut args = send_args(&[]);
            args[3] = value.to_string();
            let Command::Send(send) = Cli::parse_from_iter(args).command else {
                panic!("expected send command");
            };
            assert_eq!(send.state, expected, "Failed for value: {value}");
        }
    }

    #[test]
    fn parse_connection_options_after_subcommand() {
        let cli = Cli::parse_from_iter(send_args(&[
            "--base-url",
            "https://stash.example.com",
            "--username",
            "ci",
            "--password",
            "secret",
            "--headers",
            "X-A:1,X-B:2",
            "--insecure",
            "--connect-timeout",
            "5",
            "--timeout",
            "15",
            "-v",
        ]));

        assert_eq!(cli.base_url.as_deref(), Some("https://stash.example.com"));
        assert_eq!(cli.username.as_deref(), Some("ci"));
        assert_eq!(cli.password.as_deref(), Some("secret"));
        assert_eq!(cli.headers.as_deref(), Some("X-A:1,X-B:2"));
        assert!(cli.insecure);
        assert_eq!(cli.connect_timeout, Some(5));
        assert_eq!(cli.timeout, Some(15));
        assert!(cli.verbose);
    }

    #[test]
    fn parse_global_options_before_subcommand() {
        let mut args = vec![
            "stash-notify".to_string(),
            "--base-url".to_string(),
            "http://stash".to_string(),
            "-c".to_string(),
            "custom.toml".to_string(),
        ];
        args.extend(send_args(&[]).into_iter().skip(1));

        let cli = Cli::parse_from_iter(args);

        assert_eq!(cli.base_url.as_deref(), Some("http://stash"));
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("custom.toml")));
    }

    #[test]
    fn parse_init_with_default_output() {
        let cli = Cli::parse_from_iter(["stash-notify", "init"]);

        let Command::Init { output } = cli.command else {
            panic!("expected init command");
        };
        assert_eq!(output, std::path::PathBuf::from("stash-notify.toml"));
    }

    #[test]
    fn parse_init_with_custom_output() {
        let cli = Cli::parse_from_iter(["stash-notify", "init", "-o", "ci.toml"]);

        let Command::Init { output } = cli.command else {
            panic!("expected init command");
        };
        assert_eq!(output, std::path::PathBuf::from("ci.toml"));
    }
}

mod build_state_arg {
    use super::*;

    #[test]
    fn converts_to_build_state() {
        assert_eq!(BuildState::from(BuildStateArg::InProgress), BuildState::InProgress);
        assert_eq!(BuildState::from(BuildStateArg::Successful), BuildState::Successful);
        assert_eq!(BuildState::from(BuildStateArg::Failed), BuildState::Failed);
    }
}
