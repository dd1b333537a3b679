use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("poolwatch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Live status dashboard for thread pool media servers")
        .long_about("Poolwatch polls a thread-pool media server's status endpoint on a fixed interval and renders thread utilization, request counts, and connection counts in the terminal. It can also list the media files the server exposes.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("watch")
                .about("Render the live dashboard until Ctrl-C")
                .arg(
                    Arg::new("server")
                        .long("server")
                        .short('s')
                        .help("Backend base URL (overrides config)")
                )
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .short('i')
                        .value_parser(value_parser!(u64))
                        .help("Poll interval in milliseconds (overrides config)")
                )
                .arg(
                    Arg::new("threads")
                        .long("threads")
                        .short('t')
                        .value_parser(value_parser!(u32))
                        .help("Thread pool capacity (overrides config)")
                )
        )
        .subcommand(
            Command::new("status")
                .about("Fetch one snapshot and render it")
                .arg(
                    Arg::new("server")
                        .long("server")
                        .short('s')
                        .help("Backend base URL (overrides config)")
                )
                .arg(
                    Arg::new("threads")
                        .long("threads")
                        .short('t')
                        .value_parser(value_parser!(u32))
                        .help("Thread pool capacity (overrides config)")
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output machine-readable JSON")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("files")
                .about("List the media files the backend serves")
                .arg(
                    Arg::new("server")
                        .long("server")
                        .short('s')
                        .help("Backend base URL (overrides config)")
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output machine-readable JSON")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(value_parser!(clap_complete::Shell))
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "poolwatch");
    }

    #[test]
    fn test_cli_watch_command() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec![
            "poolwatch",
            "watch",
            "--server",
            "http://10.0.0.5:8080",
            "--interval",
            "500",
            "--threads",
            "64",
        ]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        let watch_matches = matches.subcommand_matches("watch").unwrap();
        assert_eq!(
            watch_matches.get_one::<String>("server").unwrap(),
            "http://10.0.0.5:8080"
        );
        assert_eq!(*watch_matches.get_one::<u64>("interval").unwrap(), 500);
        assert_eq!(*watch_matches.get_one::<u32>("threads").unwrap(), 64);
    }

    #[test]
    fn test_cli_watch_rejects_bad_interval() {
        let app = build_cli();
        let matches =
            app.try_get_matches_from(vec!["poolwatch", "watch", "--interval", "soon"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_cli_status_command() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["poolwatch", "status", "--json"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        let status_matches = matches.subcommand_matches("status").unwrap();
        assert!(status_matches.get_flag("json"));
    }

    #[test]
    fn test_cli_files_command() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["poolwatch", "files"]);
        assert!(matches.is_ok());

        let matches = matches.unwrap();
        assert!(matches.subcommand_matches("files").is_some());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        let app = build_cli();
        let matches = app.try_get_matches_from(vec!["poolwatch"]);
        assert!(matches.is_err());
    }
}
