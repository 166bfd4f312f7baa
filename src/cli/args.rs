//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Anime episode downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "gogo-dl",
    version,
    about = "Download anime episodes from gogoanime-style sites",
    long_about = "A CLI tool that crawls per-episode pages over an episode range,\n\
                  picks the download mirror matching the requested resolution,\n\
                  and streams it into ~/Downloads/<anime>/."
)]
pub struct Args {
    /// Anime name (URL slug, e.g. "one-piece").
    #[arg(short = 'n', long = "name")]
    pub anime_name: Option<String>,

    /// Starting episode (default: 1).
    #[arg(long)]
    pub start: Option<i64>,

    /// Ending episode (inclusive, required unless set in the config file).
    #[arg(long)]
    pub end: Option<i64>,

    /// Resolution substring to match against mirror link text (default: 1280).
    #[arg(long = "res")]
    pub resolution: Option<String>,

    /// Session cookie attached to every page request.
    #[arg(long, env = "AUTH_COOKIE", hide_env_values = true)]
    pub cookie: Option<String>,

    /// Override the download directory (default: <home>/Downloads/<name>).
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(name) = self.anime_name {
            config.target.name = name;
        }

        if let Some(start) = self.start {
            config.target.start_episode = start;
        }

        if let Some(end) = self.end {
            config.target.end_episode = end;
        }

        if let Some(resolution) = self.resolution {
            config.target.resolution = resolution;
        }

        if let Some(cookie) = self.cookie {
            config.session.auth_cookie = cookie;
        }

        if let Some(dir) = self.download_directory {
            config.options.download_directory = Some(dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_flags_leave_config_defaults() {
        let args = Args::parse_from(["gogo-dl", "-n", "some-show", "--end", "12"]);
        assert_eq!(args.start, None);
        assert_eq!(args.resolution, None);

        let mut config = Config::default();
        args.merge_into_config(&mut config);
        assert_eq!(config.target.start_episode, 1);
        assert_eq!(config.target.resolution, "1280");
        assert_eq!(config.target.end_episode, 12);
    }

    #[test]
    fn test_merge_overrides_config() {
        let args = Args::parse_from([
            "gogo-dl",
            "-n",
            "some-show",
            "--start",
            "3",
            "--end",
            "5",
            "--res",
            "720",
        ]);
        let mut config = Config::default();
        args.merge_into_config(&mut config);
        assert_eq!(config.target.name, "some-show");
        assert_eq!(config.target.start_episode, 3);
        assert_eq!(config.target.end_episode, 5);
        assert_eq!(config.target.resolution, "720");
    }

    #[test]
    fn test_explicit_flag_equal_to_default_overrides_config() {
        // A flag given on the command line wins even when its value happens
        // to be the documented default.
        let args = Args::parse_from([
            "gogo-dl",
            "--start",
            "1",
            "--res",
            "1280",
            "--end",
            "5",
        ]);

        let mut config = Config::default();
        config.target.start_episode = 3;
        config.target.resolution = "720".to_string();

        args.merge_into_config(&mut config);
        assert_eq!(config.target.start_episode, 1);
        assert_eq!(config.target.resolution, "1280");
    }
}
