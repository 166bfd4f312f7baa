//! gogo-dl - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use gogo_dl::{
    cli::Args,
    config::{validate_config, Config},
    crawl::PageCrawler,
    error::{exit_codes, Error, Result},
    fs::ensure_dir,
    output::{print_banner, print_config_summary, print_error, print_info},
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Http(_) => ExitCode::from(exit_codes::NETWORK_ERROR as u8),
                Error::Download(_) | Error::Io(_) | Error::InvalidFilename(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Load .env if present; AUTH_COOKIE may live there.
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration file if one exists
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    // Print configuration summary
    let download_dir = config.download_directory()?;
    print_config_summary(
        &config.target.name,
        config.target.start_episode,
        config.target.end_episode,
        &config.target.resolution,
        &download_dir.display().to_string(),
    );

    if config.session.auth_cookie.is_empty() {
        print_info("No AUTH_COOKIE set; crawling without a session cookie");
    }

    // The per-anime download directory must exist before anything streams
    ensure_dir(&download_dir)?;

    // Crawl the episode range
    PageCrawler::new(&config)?.run().await?;

    Ok(())
}
