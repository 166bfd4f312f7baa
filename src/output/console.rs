//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════╗
║     gogo-dl                              ║
║     anime episode downloader             ║
╚══════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(name: &str, start: i64, end: i64, resolution: &str, download_dir: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Anime: {}", name);
    println!("  Episodes: {}..={}", start, end);
    println!("  Resolution: {}", resolution);
    println!("  Directory: {}", download_dir);
    println!();
}
