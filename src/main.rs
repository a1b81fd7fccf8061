use anyhow::Result;
use clap::Parser;
use middl::commands::{self, UrlOptions};
use middl::release::DEFAULT_BASE_URL;

/// middl - mid release download URL resolver
///
/// Compute the GitHub release asset address for a midlang build from the
/// same three choices the documentation site offers: operating system,
/// architecture, and version. Nothing is downloaded; the URL is printed
/// to stdout.
///
/// Examples:
///   middl url --os macOS --version v1.0.0
///   middl url --detect --version v1.0.0 --json
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Release download base URL (also via MIDDL_BASE_URL)
    #[arg(
        long = "base-url",
        env = "MIDDL_BASE_URL",
        value_name = "URL",
        default_value = DEFAULT_BASE_URL,
        global = true
    )]
    pub base_url: String,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Resolve the release asset URL for a selection of os/arch/version
    Url(UrlArgs),

    /// Show the host platform as download menu labels
    Platform(PlatformArgs),
}

#[derive(clap::Args, Debug)]
pub struct UrlArgs {
    /// Operating system label (macOS, windows, linux; default linux)
    #[arg(long, value_name = "LABEL")]
    pub os: Option<String>,

    /// Architecture label ("32 bit", "64 bit"; default "64 bit")
    #[arg(long, value_name = "LABEL")]
    pub arch: Option<String>,

    /// Version label, with or without a leading "v"
    #[arg(long, value_name = "LABEL")]
    pub version: Option<String>,

    /// Preselect os/arch from the host platform; explicit labels win
    #[arg(long)]
    pub detect: bool,

    /// Print the resolved asset as JSON instead of the bare URL
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct PlatformArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Url(args) => commands::url(
            UrlOptions {
                os: args.os,
                arch: args.arch,
                version: args.version,
                detect: args.detect,
                json: args.json,
            },
            &cli.base_url,
        )?,
        Commands::Platform(args) => commands::platform(args.json)?,
    }
    Ok(())
}
