//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// A password generator client written in Rust.

use clap::Parser;
use clap::builder::RangedU64ValueParser;
use log::debug;

use rpawogen::configtool::AppConfig;
use rpawogen::options::{DEFAULT_LENGTH, GenerationOptions};
use rpawogen::setclip::run_daemon_if_requested;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rpawogen")]
#[command(about = "Generate passwords through a remote generation service", long_about = None)]
enum Cli {
    /// Generate one password and print it with its strength
    Gen(GenArgs),

    /// Interactive generator form
    Interactive {
        /// Override the generation endpoint
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Test password strength locally
    Testpass {
        /// Password to test
        password: String,
    },

    /// Show or update the stored configuration
    Config {
        /// Generation endpoint URL
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Request timeout in seconds
        #[arg(short, long)]
        timeout: Option<u64>,

        /// Clear the clipboard this many seconds after copying (0 disables)
        #[arg(short = 'x', long)]
        clear_after: Option<u64>,
    },
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of the password (8-50)
    #[arg(short, long, default_value_t = DEFAULT_LENGTH,
          value_parser = RangedU64ValueParser::<usize>::new().range(8..=50))]
    length: usize,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_upper: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lower: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    no_numbers: bool,

    /// Exclude symbols
    #[arg(long, default_value_t = false)]
    no_symbols: bool,

    /// Copy the password to the clipboard
    #[arg(short, long, default_value_t = false)]
    copy: bool,

    /// Override the generation endpoint
    #[arg(short, long)]
    endpoint: Option<String>,
}

impl From<&GenArgs> for GenerationOptions {
    fn from(args: &GenArgs) -> Self {
        Self {
            length: args.length,
            include_upper: !args.no_upper,
            include_lower: !args.no_lower,
            include_numbers: !args.no_numbers,
            include_symbols: !args.no_symbols,
        }
    }
}

/// 初始化日志记录器
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();
}

fn load_config(endpoint: Option<String>) -> Result<AppConfig, String> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {}", e))?;
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
        config.validate().map_err(|e| e.to_string())?;
    }
    debug!("Using endpoint {}", config.endpoint);
    Ok(config)
}

fn main() -> Result<(), String> {
    init_logger();

    // 作为剪贴板清理进程启动时，执行完任务直接退出
    if let Some(result) = run_daemon_if_requested() {
        return result.map_err(|e| e.to_string());
    }

    let cli = Cli::parse();

    match cli {
        Cli::Gen(args) => {
            let options = GenerationOptions::from(&args);
            let config = load_config(args.endpoint)?;
            commands::password_gen::generate_remote(&config, options, args.copy)
        },
        Cli::Interactive { endpoint } => {
            let config = load_config(endpoint)?;
            commands::interactive::run_interactive(&config)
        },
        Cli::Testpass { password } => {
            commands::testpass::test_password(password)
        },
        Cli::Config { endpoint, timeout, clear_after } => {
            commands::config::update_config(endpoint, timeout, clear_after)
        },
    }
}
