//! eitherway — runs the bundled pipelines against the configured inputs.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config
//!   3. Resolve effective log level (CLI `-v` flags > env > config)
//!   4. Init logger once
//!   5. Run each pipeline and print its folded result

use eitherway::{
    Boxed, DiskFiles, Either, FileSource, config, error::AppError, logger, recipes, try_result,
};
use tracing::{debug, info};

struct CliArgs {
    log_level: Option<&'static str>,
    config_path: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let args = parse_cli_args()?;

    let config = config::load(args.config_path.as_deref())?;

    let effective_log_level = args.log_level.unwrap_or(config.log_level.as_str());
    logger::parse_level(effective_log_level)?;
    logger::init(effective_log_level, args.log_level.is_some())?;

    info!(
        data_dir = %config.data_dir.display(),
        config_file = %config.config_file,
        default_port = config.default_port,
        "config loaded"
    );

    let files = DiskFiles::new(&config.data_dir);
    let port = recipes::config_port(&files, &config.config_file, config.default_port);
    debug!(port, path = %config.config_path().display(), "port resolved");
    println!("port: {port}");

    println!("{}", recipes::greeting(config.user.as_deref()));

    println!("char 113: {}", recipes::shout_char_code(Either::<(), u32>::success(113)));
    println!("char (failed): {}", recipes::shout_char_code(Either::<u32, u32>::failure(113)));
    println!("codes [110, 111]: {}", recipes::shout_char_codes(Boxed::new(vec![110, 111])));

    try_result(|| files.read_to_string(&config.config_file)).fold(
        |e| println!("db url: no config file ({e})"),
        |raw| match recipes::safe_db_url(&raw) {
            Ok(url) => println!("db url: {url:?}"),
            Err(e) => println!("db url: unreadable config ({e})"),
        },
    );

    Ok(())
}

fn parse_cli_args() -> Result<CliArgs, AppError> {
    let mut verbosity = 0u8;
    let mut config_path = None;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--" {
            break;
        }

        match arg.as_str() {
            "-h" | "--help" => {
                println!("Usage: eitherway [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -h, --help                 Print help");
                println!("  -f, --config <PATH>        Path to configuration file (default: config/default.toml)");
                println!("  -v, -vv, -vvv, -vvvv       Increase logging verbosity");
                std::process::exit(0);
            }
            "-f" | "--config" => match iter.next() {
                Some(path) => config_path = Some(path),
                None => {
                    return Err(AppError::Config(
                        "-f/--config requires a path argument".to_string(),
                    ));
                }
            },
            "--verbose" => verbosity = verbosity.saturating_add(1),
            a if a.starts_with('-') && a.len() > 1 && a.chars().skip(1).all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add((a.len() - 1) as u8);
            }
            _ => {}
        }
    }

    Ok(CliArgs { log_level: logger::level_for_verbosity(verbosity), config_path })
}
