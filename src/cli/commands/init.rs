use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty record file, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let config_path = cli.config_path();

    println!("⚙️  Initializing workhours…");
    let records = Config::init_all(&config_path, cli.file.as_deref(), cli.test)?;

    tracing::info!(
        config = %config_path.display(),
        records = %records.display(),
        test_mode = cli.test,
        "initialized"
    );

    println!("🎉 workhours initialization completed!");
    Ok(())
}
