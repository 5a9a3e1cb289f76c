use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        get,
        set,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = cli.config_path();

        // writes start from the file, never from command-line overrides
        let on_disk = Config::load_from(&path)?;
        let mut effective = cfg.clone();

        if let Some(assignment) = set {
            effective = ConfigLogic::set(&on_disk, &path, assignment)?;
        }

        if let Some(key) = get {
            println!("{}", ConfigLogic::get(&effective, key)?);
        }

        if *check {
            ConfigLogic::check(&path)?;
        }

        if *print_config {
            ConfigLogic::print(&effective, &path)?;
        }

        if *edit_config {
            ConfigLogic::edit(&on_disk, &path, editor)?;
        }
    }

    Ok(())
}
