use std::io;

use anyhow::Result;
use clap::Parser;

use price_machine::cli::Cli;
use price_machine::data::columns::RoleTable;
use price_machine::session::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let roles = match &cli.roles {
        Some(path) => RoleTable::from_file(path)?,
        None => RoleTable::default(),
    };

    let mut session = Session::new(roles, cli.output);
    if let Some(dir) = &cli.catalog {
        session.load(dir);
    }

    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout())?;
    Ok(())
}

fn init_logging(quiet: bool, verbose: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
