//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fbb_roster::{
    cli::{Commands, RosterApp},
    commands::{
        backfill::handle_backfill,
        history::handle_history,
        report::{handle_report, ReportParams},
        roster_diff::{handle_diff, DiffParams},
    },
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    env_logger::init();

    let app = RosterApp::parse();

    match app.command {
        Commands::Diff {
            config,
            date,
            dry_run,
            json,
            verbose,
        } => handle_diff(
            &config.into_config()?,
            DiffParams {
                date,
                dry_run,
                as_json: json,
                verbose,
            },
        )?,

        Commands::Report {
            config,
            as_of,
            player_name,
            json,
        } => handle_report(
            &config.into_config()?,
            ReportParams {
                as_of,
                player_name,
                as_json: json,
            },
        )?,

        Commands::History {
            config,
            player,
            json,
        } => handle_history(&config.into_config()?, &player, json)?,

        Commands::Backfill {
            config,
            from,
            through,
            verbose,
        } => handle_backfill(&config.into_config()?, from, through, verbose)?,
    }

    Ok(())
}
