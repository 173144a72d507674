use std::{env, path::PathBuf, process};

use chrono::Utc;
use timesheet_core::{
    cli::Shell,
    core::SheetManager,
    export::{html, WeekSummary},
    init,
    ledger::Week,
    storage::{JsonStorage, StorageBackend},
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    match args.next().as_deref() {
        None => {
            let manager = open_manager()?;
            Shell::new(manager).run()?;
        }
        Some("summary") => {
            let week = parse_week(args.next());
            let manager = open_manager()?;
            let data = manager.week_data(week)?;
            let summary = WeekSummary::build(manager.roster(), &data, Utc::now());
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Some("export") => {
            let week = parse_week(args.next());
            let manager = open_manager()?;
            let data = manager.week_data(week)?;
            let summary = WeekSummary::build(manager.roster(), &data, Utc::now());
            let path = args
                .next()
                .map(PathBuf::from)
                .unwrap_or_else(|| manager.storage().export_path(week));
            html::write_document(&summary, &path)?;
            println!("Saved summary to {}", path.display());
        }
        Some(_) => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn open_manager() -> Result<SheetManager, Box<dyn std::error::Error>> {
    let storage = JsonStorage::new_default()?;
    Ok(SheetManager::open(Box::new(storage))?)
}

fn parse_week(arg: Option<String>) -> Week {
    arg.and_then(|raw| raw.parse().ok()).unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    })
}

fn print_usage() {
    eprintln!(
        "Usage: timesheet_core_cli [command]\n\
         Commands:\n  \
         summary <week>\n  \
         export <week> [file.html]\n\
         Without a command the interactive shell starts."
    );
}
