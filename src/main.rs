//! tasklist CLI - personal task list with due dates

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use tasklist::cli::display::{display_stats, display_task_list, error, success};
use tasklist::cli::{Cli, Commands};
use tasklist::clock::{Clock, SystemClock};
use tasklist::storage::{FileStorage, StorageLocation, TaskStore};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    if let Err(e) = &result {
        error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let storage = FileStorage::new(StorageLocation::resolve(cli.dir.as_deref())?);
    log::debug!("Using storage directory {:?}", storage.location().dir);

    let mut store = TaskStore::open(storage);
    let today = cli.today.unwrap_or_else(|| SystemClock.today());

    match cli.command {
        Commands::Add { text, due } => match store.add(&text.join(" "), due) {
            Some(task) => success(&format!("Added #{}: {}", task.id, task.text)),
            None => log::info!("Nothing added."),
        },

        Commands::List { filter } => {
            let tasks = store.filtered_view(filter, today);
            display_task_list(&tasks, today);
            println!("{}", store.stats(today));
        }

        Commands::Toggle { ids } => {
            for id in ids {
                match store.toggle(id) {
                    Some(true) => success(&format!("Completed #{}", id)),
                    Some(false) => success(&format!("Reopened #{}", id)),
                    None => log::info!("No task #{}", id),
                }
            }
        }

        Commands::Delete { id, force } => {
            let Some(task) = store.get(id) else {
                log::info!("No task #{}", id);
                return Ok(());
            };

            if !force {
                print!("Delete #{} '{}'? [y/N] ", task.id, task.text);
                io::stdout().flush()?;

                let mut input = String::new();
                io::stdin().read_line(&mut input)?;

                if !input.trim().eq_ignore_ascii_case("y") {
                    log::info!("Cancelled.");
                    return Ok(());
                }
            }

            store.delete(id);
            success(&format!("Deleted #{}", id));
        }

        Commands::Stats => {
            display_stats(&store.stats(today));
        }
    }

    Ok(())
}
