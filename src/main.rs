use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use learn_easy::{App, ImportStore};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Quiz JSON file to load immediately, skipping the home screen
    #[arg(short, long)]
    quiz: Option<PathBuf>,

    /// Override the location of the imported-quiz store
    #[arg(long)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import a quiz JSON file into the local store, replacing any prior import
    Import {
        /// Quiz file to import
        file: PathBuf,
    },
}

fn main() {
    let args = Args::parse();

    let store = match args.store {
        Some(path) => ImportStore::new(path),
        None => ImportStore::at_default_location(),
    };

    match args.command {
        Some(Command::Import { file }) => match store.import_file(&file) {
            Ok(record) => {
                println!(
                    "Imported '{}' ({} questions). It will appear on the home screen.",
                    record.name,
                    record.data.len()
                );
            }
            Err(e) => {
                eprintln!("Import failed: {}", e);
                process::exit(1);
            }
        },
        None => {
            let app = App::new(args.quiz, &store);
            if let Err(e) = learn_easy::run(app, &store) {
                eprintln!("Error running quiz: {}", e);
                process::exit(1);
            }
        }
    }
}
