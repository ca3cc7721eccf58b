mod config;
mod constants;

use crate::config::get_storage;
use anyhow::Context;
use arboard::Clipboard;
use clap::{Parser, Subcommand};
use pstash_core::notify::{Notifier, messages};
use pstash_core::store::PromptStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version,
display_name = "pstash",
bin_name = "pstash",
about = "Your personal library of prompts",
long_about = "Your personal library of prompts, saved in your hosted data store")]
struct Args {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// List saved prompts, optionally filtered by title
    List {
        #[arg(short = 's', long)]
        search: Option<String>,
    },
    /// Save a new prompt
    Add {
        #[arg(short = 't', long)]
        title: String,
        #[arg(short = 'b', long)]
        body: String,
    },
    /// Replace the title and body of a saved prompt
    Edit {
        id: String,
        #[arg(short = 't', long)]
        title: String,
        #[arg(short = 'b', long)]
        body: String,
    },
    /// Remove a saved prompt
    Delete { id: String },
    /// Copy a saved prompt's body to the clipboard
    Copy { id: String },
}

/// Prints notifications to stdout. A printed line needs no dismissal, so
/// the transient-display behavior of the reference UI does not apply here.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        println!("{message}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let mut store = PromptStore::new(get_storage(), TerminalNotifier);
    store.load().await?;

    match &args.cmd {
        Commands::List { search } => {
            if let Some(term) = search {
                store.set_search_term(term.as_str());
            }
            let visible = store.visible_prompts();
            if visible.is_empty() {
                println!("No prompts found.");
                if !store.search_term().is_empty() {
                    println!("Try adjusting your search.");
                }
            } else {
                for prompt in visible {
                    println!("{} ({})", prompt.title, prompt.id);
                    println!("{}\n", prompt.body);
                }
            }
        }
        Commands::Add { title, body } => {
            store.create(title, body).await?;
        }
        Commands::Edit { id, title, body } => {
            store.update(id, title, body).await?;
        }
        Commands::Delete { id } => {
            store.delete(id).await?;
        }
        Commands::Copy { id } => {
            let prompt = store
                .get(id)
                .with_context(|| format!("no prompt with id '{id}'"))?;
            let mut clipboard = Clipboard::new().context("could not open the clipboard")?;
            clipboard.set_text(prompt.body.as_str())?;
            TerminalNotifier.notify(messages::PROMPT_COPIED);
        }
    }

    Ok(())
}
