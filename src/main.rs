use std::error::Error;
use std::io::{self, Write};
use std::sync::Arc;

use clap::Parser;
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

use meal_roulette::config::load_config;
use meal_roulette::view::{render_detail, render_summary};
use meal_roulette::{LoadOutcome, RecipeError, RecipeOrchestrator};

#[derive(Parser)]
#[command(name = "meal-roulette", version, about = "What should I cook today?")]
struct Cli {
    /// Configuration file (TOML, extension optional)
    #[arg(short, long, default_value = "config")]
    config: String,

    /// Language to translate instructions into
    #[arg(short, long)]
    language: Option<String>,

    /// Model used for translation
    #[arg(long)]
    model: Option<String>,

    /// Show the catalog's instructions without translating them
    #[arg(long, default_value_t = false)]
    no_translate: bool,

    /// Load a single recipe, print it in full and exit
    #[arg(long, default_value_t = false)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut builder = RecipeOrchestrator::builder().config(load_config(&cli.config)?);
    if let Some(language) = cli.language {
        builder = builder.target_language(language);
    }
    if let Some(model) = cli.model {
        builder = builder.model(model);
    }
    if cli.no_translate {
        builder = builder.without_translation();
    }

    let orchestrator = match builder.build() {
        Ok(orchestrator) => Arc::new(orchestrator),
        Err(e @ RecipeError::MissingApiKey(_)) => {
            eprintln!("{}\nSet OPENAI_API_KEY or run with --no-translate.", e);
            std::process::exit(2);
        }
        Err(e) => return Err(e.into()),
    };

    if orchestrator.translation_enabled() {
        info!("Translating instructions to {}", orchestrator.target_language());
    }

    if cli.once {
        orchestrator.load().await;
        let state = orchestrator.snapshot();
        match render_detail(&state) {
            Some(detail) => println!("{}", detail),
            None => {
                eprintln!("{}", render_summary(&state));
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    // Redraw on every published state change
    let mut updates = orchestrator.subscribe();
    let renderer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            println!("\n{}\n", render_summary(&state));
            if !state.is_loading {
                print_prompt();
            }
        }
    });

    request_load(&orchestrator);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" | "n" => request_load(&orchestrator),
            "d" => {
                match render_detail(&orchestrator.snapshot()) {
                    Some(detail) => println!("\n{}\n", detail),
                    None => println!("Nothing to show yet."),
                }
                print_prompt();
            }
            "q" | "quit" => break,
            _ => print_prompt(),
        }
    }

    renderer.abort();
    Ok(())
}

fn request_load(orchestrator: &Arc<RecipeOrchestrator>) {
    let handle = orchestrator.request_load();
    tokio::spawn(async move {
        if let Ok(LoadOutcome::AlreadyInFlight) = handle.await {
            println!("Still loading, hang on...");
        }
    });
}

fn print_prompt() {
    print!("[Enter] another recipe  [d] full recipe  [q] quit > ");
    let _ = io::stdout().flush();
}
