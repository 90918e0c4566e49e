mod play;

use std::path::PathBuf;

use clap::Parser;
use log::info;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

use quiz_core::model::QuizSettingsDraft;
use services::{CatalogService, ConfigError, QuizPhase, SessionController, SettingsService};
use ui::FeedbackTimer;

use crate::play::{Step, handle_line};

#[derive(Debug, Parser)]
#[command(name = "food-quiz", about = "Learn English food words from pictures")]
struct Args {
    /// JSON food table to use instead of the built-in one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Options per multiple-choice question
    #[arg(long)]
    options: Option<u32>,

    /// How long the feedback toast stays up before moving on
    #[arg(long)]
    feedback_delay_ms: Option<u64>,

    /// Wait for Enter after each answer
    #[arg(long)]
    no_auto_advance: bool,

    /// Seed for a reproducible question order
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn overrides(&self) -> QuizSettingsDraft {
        QuizSettingsDraft {
            options_per_question: self.options,
            feedback_delay_ms: self.feedback_delay_ms,
            auto_advance: self.no_auto_advance.then_some(false),
        }
    }
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

enum Event {
    Line(Option<String>),
    FeedbackElapsed,
}

async fn play(mut controller: SessionController) -> Result<(), AppError> {
    let timer = FeedbackTimer::from_settings(controller.settings());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        // Nothing to download in a terminal; the picture is "ready" at once.
        if controller.is_content_loading() {
            controller.mark_content_ready();
        }
        println!("\n{}", ui::render::screen(&controller));

        let event = if controller.phase() == QuizPhase::Feedback {
            tokio::select! {
                line = lines.next_line() => Event::Line(line?),
                () = timer.elapsed() => Event::FeedbackElapsed,
            }
        } else {
            Event::Line(lines.next_line().await?)
        };

        let step = match event {
            Event::FeedbackElapsed => {
                controller.advance_to_next();
                Step::Continue
            }
            Event::Line(None) => Step::Quit,
            Event::Line(Some(line)) => handle_line(&mut controller, &line),
        };
        if let Step::Hint(hint) = &step {
            println!("{hint}");
        }
        if step == Step::Quit {
            info!("player quit");
            return Ok(());
        }
    }
}

async fn run() -> Result<(), AppError> {
    let args = Args::parse();

    let catalog = CatalogService::load(args.catalog.as_deref())?;
    let mut settings_service = SettingsService::new();
    if let Some(path) = &args.settings {
        settings_service = settings_service.with_file(path);
    }
    let settings = settings_service.load(args.overrides())?;

    let controller = match args.seed {
        Some(seed) => SessionController::with_seed(catalog, settings, seed),
        None => SessionController::new(catalog, settings),
    };
    play(controller).await
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
