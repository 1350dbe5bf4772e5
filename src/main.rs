use actix_web::{web, App, HttpServer};
use chrono::Utc;
use log::{error, info};
use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

mod cli;
mod flow;
mod handlers;
mod models;
mod services;
mod utils;

use cli::{Mode, ServeSettings, Settings};
use flow::{FlowState, Notice, Outcome, TranslationFlow};
use models::AppState;
use services::gateway_client::GatewayClient;
use services::kana::katakana;
use services::translator::build_translator;

// Function to initialize logging
fn init_logging(log_file: Option<&String>) -> io::Result<()> {
    if let Some(file) = log_file {
        let log_output = OpenOptions::new()
            .create(true)
            .append(true)
            .open(file)?;

        env_logger::Builder::from_default_env()
            .target(env_logger::Target::Pipe(Box::new(log_output)))
            .init();
    } else {
        env_logger::init();
    }
    Ok(())
}

async fn serve(settings: ServeSettings) -> io::Result<()> {
    let translator = build_translator(settings.translator, settings.anthropic)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    info!(
        "Loaded {} katakana; quiz strategy {}",
        katakana().len(),
        settings.quiz_strategy
    );

    let state = AppState {
        translator,
        quiz_strategy: settings.quiz_strategy,
        started_at: Utc::now(),
    };
    let shared_state = web::Data::new(state);

    info!("Listening on {}", settings.listen_host);
    HttpServer::new(move || {
        App::new()
            .app_data(shared_state.clone())
            .configure(handlers::routes)
    })
    .bind(&settings.listen_host)?
    .run()
    .await
}

fn report(notice: &Notice) {
    eprintln!("{}: {}", notice.title, notice.description);
}

/// Translate `text`, or every line of stdin when no text was given
async fn ask(server: &str, text: &str) -> io::Result<()> {
    let client = GatewayClient::new(server);
    info!("Asking {}", client.endpoint());
    let mut flow = TranslationFlow::new(Arc::new(client));

    let inputs: Vec<String> = if text.is_empty() {
        io::stdin().lines().collect::<io::Result<_>>()?
    } else {
        vec![text.to_string()]
    };

    let mut failures = 0;
    for input in &inputs {
        if let Outcome::Rejected(notice) = flow.submit(input).await {
            report(&notice);
            failures += 1;
            continue;
        }

        match flow.state() {
            FlowState::Ready(result) => {
                println!("{}", result.japanese);
                println!("{}", result.romaji);
                if let Some(syllables) = &result.syllables {
                    println!("{}", syllables);
                }
            }
            FlowState::Failed(notice) => {
                report(notice);
                failures += 1;
            }
            // submit() holds the flow until its own answer lands, so it
            // never ends idle or pending here
            FlowState::Idle | FlowState::Pending => failures += 1,
        }
        flow.reset();
    }

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let matches = cli::command().get_matches();
    let settings = Settings::from_matches(&matches)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    init_logging(settings.log_file.as_ref())?;

    match settings.mode {
        Mode::Serve(serve_settings) => serve(serve_settings).await.map_err(|e| {
            error!("Server stopped: {}", e);
            e
        }),
        Mode::Ask { server, text } => ask(&server, &text).await,
    }
}
