use clap::{Arg, ArgMatches, Command};
use crate::services::anthropic::{AnthropicSettings, DEFAULT_API_URL, DEFAULT_MODEL};
use crate::services::options::QuizStrategy;
use crate::services::translator::TranslatorKind;

pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

#[derive(Debug, Clone)]
pub struct ServeSettings {
    pub listen_host: String,
    pub translator: TranslatorKind,
    pub quiz_strategy: QuizStrategy,
    pub anthropic: AnthropicSettings,
}

#[derive(Debug, Clone)]
pub enum Mode {
    Serve(ServeSettings),
    Ask { server: String, text: String },
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub log_file: Option<String>,
    pub mode: Mode,
}

pub fn command() -> Command {
    Command::new("honyakud")
        .version(env!("CARGO_PKG_VERSION"))
        .about("English to Japanese translation gateway with katakana practice")
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .num_args(1)
                .global(true)
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
        .arg(
            Arg::new("listen-host")
                .long("listen-host")
                .num_args(1)
                .default_value("0.0.0.0:5000")
                .help("Specify the listen address (e.g., 0.0.0.0:5000)"),
        )
        .arg(
            Arg::new("translator")
                .long("translator")
                .num_args(1)
                .default_value("lookup")
                .value_parser(["lookup", "anthropic"])
                .help("Translation backend"),
        )
        .arg(
            Arg::new("quiz-strategy")
                .long("quiz-strategy")
                .num_args(1)
                .default_value("balanced")
                .value_parser(["simple", "balanced"])
                .help("How flashcard distractors are picked"),
        )
        .arg(
            Arg::new("anthropic-api-key")
                .long("anthropic-api-key")
                .num_args(1)
                .help("API key for the anthropic backend (defaults to $ANTHROPIC_API_KEY)"),
        )
        .arg(
            Arg::new("anthropic-model")
                .long("anthropic-model")
                .num_args(1)
                .default_value(DEFAULT_MODEL)
                .help("Model used by the anthropic backend"),
        )
        .arg(
            Arg::new("anthropic-url")
                .long("anthropic-url")
                .num_args(1)
                .default_value(DEFAULT_API_URL)
                .help("Messages endpoint used by the anthropic backend"),
        )
        .subcommand(
            Command::new("ask")
                .about("Send text to a running gateway and print the translation")
                .arg(
                    Arg::new("server")
                        .long("server")
                        .num_args(1)
                        .default_value("http://127.0.0.1:5000")
                        .help("Base URL of the gateway"),
                )
                .arg(
                    Arg::new("text")
                        .num_args(0..)
                        .trailing_var_arg(true)
                        .help("English text to translate"),
                ),
        )
}

fn string_arg(matches: &ArgMatches, id: &str) -> Result<String, String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .ok_or_else(|| format!("Missing value for --{}", id))
}

impl Settings {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, String> {
        let log_file = matches.get_one::<String>("log-file").cloned();

        if let Some(ask) = matches.subcommand_matches("ask") {
            let text = ask
                .get_many::<String>("text")
                .map(|words| words.cloned().collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            return Ok(Settings {
                log_file,
                mode: Mode::Ask {
                    server: string_arg(ask, "server")?,
                    text,
                },
            });
        }

        let api_key = matches
            .get_one::<String>("anthropic-api-key")
            .cloned()
            .or_else(|| std::env::var(API_KEY_ENV).ok());

        Ok(Settings {
            log_file,
            mode: Mode::Serve(ServeSettings {
                listen_host: string_arg(matches, "listen-host")?,
                translator: string_arg(matches, "translator")?.parse()?,
                quiz_strategy: string_arg(matches, "quiz-strategy")?.parse()?,
                anthropic: AnthropicSettings {
                    api_key,
                    model: string_arg(matches, "anthropic-model")?,
                    api_url: string_arg(matches, "anthropic-url")?,
                },
            }),
        })
    }
}
