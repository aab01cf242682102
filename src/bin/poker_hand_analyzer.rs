// src/bin/poker_hand_analyzer.rs
//
// Без аргументов – тасуем колоду и раздаём руки.
// С путём к файлу – читаем тестовую колоду (одна рука на строку, карты через запятую).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use poker_hand_analyzer::analyzer::report::{
    render_error, render_random_report, render_test_deck_body, render_test_deck_header, ErrorOutput,
};
use poker_hand_analyzer::analyzer::{
    deal_random, hands_from_lines, rank_hands, read_test_deck_lines, AnalyzerConfig, AnalyzerError,
};
use poker_hand_analyzer::api::AnalysisReportDto;
use poker_hand_analyzer::infra::{DeterministicRng, SystemRng};

/// Анализатор 5-карточных покерных рук.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Файл тестовой колоды. Без него руки раздаются из случайной колоды.
    file: Option<PathBuf>,

    /// Seed для воспроизводимой раздачи.
    #[arg(long)]
    seed: Option<u64>,

    /// Сколько рук раздавать.
    #[arg(long)]
    hands: Option<usize>,

    /// JSON-файл с AnalyzerConfig.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Печатать отчёт в JSON вместо текста.
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<AnalyzerConfig, AnalyzerError> {
    let mut config = match &args.config {
        Some(path) => AnalyzerConfig::from_json_file(path)?,
        None => AnalyzerConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(hands) = args.hands {
        config.hands_per_deal = hands;
    }
    config.validate()?;
    Ok(config)
}

fn run_random(config: &AnalyzerConfig, json: bool) -> Result<(), AnalyzerError> {
    let outcome = match config.seed {
        Some(seed) => deal_random(config, &mut DeterministicRng::from_seed(seed))?,
        None => deal_random(config, &mut SystemRng)?,
    };
    let ranked = rank_hands(outcome.hands.clone());

    if json {
        let dto = AnalysisReportDto::new("random", config.seed, &ranked, &outcome.remaining.cards);
        println!("{}", serde_json::to_string_pretty(&dto)?);
    } else {
        println!(
            "{}",
            render_random_report(
                &outcome.shuffled.cards,
                &outcome.hands,
                &outcome.remaining.cards,
                &ranked,
                config.deck_row_width,
            )
        );
    }
    Ok(())
}

fn run_test_deck(path: &Path, config: &AnalyzerConfig, json: bool) -> Result<(), AnalyzerError> {
    let lines = read_test_deck_lines(path, config)?;

    // Эхо строк печатается до проверки рук.
    if !json {
        println!("{}", render_test_deck_header(path, &lines));
        println!();
    }

    let hands = hands_from_lines(&lines)?;
    let ranked = rank_hands(hands.clone());

    if json {
        let dto = AnalysisReportDto::new(path.display().to_string(), None, &ranked, &[]);
        println!("{}", serde_json::to_string_pretty(&dto)?);
    } else {
        println!("{}", render_test_deck_body(&hands, &ranked));
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let result = load_config(&args).and_then(|config| match &args.file {
        Some(path) => run_test_deck(path, &config, args.json),
        None => run_random(&config, args.json),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match render_error(&err, args.json) {
                ErrorOutput::Stdout(text) => println!("{text}"),
                ErrorOutput::Stderr(text) => eprintln!("{text}"),
            }
            ExitCode::FAILURE
        }
    }
}
