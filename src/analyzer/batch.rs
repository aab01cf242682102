//! Пакет рук, которые оцениваются вместе: случайная раздача или тестовая колода из файла.
//!
//! Здесь же живёт проверка дубликатов – она требует состояния поверх всех рук,
//! поэтому классификатор о ней не знает.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use super::config::AnalyzerConfig;
use super::errors::AnalyzerError;
use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::Hand;
use crate::eval::{sort_strongest_first, EvalError};
use crate::infra::RandomSource;

/// Результат случайной раздачи.
#[derive(Clone, Debug)]
pub struct DealOutcome {
    /// Вся колода сразу после тасования.
    pub shuffled: Deck,
    /// Руки в порядке раздачи.
    pub hands: Vec<Hand>,
    /// Что осталось в колоде.
    pub remaining: Deck,
}

/// Перетасовать стандартную колоду и раздать руки.
pub fn deal_random<R: RandomSource>(config: &AnalyzerConfig, rng: &mut R) -> Result<DealOutcome, AnalyzerError> {
    config.validate()?;

    let mut deck = Deck::standard_52();
    deck.shuffle(rng);
    let shuffled = deck.clone();

    let hands = deck.deal_hands(config.hands_per_deal, config.cards_per_hand)?;

    Ok(DealOutcome {
        shuffled,
        hands,
        remaining: deck,
    })
}

fn line_tokens(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Строки тестовой колоды, которые реально идут в разбор.
///
/// Строки без карт пропускаются, берётся не больше `max_hands` строк.
pub fn consumed_lines(text: &str, max_hands: usize) -> Vec<String> {
    text.lines()
        .filter(|line| !line_tokens(line).is_empty())
        .take(max_hands)
        .map(str::to_string)
        .collect()
}

/// Разобрать текст тестовой колоды в токены: одна рука на строку, карты через запятую.
pub fn split_hand_lines(text: &str, max_hands: usize) -> Vec<Vec<String>> {
    consumed_lines(text, max_hands)
        .iter()
        .map(|line| line_tokens(line))
        .collect()
}

/// Первый токен, который встречается в пакете повторно (без учёта регистра).
pub fn find_duplicate(hands: &[Vec<String>]) -> Option<String> {
    let mut seen = HashSet::new();
    hands
        .iter()
        .flatten()
        .find(|token| !seen.insert(token.to_ascii_uppercase()))
        .cloned()
}

/// Построить руки из токенов. Сначала – дубликаты по всему пакету, потом разбор карт.
pub fn hands_from_tokens(lines: &[Vec<String>]) -> Result<Vec<Hand>, AnalyzerError> {
    if let Some(card) = find_duplicate(lines) {
        warn!(%card, "duplicate card in batch");
        return Err(AnalyzerError::DuplicateCard { card });
    }

    lines
        .iter()
        .enumerate()
        .map(|(idx, tokens)| {
            let line = idx + 1;
            let cards = tokens
                .iter()
                .map(|t| t.parse::<Card>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| AnalyzerError::InvalidHand {
                    line,
                    source: EvalError::from(e),
                })?;
            Hand::new(&cards).map_err(|source| AnalyzerError::InvalidHand { line, source })
        })
        .collect()
}

/// Построить руки из строк тестовой колоды (см. [`consumed_lines`]).
pub fn hands_from_lines(lines: &[String]) -> Result<Vec<Hand>, AnalyzerError> {
    let tokens: Vec<Vec<String>> = lines.iter().map(|line| line_tokens(line)).collect();
    hands_from_tokens(&tokens)
}

/// Разобрать текст тестовой колоды в руки.
pub fn load_hands(text: &str, config: &AnalyzerConfig) -> Result<Vec<Hand>, AnalyzerError> {
    hands_from_lines(&consumed_lines(text, config.max_hands))
}

/// Прочитать из файла строки тестовой колоды, которые пойдут в разбор.
pub fn read_test_deck_lines(path: impl AsRef<Path>, config: &AnalyzerConfig) -> Result<Vec<String>, AnalyzerError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let lines = consumed_lines(&text, config.max_hands);

    info!(path = %path.display(), lines = lines.len(), "test deck loaded");
    Ok(lines)
}

/// Вернуть руки от сильнейшей к слабейшей.
pub fn rank_hands(mut hands: Vec<Hand>) -> Vec<Hand> {
    sort_strongest_first(&mut hands);
    hands
}
