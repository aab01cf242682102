//! Текстовый отчёт в стиле консольного анализатора.

use std::path::Path;

use super::errors::AnalyzerError;
use crate::domain::card::Card;
use crate::domain::hand::Hand;

pub const BANNER: &str = "*** P O K E R H A N D A N A L Y Z E R ***";
pub const WINNING_ORDER_HEADER: &str = "--- WINNING HAND ORDER ---";

/// Карты колоды по `row_width` в строке, каждая выровнена по ширине 3.
pub fn render_deck(cards: &[Card], row_width: usize) -> String {
    cards
        .chunks(row_width.max(1))
        .map(|row| row.iter().map(|c| format!("{c:>3}")).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

fn count_word(n: usize) -> String {
    const WORDS: [&str; 11] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];
    WORDS.get(n).map(|w| w.to_string()).unwrap_or_else(|| n.to_string())
}

/// Руки в порядке раздачи, по одной на строку.
pub fn render_hands(hands: &[Hand]) -> String {
    let mut out = vec![format!("*** Here are the {} hands...", count_word(hands.len()))];
    out.extend(hands.iter().map(|h| h.to_string()));
    out.join("\n")
}

/// Итоговый порядок: `<карты> - <категория>`, сильнейшая рука первой.
pub fn render_winning_order(ranked: &[Hand]) -> String {
    let mut out = vec![WINNING_ORDER_HEADER.to_string()];
    out.extend(ranked.iter().map(|h| format!("{} - {}", h, h.label())));
    out.join("\n")
}

/// Отчёт по случайной раздаче.
pub fn render_random_report(
    shuffled: &[Card],
    dealt: &[Hand],
    remaining: &[Card],
    ranked: &[Hand],
    row_width: usize,
) -> String {
    [
        BANNER.to_string(),
        String::new(),
        "*** USING RANDOMIZED DECK OF CARDS ***".to_string(),
        String::new(),
        "*** Shuffled 52 card deck:".to_string(),
        render_deck(shuffled, row_width),
        String::new(),
        render_hands(dealt),
        String::new(),
        "*** Here is what remains in the deck...".to_string(),
        render_deck(remaining, row_width),
        String::new(),
        render_winning_order(ranked),
    ]
    .join("\n")
}

/// Шапка отчёта по тестовой колоде: путь и эхо строк, которые пошли в разбор
/// (см. [`consumed_lines`](super::batch::consumed_lines)).
pub fn render_test_deck_header(path: &Path, lines: &[String]) -> String {
    let mut out = vec![
        BANNER.to_string(),
        String::new(),
        "*** USING TEST DECK ***".to_string(),
        String::new(),
        format!("*** File: {}", path.display()),
    ];
    out.extend(lines.iter().cloned());
    out.join("\n")
}

/// Тело отчёта по тестовой колоде (после шапки).
pub fn render_test_deck_body(dealt: &[Hand], ranked: &[Hand]) -> String {
    [render_hands(dealt), String::new(), render_winning_order(ranked)].join("\n")
}

/// Сообщение о дубликате карты в наборе.
pub fn render_duplicate_error(card: &str) -> String {
    [
        "*** ERROR - DUPLICATED CARD FOUND IN DECK ***".to_string(),
        String::new(),
        format!("*** DUPLICATE: {card} ***"),
    ]
    .join("\n")
}

/// Куда печатать сообщение об ошибке.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorOutput {
    Stdout(String),
    Stderr(String),
}

/// Сообщение об ошибке запуска. Дубликат карты в текстовом режиме – часть отчёта,
/// в JSON-режиме stdout остаётся только под JSON.
pub fn render_error(err: &AnalyzerError, json: bool) -> ErrorOutput {
    match err {
        AnalyzerError::DuplicateCard { card } if !json => ErrorOutput::Stdout(render_duplicate_error(card)),
        other => ErrorOutput::Stderr(format!("error: {other}")),
    }
}
