//! Анализатор 5-карточных покерных рук.
//!
//! Поток данных односторонний: модель карты (`domain::card`) →
//! классификатор (`eval::classifier`) → ранжирование (`eval::ranking`).
//! Всё остальное – колода, пакеты рук из файла, отчёты, CLI – обвязка вокруг него.

pub mod analyzer;
pub mod api;
pub mod domain;
pub mod eval;
pub mod infra;
