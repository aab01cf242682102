//! Анализатор: всё, что окружает оценщик рук.
//!
//! - конфиг (config.rs);
//! - пакет рук: случайная раздача, тестовая колода, дубликаты (batch.rs);
//! - текстовый отчёт (report.rs);
//! - ошибки (errors.rs).

pub mod batch;
pub mod config;
pub mod errors;
pub mod report;

pub use batch::*;
pub use config::AnalyzerConfig;
pub use errors::AnalyzerError;
