//! Внешний API анализатора: сериализуемые DTO для JSON-вывода.

pub mod dto;

pub use dto::*;
