//! Разбор числовых операндов.
//!
//! Операнд — конечное число с плавающей точкой (`f64`). Принимаются записи
//! вида `3`, `-2.5`, `.5`, `1e3`. Значения `nan` и `inf` отвергаются.

use std::num::ParseFloatError;

use thiserror::Error;

/// Ошибка разбора операнда.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid number")]
pub struct InvalidNumber {
    /// Введённый текст (без пробелов по краям).
    pub text: String,
    /// Причина.
    pub reason: InvalidNumberReason,
}

/// Почему текст не является числом.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidNumberReason {
    /// Стандартный разбор `f64` не удался.
    Syntax(ParseFloatError),
    /// Разобрано, но значение не конечно (`nan`, `inf`).
    NotFinite,
}

/// Разбирает строку в операнд.
///
/// # Ошибки
///
/// Возвращает [`InvalidNumber`], если строка не является конечным числом.
///
/// # Примеры
///
/// ```
/// use calculator_loop::operand::parse_operand;
///
/// assert_eq!(parse_operand(" 2.5\n").unwrap(), 2.5);
/// assert!(parse_operand("abc").is_err());
/// ```
pub fn parse_operand(input: &str) -> Result<f64, InvalidNumber> {
    let text = input.trim();

    let invalid = |reason| InvalidNumber {
        text: text.to_owned(),
        reason,
    };

    let value: f64 = text
        .parse()
        .map_err(|err| invalid(InvalidNumberReason::Syntax(err)))?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid(InvalidNumberReason::NotFinite))
    }
}
