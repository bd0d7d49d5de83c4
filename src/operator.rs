//! Распознавание оператора, введённого на первом шаге запроса.
//!
//! Допускаются символы `+`, `-`, `*`, `/` и их словесные синонимы
//! (`add`, `minus`, `times`, `divide` и т.д.), а также слово выхода.
//!
//! # Пример
//!
//! ```
//! use calculator_loop::operator::{Command, Operator, parse_command};
//!
//! assert_eq!(parse_command("*", "exit"), Ok(Command::Apply(Operator::Mul)));
//! assert_eq!(parse_command(" EXIT ", "exit"), Ok(Command::Exit));
//! assert!(parse_command("%", "exit").is_err());
//! ```

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

/// Нераспознанный оператор.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized operator")]
pub struct UnknownOperator {
    /// Введённый текст (без пробелов по краям).
    pub token: String,
}

/// Арифметический оператор.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Сложение.
    Add,
    /// Вычитание.
    Sub,
    /// Умножение.
    Mul,
    /// Деление.
    Div,
}

impl Operator {
    /// Все операторы в порядке вывода в подсказке.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Символьная запись оператора.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    fn from_keyword(word: &str) -> Option<Self> {
        let op = match word.to_ascii_lowercase().as_str() {
            "add" | "plus" => Self::Add,
            "sub" | "subtract" | "minus" => Self::Sub,
            "mul" | "multiply" | "times" => Self::Mul,
            "div" | "divide" => Self::Div,
            _ => return None,
        };
        Some(op)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();

        let mut chars = token.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        };
        if let Some(op) = single.and_then(|ch| Self::ALL.into_iter().find(|op| op.symbol() == ch)) {
            return Ok(op);
        }

        Self::from_keyword(token).ok_or_else(|| UnknownOperator {
            token: token.to_owned(),
        })
    }
}

/// Что пользователь ввёл на месте оператора.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Завершить сеанс.
    Exit,
    /// Выполнить операцию над двумя числами.
    Apply(Operator),
}

/// Разбирает строку оператора.
///
/// Слово выхода сравнивается без учёта регистра и пробелов по краям.
///
/// # Ошибки
///
/// Возвращает [`UnknownOperator`], если строка не является ни оператором,
/// ни словом выхода.
pub fn parse_command(input: &str, exit_keyword: &str) -> Result<Command, UnknownOperator> {
    let token = input.trim();

    if token.eq_ignore_ascii_case(exit_keyword.trim()) {
        return Ok(Command::Exit);
    }

    token.parse().map(Command::Apply)
}
