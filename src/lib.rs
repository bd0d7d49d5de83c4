//! # calculator_loop
//!
//! Консольный калькулятор: на каждом шаге запрашивает оператор и два числа,
//! выводит результат или сообщение об ошибке и продолжает работу до слова
//! `exit` или конца ввода.
//!
//! Поддерживает:
//! - Числа с плавающей точкой (`f64`)
//! - Операторы `+`, `-`, `*`, `/` и их словесные синонимы
//! - Защиту от деления на ноль
//!
//! # Пример использования
//!
//! ```
//! use calculator_loop::evaluate;
//!
//! assert_eq!(evaluate("+", "2", "3").unwrap(), 5.0);
//! assert_eq!(evaluate("*", "4", "2.5").unwrap(), 10.0);
//! assert!(evaluate("/", "10", "0").is_err());
//! ```

pub mod config;
pub mod logging;
pub mod operand;
pub mod operation;
pub mod operator;
pub mod session;

use std::io;

use config::Config;
use operand::parse_operand;
use operation::Calculation;
use operator::Operator;
use session::{Outcome, Session, SessionError};

/// Исправимая ошибка одного запроса. Сеанс сообщает о ней и продолжает работу.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Оператор не распознан.
    #[error("{0}")]
    InvalidOperator(#[from] operator::UnknownOperator),

    /// Операнд не является числом.
    #[error("{0}")]
    InvalidNumber(#[from] operand::InvalidNumber),

    /// Деление на ноль.
    #[error("{0}")]
    Eval(#[from] operation::EvalError),
}

/// Разбирает операнды и выполняет операцию.
///
/// Если оба операнда некорректны, сообщается о первом.
///
/// # Ошибки
///
/// [`CalcError::InvalidNumber`] или [`CalcError::Eval`].
pub fn calculate(op: Operator, left: &str, right: &str) -> Result<f64, CalcError> {
    let left = parse_operand(left)?;
    let right = parse_operand(right)?;
    let result = Calculation::new(op, left, right).evaluate()?;
    Ok(result)
}

/// Вычисляет запрос, заданный тремя строками: оператор и два операнда.
///
/// Слово выхода здесь не распознаётся и считается неизвестным оператором.
///
/// # Ошибки
///
/// Возвращает [`CalcError`] при любой ошибке запроса.
///
/// # Примеры
///
/// ```
/// use calculator_loop::{CalcError, evaluate};
///
/// assert_eq!(evaluate("-", "2", "3").unwrap(), -1.0);
/// assert!(matches!(evaluate("%", "2", "3"), Err(CalcError::InvalidOperator(_))));
/// assert!(matches!(evaluate("-", "abc", "3"), Err(CalcError::InvalidNumber(_))));
/// ```
pub fn evaluate(op: &str, left: &str, right: &str) -> Result<f64, CalcError> {
    let op: Operator = op.parse()?;
    calculate(op, left, right)
}

/// Запускает интерактивный калькулятор на stdin/stdout с настройками по умолчанию.
///
/// # Ошибки
///
/// Возвращает [`SessionError`] при ошибках чтения/записи.
pub fn run() -> Result<Outcome, SessionError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), Config::default()).run()
}
