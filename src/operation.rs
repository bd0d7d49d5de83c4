//! Одна арифметическая операция над двумя числами.
//!
//! # Примеры
//!
//! ```
//! use calculator_loop::operation::{Calculation, EvalError};
//! use calculator_loop::operator::Operator;
//!
//! let c = Calculation::new(Operator::Add, 2.0, 3.0);
//! assert_eq!(c.evaluate(), Ok(5.0));
//!
//! let c = Calculation::new(Operator::Div, 10.0, 0.0);
//! assert_eq!(c.evaluate(), Err(EvalError::DivisionByZero));
//! ```

use thiserror::Error;

use crate::operator::Operator;

/// Ошибки при вычислении.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// Деление на ноль.
    #[error("division by zero")]
    DivisionByZero,
}

impl Operator {
    /// Применить оператор к операндам.
    ///
    /// # Ошибки
    ///
    /// [`EvalError::DivisionByZero`], если делитель равен нулю (в том числе `-0.0`).
    pub fn apply(self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
        }
    }
}

/// Запрос пользователя: оператор и два операнда.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    /// Оператор.
    pub op: Operator,
    /// Левый операнд.
    pub left: f64,
    /// Правый операнд.
    pub right: f64,
}

impl Calculation {
    #[must_use]
    pub const fn new(op: Operator, left: f64, right: f64) -> Self {
        Self { op, left, right }
    }

    /// Вычислить результат.
    ///
    /// # Ошибки
    ///
    /// [`EvalError::DivisionByZero`] при делении на ноль.
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        self.op.apply(self.left, self.right)
    }
}

/// Форматирует результат для вывода.
///
/// Используется обычное представление `f64`; отрицательный ноль выводится как `0`.
#[must_use]
pub fn format_result(value: f64) -> String {
    if value == 0.0 {
        // -0.0 == 0.0
        return "0".to_owned();
    }
    value.to_string()
}
