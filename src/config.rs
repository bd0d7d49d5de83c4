//! Настройки сеанса.
//!
//! Файлов конфигурации и флагов командной строки нет: бинарник всегда
//! использует [`Config::default`], а библиотека позволяет подставить свои
//! строки (например, в тестах).

use crate::operator::Operator;

/// Тексты и слово выхода для одного сеанса.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Слово, завершающее сеанс (сравнивается без учёта регистра).
    pub exit_keyword: String,
    /// Приглашение ко вводу оператора.
    pub operator_prompt: String,
    /// Приглашение ко вводу первого числа.
    pub first_operand_prompt: String,
    /// Приглашение ко вводу второго числа.
    pub second_operand_prompt: String,
    /// Строка, выводимая при запуске. Пустая строка не выводится.
    pub banner: String,
    /// Строка, выводимая при завершении. Пустая строка не выводится.
    pub farewell: String,
}

impl Default for Config {
    fn default() -> Self {
        let exit_keyword = "exit".to_owned();
        let symbols: Vec<String> = Operator::ALL.iter().map(ToString::to_string).collect();

        Self {
            banner: format!(
                "Calculator. Enter an operator ({}) or '{exit_keyword}' to quit.",
                symbols.join(", ")
            ),
            exit_keyword,
            operator_prompt: "operator> ".to_owned(),
            first_operand_prompt: "first number> ".to_owned(),
            second_operand_prompt: "second number> ".to_owned(),
            farewell: "Goodbye!".to_owned(),
        }
    }
}

impl Config {
    /// Настройки без баннера и прощания.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            banner: String::new(),
            farewell: String::new(),
            ..Self::default()
        }
    }
}
