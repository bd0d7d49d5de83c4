//! Цикл калькулятора: оператор, два числа, результат, и снова.
//!
//! Сеанс работает поверх любых [`BufRead`] и [`Write`], поэтому его можно
//! гонять как на stdin/stdout, так и на буферах в памяти.
//!
//! ```
//! use std::io::Cursor;
//!
//! use calculator_loop::config::Config;
//! use calculator_loop::session::{Outcome, Session};
//!
//! let mut transcript = Vec::new();
//! let outcome = Session::new(Cursor::new("+\n2\n3\nexit\n"), &mut transcript, Config::quiet())
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(outcome, Outcome::Exit);
//! assert!(String::from_utf8(transcript).unwrap().contains("5\n"));
//! ```

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::Config;
use crate::operation::format_result;
use crate::operator::{Command, Operator, parse_command};
use crate::{CalcError, calculate};

/// Как завершился сеанс.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Пользователь ввёл слово выхода.
    Exit,
    /// Входной поток закончился.
    EndOfInput,
}

/// Неисправимая ошибка сеанса.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Ошибка чтения или записи консоли.
    #[error("input/output failure: {0}")]
    Io(#[from] io::Error),
}

enum Step {
    Continue,
    Done(Outcome),
}

#[derive(Clone, Copy)]
enum Prompt {
    Operator,
    FirstOperand,
    SecondOperand,
}

/// Интерактивный сеанс калькулятора.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: Config,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Создаёт сеанс над заданными потоками.
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
            line: Vec::new(),
        }
    }

    /// Выполняет запросы до слова выхода или конца ввода.
    ///
    /// Ошибки пользователя (неизвестный оператор, не число, деление на ноль)
    /// выводятся в протокол и не прерывают сеанс.
    ///
    /// # Ошибки
    ///
    /// Возвращает [`SessionError::Io`] при сбое чтения или записи.
    pub fn run(mut self) -> Result<Outcome, SessionError> {
        info!("calculator session started");

        if !self.config.banner.is_empty() {
            writeln!(self.output, "{}", self.config.banner)?;
        }

        let outcome = loop {
            if let Step::Done(outcome) = self.step()? {
                break outcome;
            }
        };

        if outcome == Outcome::EndOfInput {
            // Курсор остался после приглашения
            writeln!(self.output)?;
        }
        if !self.config.farewell.is_empty() {
            writeln!(self.output, "{}", self.config.farewell)?;
        }
        self.output.flush()?;

        info!(?outcome, "calculator session finished");
        Ok(outcome)
    }

    /// Один запрос.
    fn step(&mut self) -> Result<Step, SessionError> {
        let Some(token) = self.prompt(Prompt::Operator)? else {
            return Ok(Step::Done(Outcome::EndOfInput));
        };

        // Пустая строка: токена нет, ошибки тоже нет
        if token.trim().is_empty() {
            return Ok(Step::Continue);
        }

        let op = match parse_command(&token, &self.config.exit_keyword) {
            Ok(Command::Exit) => return Ok(Step::Done(Outcome::Exit)),
            Ok(Command::Apply(op)) => op,
            Err(err) => {
                self.report(&CalcError::from(err))?;
                return Ok(Step::Continue);
            }
        };

        // Оба числа читаются до проверки, чтобы второе не попало на место оператора
        let Some(first) = self.prompt(Prompt::FirstOperand)? else {
            return Ok(Step::Done(Outcome::EndOfInput));
        };
        let Some(second) = self.prompt(Prompt::SecondOperand)? else {
            return Ok(Step::Done(Outcome::EndOfInput));
        };

        self.answer(op, &first, &second)?;
        Ok(Step::Continue)
    }

    fn answer(&mut self, op: Operator, first: &str, second: &str) -> Result<(), SessionError> {
        match calculate(op, first, second) {
            Ok(value) => {
                debug!(%op, first = first.trim(), second = second.trim(), value, "computed");
                writeln!(self.output, "{}", format_result(value))?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(())
    }

    fn report(&mut self, err: &CalcError) -> Result<(), SessionError> {
        debug!(error = ?err, "request rejected");
        writeln!(self.output, "Error: {err}")?;
        Ok(())
    }

    /// Выводит приглашение и читает строку. `None` означает конец ввода.
    ///
    /// Байты не в UTF-8 заменяются на `U+FFFD`, такую строку отвергнет разбор
    /// оператора или числа.
    fn prompt(&mut self, prompt: Prompt) -> io::Result<Option<String>> {
        let text = match prompt {
            Prompt::Operator => &self.config.operator_prompt,
            Prompt::FirstOperand => &self.config.first_operand_prompt,
            Prompt::SecondOperand => &self.config.second_operand_prompt,
        };
        write!(self.output, "{text}")?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_until(b'\n', &mut self.line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&self.line).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn transcript(input: &str) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = Session::new(Cursor::new(input), &mut out, Config::quiet())
            .run()
            .unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    /// Строки протокола без приглашений.
    fn answers(output: &str) -> Vec<String> {
        let config = Config::quiet();
        output
            .lines()
            .map(|line| {
                line.replace(&config.operator_prompt, "")
                    .replace(&config.first_operand_prompt, "")
                    .replace(&config.second_operand_prompt, "")
            })
            .filter(|line| !line.is_empty())
            .collect()
    }

    #[test]
    fn single_request_then_exit() {
        let (outcome, out) = transcript("+\n2\n3\nexit\n");
        assert_eq!(outcome, Outcome::Exit);
        assert_eq!(answers(&out), ["5"]);
    }

    #[test]
    fn bad_operator_does_not_read_operands() {
        let (outcome, out) = transcript("%\n*\n4\n2.5\nexit\n");
        assert_eq!(outcome, Outcome::Exit);
        assert_eq!(answers(&out), ["Error: unrecognized operator", "10"]);
    }

    #[test]
    fn empty_operator_line_reprompts() {
        let (_, out) = transcript("\n   \n-\n5\n8\n");
        assert_eq!(answers(&out), ["-3"]);
        assert!(!out.contains("Error"));
    }

    #[test]
    fn end_of_input_between_operands() {
        let (outcome, out) = transcript("+\n2\n");
        assert_eq!(outcome, Outcome::EndOfInput);
        assert!(!out.contains("Error"));
    }

    #[test]
    fn end_of_input_without_trailing_newline() {
        let (outcome, out) = transcript("/\n9\n3");
        assert_eq!(outcome, Outcome::EndOfInput);
        assert_eq!(answers(&out), ["3"]);
    }

    #[test]
    fn prompts_are_written() {
        let (_, out) = transcript("+\n1\n1\n");
        let config = Config::quiet();
        assert!(out.starts_with(&config.operator_prompt));
        assert!(out.contains(&config.first_operand_prompt));
        assert!(out.contains(&config.second_operand_prompt));
    }

    #[test]
    fn banner_and_farewell() {
        let mut out = Vec::new();
        let config = Config::default();
        Session::new(Cursor::new("exit\n"), &mut out, config.clone())
            .run()
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with(&config.banner));
        assert!(out.trim_end().ends_with(&config.farewell));
    }

    fn transcript_bytes(input: &[u8]) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = Session::new(Cursor::new(input), &mut out, Config::quiet())
            .run()
            .unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn non_utf8_operand_is_invalid_number() {
        let (outcome, out) = transcript_bytes(b"+\n\xff\n3\n+\n1\n2\nexit\n");
        assert_eq!(outcome, Outcome::Exit);
        assert_eq!(answers(&out), ["Error: invalid number", "3"]);
    }

    #[test]
    fn non_utf8_operator_is_unrecognized() {
        let (outcome, out) = transcript_bytes(b"\xfe\xff\n*\n2\n4\n");
        assert_eq!(outcome, Outcome::EndOfInput);
        assert_eq!(answers(&out), ["Error: unrecognized operator", "8"]);
    }

    struct BrokenInput;

    impl io::Read for BrokenInput {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("stream broken"))
        }
    }

    #[test]
    fn read_failure_is_fatal() {
        let input = io::BufReader::new(BrokenInput);
        let result = Session::new(input, Vec::<u8>::new(), Config::quiet()).run();
        assert!(matches!(result, Err(SessionError::Io(_))));
    }
}
