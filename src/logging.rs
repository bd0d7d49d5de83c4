//! Журналирование через `tracing`.
//!
//! Журнал пишется в stderr, чтобы stdout оставался чистым протоколом сеанса.
//! По умолчанию уровень `warn`; переменная `RUST_LOG` его переопределяет:
//!
//! ```bash
//! RUST_LOG=calculator_loop=debug calculator-loop
//! ```

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Уровень по умолчанию, если `RUST_LOG` не задана.
pub const DEFAULT_FILTER: &str = "warn";

/// Инициализирует подписчика.
///
/// Повторные вызовы ничего не делают.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Подписчик мог быть установлен снаружи (например, в тестах)
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }
}
