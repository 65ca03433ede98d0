//! Calculator domain — keypad input, display buffer and modal visibility.

pub mod evaluator;

use serde::{Deserialize, Serialize};

pub use evaluator::MevalCalculator;

/// A calculator key press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculatorKey {
    /// Text appended to the display (digits, operators, parentheses).
    Input(String),
    /// `AC`
    Clear,
    /// `⌫`
    Backspace,
    /// `=`
    Evaluate,
}

impl CalculatorKey {
    /// Map a keypad button label onto a key.
    pub fn from_label(label: &str) -> Self {
        match label {
            "=" => Self::Evaluate,
            "AC" => Self::Clear,
            "⌫" => Self::Backspace,
            other => Self::Input(other.to_string()),
        }
    }
}

/// Calculator widget state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorState {
    display: String,
    open: bool,
    error: Option<String>,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an editing key. `Evaluate` is left to the caller.
    pub fn press(&mut self, key: &CalculatorKey) {
        match key {
            CalculatorKey::Input(text) => {
                self.error = None;
                self.display.push_str(text);
            }
            CalculatorKey::Clear => {
                self.error = None;
                self.display.clear();
            }
            CalculatorKey::Backspace => {
                self.error = None;
                self.display.pop();
            }
            CalculatorKey::Evaluate => {}
        }
    }

    /// The display text with `×`/`÷` replaced by `*`/`/`.
    pub fn expression(&self) -> String {
        self.display.replace('×', "*").replace('÷', "/")
    }

    pub(crate) fn show_result(&mut self, text: &str) {
        self.error = None;
        self.display = text.to_string();
    }

    pub(crate) fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(state: &mut CalculatorState, labels: &[&str]) {
        for label in labels {
            state.press(&CalculatorKey::from_label(label));
        }
    }

    #[test]
    fn test_from_label() {
        assert_eq!(CalculatorKey::from_label("="), CalculatorKey::Evaluate);
        assert_eq!(CalculatorKey::from_label("AC"), CalculatorKey::Clear);
        assert_eq!(CalculatorKey::from_label("⌫"), CalculatorKey::Backspace);
        assert_eq!(
            CalculatorKey::from_label("7"),
            CalculatorKey::Input("7".to_string())
        );
    }

    #[test]
    fn test_keys_accumulate_and_edit() {
        let mut calc = CalculatorState::new();
        press_all(&mut calc, &["1", "2", "×", "3"]);
        assert_eq!(calc.display(), "12×3");
        press_all(&mut calc, &["⌫"]);
        assert_eq!(calc.display(), "12×");
        press_all(&mut calc, &["⌫"]);
        assert_eq!(calc.display(), "12");
        press_all(&mut calc, &["AC"]);
        assert_eq!(calc.display(), "");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut calc = CalculatorState::new();
        calc.press(&CalculatorKey::Backspace);
        assert_eq!(calc.display(), "");
    }

    #[test]
    fn test_expression_normalizes_operators() {
        let mut calc = CalculatorState::new();
        press_all(&mut calc, &["8", "÷", "2", "×", "3"]);
        assert_eq!(calc.expression(), "8/2*3");
    }

    #[test]
    fn test_next_key_clears_error() {
        let mut calc = CalculatorState::new();
        calc.show_error("Invalid expression");
        assert_eq!(calc.error(), Some("Invalid expression"));
        calc.press(&CalculatorKey::Input("1".to_string()));
        assert_eq!(calc.error(), None);
    }
}
