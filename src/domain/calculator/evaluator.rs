//! Local arithmetic evaluator backed by `meval`.

use crate::error::ExpressionError;
use crate::service::CalculatorService;

/// `CalculatorService` that evaluates arithmetic in-process.
///
/// Only arithmetic expressions are accepted: numbers, `+ - * / ^ %`,
/// parentheses and `meval`'s built-in constants and functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct MevalCalculator;

impl MevalCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn eval(&self, expression: &str) -> Result<f64, ExpressionError> {
        let expression = expression.trim();
        if expression.is_empty() {
            return Err(ExpressionError::Empty);
        }
        let value =
            meval::eval_str(expression).map_err(|e| ExpressionError::Malformed(e.to_string()))?;
        if !value.is_finite() {
            return Err(ExpressionError::NonFinite);
        }
        Ok(value)
    }
}

impl CalculatorService for MevalCalculator {
    async fn evaluate(&self, expression: &str) -> Result<f64, ExpressionError> {
        self.eval(expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_eval_arithmetic() {
        let calc = MevalCalculator::new();
        assert_eq!(assert_ok!(calc.eval("2+2")), 4.0);
        assert_eq!(assert_ok!(calc.eval("(1 + 2) * 3")), 9.0);
        assert_eq!(assert_ok!(calc.eval("10 / 4")), 2.5);
        assert_eq!(assert_ok!(calc.eval("2^10")), 1024.0);
    }

    #[test]
    fn test_eval_rejects_empty() {
        let calc = MevalCalculator::new();
        assert_eq!(calc.eval("   "), Err(ExpressionError::Empty));
    }

    #[test]
    fn test_eval_rejects_malformed() {
        let calc = MevalCalculator::new();
        assert!(matches!(
            calc.eval("2+*"),
            Err(ExpressionError::Malformed(_))
        ));
        assert_err!(calc.eval("(1+2"));
        assert_err!(calc.eval("std::process::exit(1)"));
    }

    #[test]
    fn test_eval_rejects_non_finite() {
        let calc = MevalCalculator::new();
        assert_eq!(calc.eval("1/0"), Err(ExpressionError::NonFinite));
    }

    #[tokio::test]
    async fn test_evaluate_through_service_trait() {
        let calc = MevalCalculator::new();
        assert_eq!(calc.evaluate("6*7").await, Ok(42.0));
    }
}
