//! Collaborator interfaces the controller talks to.
//!
//! Implementations live outside the crate (backend bridge, chart widget) except
//! for [`MevalCalculator`](crate::domain::calculator::MevalCalculator). Tests
//! substitute doubles for all three.

use crate::domain::chart::{ChartOptions, ChartSeries};
use crate::domain::conversion::{ConversionRequest, ConversionResult};
use crate::domain::currency::Currency;
use crate::error::{ExpressionError, ServiceError};
use std::future::Future;

/// Remote conversion backend.
pub trait ConversionService {
    /// Convert `request.amount()` and fetch the rate history for the pair.
    fn convert(
        &self,
        request: &ConversionRequest,
    ) -> impl Future<Output = Result<ConversionResult, ServiceError>>;

    /// The selectable currencies, in display order. Called once at startup.
    fn list_currencies(&self) -> impl Future<Output = Result<Vec<Currency>, ServiceError>>;
}

/// Arithmetic expression evaluation for the calculator modal.
pub trait CalculatorService {
    fn evaluate(&self, expression: &str) -> impl Future<Output = Result<f64, ExpressionError>>;
}

/// Draws the rate history.
pub trait ChartRenderer {
    /// Replace whatever chart is currently shown.
    fn render(&self, series: &ChartSeries, options: &ChartOptions);

    fn clear(&self);
}
