//! View state container, owned by the controller and updated only through these methods.

use super::{parse_amount, ConversionRequest, ConversionResult};
use crate::defaults::VALIDATION_PROMPT;
use crate::domain::calculator::CalculatorState;
use crate::domain::chart::{ChartFailurePolicy, ChartSeries};
use crate::domain::currency::CurrencyCatalog;
use crate::error::{InputValidationError, ServiceError};
use crate::shared::fmt::num::format_result;
use crate::shared::CurrencyCode;

/// Everything the converter screen shows.
///
/// `seq` is the tag of the most recently issued conversion request and
/// `calc_seq` the tag of the most recent calculator evaluation; responses
/// carrying any other tag are stale. `amount_rev` counts edits of the amount
/// field.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    catalog: CurrencyCatalog,
    from: Option<CurrencyCode>,
    to: Option<CurrencyCode>,
    amount_input: String,
    last_result: Option<ConversionResult>,
    chart: Option<ChartSeries>,
    result_text: String,
    calculator: CalculatorState,
    seq: u64,
    calc_seq: u64,
    amount_rev: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Input ────────────────────────────────────────────────────────────

    pub(crate) fn set_catalog(&mut self, catalog: CurrencyCatalog) {
        self.catalog = catalog;
    }

    fn checked(&self, code: &str) -> Result<CurrencyCode, InputValidationError> {
        let code = CurrencyCode::new(code);
        if !self.catalog.contains(&code) {
            return Err(InputValidationError::UnknownCurrency(code.to_string()));
        }
        Ok(code)
    }

    pub(crate) fn select_from(&mut self, code: &str) -> Result<(), InputValidationError> {
        self.from = Some(self.checked(code)?);
        Ok(())
    }

    pub(crate) fn select_to(&mut self, code: &str) -> Result<(), InputValidationError> {
        self.to = Some(self.checked(code)?);
        Ok(())
    }

    pub(crate) fn set_amount_input(&mut self, raw: &str) {
        self.amount_input = raw.to_string();
        self.amount_rev += 1;
    }

    /// Exchange source and target in one step.
    pub(crate) fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }

    pub(crate) fn calculator_mut(&mut self) -> &mut CalculatorState {
        &mut self.calculator
    }

    // ── Request lifecycle ────────────────────────────────────────────────

    /// Build a request from the current selection and amount.
    pub fn request(&self) -> Result<ConversionRequest, InputValidationError> {
        let (Some(from), Some(to)) = (&self.from, &self.to) else {
            return Err(InputValidationError::MissingCurrency);
        };
        let amount = parse_amount(&self.amount_input)?;
        ConversionRequest::new(amount, from.clone(), to.clone())
    }

    /// Issue a new request tag. Every earlier tag becomes stale.
    pub(crate) fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        self.seq == seq
    }

    /// Issue a new calculator evaluation tag. Every earlier evaluation becomes stale.
    pub(crate) fn next_calc_seq(&mut self) -> u64 {
        self.calc_seq += 1;
        self.calc_seq
    }

    pub fn is_latest_calc(&self, calc_seq: u64) -> bool {
        self.calc_seq == calc_seq
    }

    /// Write a calculator result into both the display and the amount field.
    pub(crate) fn apply_calculator_result(&mut self, text: &str) {
        self.calculator.show_result(text);
        self.set_amount_input(text);
    }

    pub(crate) fn show_prompt(&mut self) {
        self.result_text = VALIDATION_PROMPT.to_string();
    }

    /// Store a fresh result and the series built from it.
    pub(crate) fn apply_result(
        &mut self,
        request: &ConversionRequest,
        result: ConversionResult,
        series: ChartSeries,
    ) {
        self.result_text = format!("{} {}", format_result(result.result), request.to());
        self.last_result = Some(result);
        self.chart = Some(series);
    }

    pub(crate) fn apply_failure(&mut self, error: &ServiceError, policy: ChartFailurePolicy) {
        self.result_text = format!("Error: {}", error);
        if policy == ChartFailurePolicy::Clear {
            self.last_result = None;
            self.chart = None;
        }
    }

    pub(crate) fn show_error(&mut self, error: &ServiceError) {
        self.result_text = format!("Error: {}", error);
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &CurrencyCatalog {
        &self.catalog
    }

    pub fn from(&self) -> Option<&CurrencyCode> {
        self.from.as_ref()
    }

    pub fn to(&self) -> Option<&CurrencyCode> {
        self.to.as_ref()
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    /// The parsed amount, if the field currently holds a valid one.
    pub fn amount(&self) -> Option<f64> {
        parse_amount(&self.amount_input).ok()
    }

    pub fn is_valid(&self) -> bool {
        self.request().is_ok()
    }

    pub fn last_result(&self) -> Option<&ConversionResult> {
        self.last_result.as_ref()
    }

    pub fn chart(&self) -> Option<&ChartSeries> {
        self.chart.as_ref()
    }

    /// Text of the result field: formatted result, prompt or error.
    pub fn result_text(&self) -> &str {
        &self.result_text
    }

    pub fn calculator(&self) -> &CalculatorState {
        &self.calculator
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn calc_seq(&self) -> u64 {
        self.calc_seq
    }

    /// Number of edits of the amount field so far.
    pub fn amount_revision(&self) -> u64 {
        self.amount_rev
    }
}
