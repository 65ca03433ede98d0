//! `ConversionViewController`: keeps the result field and the chart consistent
//! with the latest user input.
//!
//! Every method takes `&self`, so several refreshes may be in flight at once.
//! The state lock is never held across a service call; each request carries a
//! sequence tag and only the response for the latest tag is applied.

use crate::defaults::{DEFAULT_AMOUNT, DEFAULT_FROM, DEFAULT_TO, INVALID_EXPRESSION};
use crate::domain::calculator::CalculatorKey;
use crate::domain::chart::{ChartFailurePolicy, ChartOptions, ChartSeries};
use crate::domain::conversion::ViewState;
use crate::domain::currency::CurrencyCatalog;
use crate::error::{ExpressionError, InputValidationError, ServiceError};
use crate::service::{CalculatorService, ChartRenderer, ConversionService};
use crate::shared::fmt::num::format_calculator;

use async_lock::RwLock;

/// What a `refresh()` ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// The response was applied to the view.
    Applied { seq: u64 },
    /// The backend failed; the error is shown in the result field.
    Failed { seq: u64, error: ServiceError },
    /// The input is incomplete or invalid; no request was issued.
    Invalid(InputValidationError),
    /// A newer request was issued before this one resolved; the response was dropped.
    Superseded { seq: u64 },
}

impl RefreshOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// Whether a request reached the conversion service.
    pub fn was_issued(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }
}

/// Controller configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    pub default_from: String,
    pub default_to: String,
    pub default_amount: String,
    pub chart_failure_policy: ChartFailurePolicy,
    pub chart_options: ChartOptions,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            default_from: DEFAULT_FROM.to_string(),
            default_to: DEFAULT_TO.to_string(),
            default_amount: DEFAULT_AMOUNT.to_string(),
            chart_failure_policy: ChartFailurePolicy::default(),
            chart_options: ChartOptions::default(),
        }
    }
}

/// The view-state controller.
///
/// Holds the collaborator interfaces and the single [`ViewState`]; no
/// presentation widgets.
pub struct ConversionViewController<S, C, R> {
    conversion: S,
    calculator: C,
    renderer: R,
    config: ControllerConfig,
    state: RwLock<ViewState>,
}

impl ConversionViewController<(), (), ()> {
    pub fn builder() -> ControllerBuilder {
        ControllerBuilder::default()
    }
}

impl<S, C, R> ConversionViewController<S, C, R>
where
    S: ConversionService,
    C: CalculatorService,
    R: ChartRenderer,
{
    pub fn new(conversion: S, calculator: C, renderer: R) -> Self {
        ControllerBuilder::default().build(conversion, calculator, renderer)
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// A copy of the current view state for the presentation layer.
    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }

    // ── Startup ──────────────────────────────────────────────────────────

    /// Load the catalog, select the configured defaults and run the first
    /// conversion.
    pub async fn init(&self) -> Result<RefreshOutcome, ServiceError> {
        self.load_currencies().await?;
        {
            let mut state = self.state.write().await;
            if let Err(e) = state.select_from(&self.config.default_from) {
                tracing::warn!("Default source currency not in catalog: {}", e);
            }
            if let Err(e) = state.select_to(&self.config.default_to) {
                tracing::warn!("Default target currency not in catalog: {}", e);
            }
            state.set_amount_input(&self.config.default_amount);
        }
        Ok(self.refresh().await)
    }

    /// Fetch the currency catalog from the conversion service.
    pub async fn load_currencies(&self) -> Result<(), ServiceError> {
        match self.conversion.list_currencies().await {
            Ok(currencies) => {
                let catalog = CurrencyCatalog::new(currencies);
                tracing::debug!(count = catalog.len(), "Loaded currency catalog");
                self.state.write().await.set_catalog(catalog);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to load currencies: {}", e);
                self.state.write().await.show_error(&e);
                Err(e)
            }
        }
    }

    // ── Input ────────────────────────────────────────────────────────────

    /// Store the raw amount field and refresh. Invalid text shows the prompt
    /// instead of issuing a request.
    pub async fn set_amount(&self, raw: &str) -> RefreshOutcome {
        self.state.write().await.set_amount_input(raw);
        self.refresh().await
    }

    pub async fn set_from_currency(
        &self,
        code: &str,
    ) -> Result<RefreshOutcome, InputValidationError> {
        self.state.write().await.select_from(code)?;
        Ok(self.refresh().await)
    }

    pub async fn set_to_currency(
        &self,
        code: &str,
    ) -> Result<RefreshOutcome, InputValidationError> {
        self.state.write().await.select_to(code)?;
        Ok(self.refresh().await)
    }

    /// Exchange source and target, then refresh.
    pub async fn swap(&self) -> RefreshOutcome {
        self.state.write().await.swap();
        self.refresh().await
    }

    // ── Conversion ───────────────────────────────────────────────────────

    /// Request a conversion for the current input and apply it if it is still
    /// the latest request when it resolves.
    pub async fn refresh(&self) -> RefreshOutcome {
        let (seq, request) = {
            let mut state = self.state.write().await;
            let seq = state.next_seq();
            match state.request() {
                Ok(request) => (seq, request),
                Err(e) => {
                    tracing::debug!(seq, "Input invalid, no request issued: {}", e);
                    state.show_prompt();
                    return RefreshOutcome::Invalid(e);
                }
            }
        };

        tracing::debug!(
            seq,
            from = %request.from(),
            to = %request.to(),
            amount = request.amount(),
            "Requesting conversion"
        );
        let response = self.conversion.convert(&request).await;

        let mut state = self.state.write().await;
        if !state.is_latest(seq) {
            tracing::debug!(seq, latest = state.seq(), "Discarding stale conversion response");
            return RefreshOutcome::Superseded { seq };
        }

        match response {
            Ok(result) => {
                let series = ChartSeries::from_history(&result.historical_data);
                self.renderer.render(&series, &self.config.chart_options);
                state.apply_result(&request, result, series);
                RefreshOutcome::Applied { seq }
            }
            Err(error) => {
                tracing::warn!(seq, "Conversion failed: {}", error);
                let policy = self.config.chart_failure_policy;
                if policy == ChartFailurePolicy::Clear {
                    self.renderer.clear();
                }
                state.apply_failure(&error, policy);
                RefreshOutcome::Failed { seq, error }
            }
        }
    }

    // ── Calculator ───────────────────────────────────────────────────────

    pub async fn open_calculator(&self) {
        self.state.write().await.calculator_mut().open();
    }

    pub async fn close_calculator(&self) {
        self.state.write().await.calculator_mut().close();
    }

    /// Apply a keypad press. `Evaluate` runs the expression and returns the
    /// outcome of the refresh it triggers. Editing keys make any evaluation
    /// still in flight stale.
    pub async fn press_calculator_key(
        &self,
        key: CalculatorKey,
    ) -> Result<Option<RefreshOutcome>, ExpressionError> {
        if key == CalculatorKey::Evaluate {
            return self.evaluate_calculator().await;
        }
        let mut state = self.state.write().await;
        state.next_calc_seq();
        state.calculator_mut().press(&key);
        Ok(None)
    }

    /// Evaluate the calculator display. The result replaces both the display
    /// and the amount field and triggers exactly one refresh. On failure the
    /// amount is left untouched.
    ///
    /// Returns `Ok(None)` when the response is stale: a newer evaluation or
    /// keypad edit was issued, or the amount field was edited, while this one
    /// was in flight. Stale responses, successful or not, change nothing.
    pub async fn evaluate_calculator(&self) -> Result<Option<RefreshOutcome>, ExpressionError> {
        let (calc_seq, amount_rev, expression) = {
            let mut state = self.state.write().await;
            let calc_seq = state.next_calc_seq();
            let expression = state.calculator().expression();
            (calc_seq, state.amount_revision(), expression)
        };

        let response = self.calculator.evaluate(&expression).await;

        {
            let mut state = self.state.write().await;
            if !state.is_latest_calc(calc_seq) || state.amount_revision() != amount_rev {
                tracing::debug!(
                    calc_seq,
                    latest = state.calc_seq(),
                    expression = %expression,
                    "Discarding stale calculator response"
                );
                return Ok(None);
            }

            match response {
                Ok(value) => {
                    let text = format_calculator(value);
                    tracing::debug!(expression = %expression, result = %text, "Calculator evaluated");
                    state.apply_calculator_result(&text);
                }
                Err(e) => {
                    tracing::debug!(expression = %expression, "Calculator rejected expression: {}", e);
                    state.calculator_mut().show_error(INVALID_EXPRESSION);
                    return Err(e);
                }
            }
        }

        Ok(Some(self.refresh().await))
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct ControllerBuilder {
    config: ControllerConfig,
}

impl ControllerBuilder {
    pub fn default_from(mut self, code: &str) -> Self {
        self.config.default_from = code.to_string();
        self
    }

    pub fn default_to(mut self, code: &str) -> Self {
        self.config.default_to = code.to_string();
        self
    }

    pub fn default_amount(mut self, amount: &str) -> Self {
        self.config.default_amount = amount.to_string();
        self
    }

    pub fn chart_failure_policy(mut self, policy: ChartFailurePolicy) -> Self {
        self.config.chart_failure_policy = policy;
        self
    }

    pub fn chart_options(mut self, options: ChartOptions) -> Self {
        self.config.chart_options = options;
        self
    }

    pub fn config(mut self, config: ControllerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build<S, C, R>(
        self,
        conversion: S,
        calculator: C,
        renderer: R,
    ) -> ConversionViewController<S, C, R>
    where
        S: ConversionService,
        C: CalculatorService,
        R: ChartRenderer,
    {
        ConversionViewController {
            conversion,
            calculator,
            renderer,
            config: self.config,
            state: RwLock::new(ViewState::new()),
        }
    }
}
