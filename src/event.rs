//! Input events from the presentation layer and their mapping onto controller
//! methods.

use crate::controller::{ConversionViewController, RefreshOutcome};
use crate::domain::calculator::CalculatorKey;
use crate::error::ConverterError;
use crate::service::{CalculatorService, ChartRenderer, ConversionService};

/// A user interaction the presentation layer forwards to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    AmountChanged(String),
    FromSelected(String),
    ToSelected(String),
    SwapClicked,
    CalculatorKey(CalculatorKey),
    OpenCalculator,
    CloseCalculator,
}

impl<S, C, R> ConversionViewController<S, C, R>
where
    S: ConversionService,
    C: CalculatorService,
    R: ChartRenderer,
{
    /// Route an input event. Returns the refresh outcome when the event led to
    /// a refresh attempt.
    pub async fn dispatch(
        &self,
        event: InputEvent,
    ) -> Result<Option<RefreshOutcome>, ConverterError> {
        tracing::trace!(?event, "Dispatching input event");
        let outcome = match event {
            InputEvent::AmountChanged(raw) => Some(self.set_amount(&raw).await),
            InputEvent::FromSelected(code) => Some(self.set_from_currency(&code).await?),
            InputEvent::ToSelected(code) => Some(self.set_to_currency(&code).await?),
            InputEvent::SwapClicked => Some(self.swap().await),
            InputEvent::CalculatorKey(key) => self.press_calculator_key(key).await?,
            InputEvent::OpenCalculator => {
                self.open_calculator().await;
                None
            }
            InputEvent::CloseCalculator => {
                self.close_calculator().await;
                None
            }
        };
        Ok(outcome)
    }
}
