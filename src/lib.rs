//! # fx-converter
//!
//! View-state core for a desktop currency converter: the user picks an amount
//! and a currency pair, a backend converts it and returns a rate history, the
//! history is drawn as a line chart, and a calculator modal can fill in the
//! amount.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Currency codes, display formatting, domain models with their wire types
//! 2. **Services** — `ConversionService`, `CalculatorService`, `ChartRenderer` seams,
//!    plus the in-process `MevalCalculator`
//! 3. **Controller** — `ConversionViewController` with stale-response suppression
//! 4. **Events** — `InputEvent` → controller method mapping
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fx_converter::prelude::*;
//!
//! let controller = ConversionViewController::builder()
//!     .chart_failure_policy(ChartFailurePolicy::Retain)
//!     .build(backend, MevalCalculator::new(), chart);
//!
//! controller.init().await?;
//! controller.dispatch(InputEvent::AmountChanged("10".into())).await?;
//! println!("{}", controller.snapshot().await.result_text());
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified error types.
pub mod error;

/// Default selections and message constants.
pub mod defaults;

// ── Layer 2: Services ────────────────────────────────────────────────────────

/// Collaborator traits: conversion backend, calculator, chart renderer.
pub mod service;

// ── Layer 3: Controller ──────────────────────────────────────────────────────

/// `ConversionViewController` and its builder.
pub mod controller;

// ── Layer 4: Events ──────────────────────────────────────────────────────────

/// Input events and dispatch.
pub mod event;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::fmt::date::{today_label, today_label_now};
    pub use crate::shared::fmt::num::{format_calculator, format_result};
    pub use crate::shared::CurrencyCode;

    // Domain types
    pub use crate::domain::calculator::{CalculatorKey, CalculatorState, MevalCalculator};
    pub use crate::domain::chart::{ChartFailurePolicy, ChartOptions, ChartPoint, ChartSeries};
    pub use crate::domain::conversion::{
        parse_amount, ConversionRequest, ConversionResult, HistoricalRate, ViewState,
    };
    pub use crate::domain::currency::{Currency, CurrencyCatalog};

    // Errors
    pub use crate::error::{ConverterError, ExpressionError, InputValidationError, ServiceError};

    // Services
    pub use crate::service::{CalculatorService, ChartRenderer, ConversionService};

    // Controller + events
    pub use crate::controller::{
        ControllerBuilder, ControllerConfig, ConversionViewController, RefreshOutcome,
    };
    pub use crate::event::InputEvent;
}
