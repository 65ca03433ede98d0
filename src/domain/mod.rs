//! Domain modules (vertical slices): types, wire types, conversions, state.

pub mod calculator;
pub mod chart;
pub mod conversion;
pub mod currency;
