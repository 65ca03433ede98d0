//! Display formatting for conversion results, calculator output and dates.

pub mod date;
pub mod num;
