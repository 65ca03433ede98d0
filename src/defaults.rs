//! Default selections and user-facing message constants.

/// Source currency selected after the catalog loads.
pub const DEFAULT_FROM: &str = "USD";

/// Target currency selected after the catalog loads.
pub const DEFAULT_TO: &str = "ZMW";

/// Amount field contents after the catalog loads.
pub const DEFAULT_AMOUNT: &str = "1";

/// Shown in the result field instead of issuing a request.
pub const VALIDATION_PROMPT: &str = "Please fill in all fields correctly.";

/// Shown in the calculator display when evaluation fails.
pub const INVALID_EXPRESSION: &str = "Invalid expression";
