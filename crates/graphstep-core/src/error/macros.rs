//! Error macros for graphstep

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphstepError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a non-finite edge weight
#[macro_export]
macro_rules! ensure_weight {
    ($edge:expr, $weight:expr) => {
        if !$weight.is_finite() {
            return Err($crate::error::GraphstepError::InvalidWeight {
                edge: $edge,
                weight: $weight,
            });
        }
    };
}
