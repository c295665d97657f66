use crate::{AstroError, AstroResult};

/// Rejects NaN and infinities, passing finite values through unchanged.
pub fn ensure_finite(context: &str, value: f64) -> AstroResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AstroError::not_finite(context, value))
    }
}
