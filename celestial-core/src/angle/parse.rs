//! Parsing of sexagesimal text with one to three components.
//!
//! Catalog services and the shell both hand over coordinates as loose text:
//! `"13 37 0.919"`, `"-29:51:56.74"`, `"+41 16"` or just `"83.6"`. Missing
//! trailing components are zero. The leading component keeps its textual
//! sign, so `"-00 30 00"` parses to a negative zero; a zero leading
//! component is still non-negative for [`dms_to_deg`](super::dms_to_deg).

use crate::{AstroError, AstroResult};

const MAX_COMPONENTS: usize = 3;

/// Parses whitespace- or colon-separated sexagesimal text into a triple.
pub fn parse_sexagesimal(text: &str) -> AstroResult<[f64; 3]> {
    let parts: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ':')
        .filter(|p| !p.is_empty())
        .collect();
    parse_components(&parts).map_err(|e| match e {
        AstroError::Parse { message, .. } => AstroError::parse(text, message),
        other => other,
    })
}

/// Parses pre-split components into a triple, padding with zeros.
pub fn parse_components(parts: &[&str]) -> AstroResult<[f64; 3]> {
    if parts.is_empty() || parts.len() > MAX_COMPONENTS {
        return Err(AstroError::parse(
            &parts.join(" "),
            format!("expected 1 to {MAX_COMPONENTS} components, got {}", parts.len()),
        ));
    }
    let mut values = [0.0; MAX_COMPONENTS];
    for (slot, part) in values.iter_mut().zip(parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| AstroError::parse(part, e.to_string()))?;
    }
    Ok(values)
}
