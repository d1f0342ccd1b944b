//! Request parameter extraction
//!
//! Pulls the three climate parameters out of a form-encoded request.
//! Anything missing or unparsable falls back to its documented default;
//! bad input is never an error at this layer.

use crate::biome::generator::{
    GenerationParameters, DEFAULT_CLIMATE_STABILITY, DEFAULT_MOISTURE_SPREAD,
    DEFAULT_TEMPERATURE_SPREAD,
};

/// Parse the climate parameters from a request body and query string.
///
/// Body fields win over query fields; the first occurrence of a field
/// wins, like classic form lookup. The values are plain integers, so no
/// percent-decoding is needed.
pub fn params_from_request(body: &str, query: &str) -> GenerationParameters {
    let pairs: Vec<(&str, &str)> = form_pairs(body).chain(form_pairs(query)).collect();

    GenerationParameters {
        moisture_spread: int_field(&pairs, "moisture_spread", DEFAULT_MOISTURE_SPREAD),
        temperature_spread: int_field(&pairs, "temperature_spread", DEFAULT_TEMPERATURE_SPREAD),
        climate_stability: int_field(&pairs, "climate_stability", DEFAULT_CLIMATE_STABILITY),
    }
}

/// Split a form-encoded string ("a=1&b=2") into key/value pairs.
fn form_pairs(raw: &str) -> impl Iterator<Item = (&str, &str)> {
    raw.split('&').filter_map(|pair| pair.split_once('='))
}

fn int_field(pairs: &[(&str, &str)], name: &str, default: i32) -> i32 {
    match pairs.iter().find(|(key, _)| *key == name) {
        Some((_, value)) => value.parse().unwrap_or_else(|_| {
            log::warn!("invalid {name} value {value:?}, using default {default}");
            default
        }),
        None => default,
    }
}
