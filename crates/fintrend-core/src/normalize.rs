//! Coercion of loosely typed API payloads into [`FinancialRecord`]s.
//!
//! The backend is not trusted to send well-formed sequences: fields may be
//! missing, `null`, bare scalars or arrays with junk in them. Every input maps to
//! a record; nothing here can fail.

use serde_json::{Map, Value};
use tracing::warn;

use crate::domain::{FinancialRecord, Metric};

/// Normalize one decoded API object.
pub fn normalize(raw: &Value) -> FinancialRecord {
    let Some(object) = raw.as_object() else {
        return FinancialRecord::default();
    };

    let ticker = object
        .get("ticker")
        .and_then(Value::as_str)
        .map(|ticker| ticker.trim().to_ascii_uppercase())
        .unwrap_or_default();

    let mut record = FinancialRecord::new(ticker);
    for metric in Metric::ALL {
        *record.series_mut(metric) = coerce_sequence(metric_field(object, metric));
    }
    record
}

/// Normalize a whole response body.
///
/// Arrays normalize element-wise. A lone object is the single-ticker shape and
/// yields one record. Any other value yields nothing.
pub fn normalize_payload(raw: &Value) -> Vec<FinancialRecord> {
    match raw {
        Value::Array(items) => items.iter().map(normalize).collect(),
        Value::Object(_) => vec![normalize(raw)],
        _ => Vec::new(),
    }
}

fn metric_field(object: &Map<String, Value>, metric: Metric) -> Option<&Value> {
    object
        .get(metric.wire_key())
        .filter(|value| !value.is_null())
        .or_else(|| object.get(metric.alias_key()))
}

/// Element positions are kept: an unusable element becomes a gap. A sequence
/// with no usable element collapses to empty.
fn coerce_sequence(field: Option<&Value>) -> Vec<Option<f64>> {
    match field {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => {
            let values: Vec<Option<f64>> = items.iter().map(coerce_number).collect();
            let gaps = values.iter().filter(|value| value.is_none()).count();
            if gaps == values.len() {
                return Vec::new();
            }
            if gaps > 0 {
                warn!(gaps, len = values.len(), "non-numeric metric elements kept as gaps");
            }
            values
        }
        Some(scalar) => coerce_number(scalar).map(Some).into_iter().collect(),
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}
