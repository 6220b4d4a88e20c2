//! @ai:module:intent Typed metric values for a single classifier run
//! @ai:module:layer domain
//! @ai:module:public_api RunStats, MetricValue, keys
//! @ai:module:stateless true

use serde::Serialize;
use std::collections::BTreeMap;

/// Conventional metric keys produced by the classifier report.
pub mod keys {
    pub const N_IMAGES: &str = "n_images";
    pub const N_DOGS: &str = "n_dogs";
    pub const N_NOTDOGS: &str = "n_notdogs";
    pub const PCT_CORRECT_DOGS: &str = "pct_correct_dogs";
    pub const PCT_CORRECT_BREED: &str = "pct_correct_breed";
    pub const PCT_CORRECT_NOTDOGS: &str = "pct_correct_notdogs";
    pub const PCT_MATCH: &str = "pct_match";
    pub const RUNTIME: &str = "runtime";
}

/// @ai:intent Value of one extracted metric
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(i64),
    Percent(f64),
    Text(String),
}

impl MetricValue {
    /// @ai:intent Numeric view used for comparisons; text has none
    /// @ai:effects pure
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricValue::Count(n) => Some(*n as f64),
            MetricValue::Percent(p) => Some(*p),
            MetricValue::Text(_) => None,
        }
    }

    /// @ai:intent Render as a one-decimal percentage when numeric
    /// @ai:effects pure
    pub fn format_percent(&self) -> String {
        match self {
            MetricValue::Percent(p) => format!("{:.1}%", p),
            MetricValue::Count(n) => n.to_string(),
            MetricValue::Text(s) => s.clone(),
        }
    }
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{}", n),
            MetricValue::Percent(p) => write!(f, "{}", p),
            MetricValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// @ai:intent Metrics extracted from one successful classifier run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RunStats {
    metrics: BTreeMap<String, MetricValue>,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: MetricValue) {
        self.metrics.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&MetricValue> {
        self.metrics.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.metrics.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.metrics.keys().map(String::as_str)
    }

    /// @ai:intent Numeric value of a metric, zero when missing or non-numeric
    /// @ai:effects pure
    pub fn value_or_zero(&self, key: &str) -> f64 {
        self.get(key).and_then(MetricValue::as_f64).unwrap_or(0.0)
    }

    /// @ai:intent Image count metric, zero when missing
    /// @ai:effects pure
    pub fn count_or_zero(&self, key: &str) -> i64 {
        match self.get(key) {
            Some(MetricValue::Count(n)) => *n,
            _ => 0,
        }
    }

    /// @ai:intent Formatted elapsed runtime reported by the classifier
    /// @ai:effects pure
    pub fn runtime(&self) -> Option<&str> {
        match self.get(keys::RUNTIME) {
            Some(MetricValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}
