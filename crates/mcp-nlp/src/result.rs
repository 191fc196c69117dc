//! Processor result wrapper.

use serde::Serialize;

/// Structured data produced by a request processor.
///
/// Processors are total, so `success` is always `true`; `confidence`
/// reflects how much of the structure came from the text rather than
/// from defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingResult<T> {
    /// Always `true`
    pub success: bool,
    /// Extracted data
    pub data: T,
    /// Share of signals found in the text, in `[0, 1]`
    pub confidence: f64,
}

impl<T> ProcessingResult<T> {
    pub(crate) const fn new(data: T, confidence: f64) -> Self {
        Self {
            success: true,
            data,
            confidence,
        }
    }
}

/// Fraction of `signals` that are `true`.
pub(crate) fn signal_ratio(signals: &[bool]) -> f64 {
    if signals.is_empty() {
        return 0.0;
    }
    let hits = signals.iter().filter(|s| **s).count();
    #[allow(clippy::cast_precision_loss)]
    let ratio = hits as f64 / signals.len() as f64;
    ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_ratio() {
        assert!((signal_ratio(&[true, false, true, false]) - 0.5).abs() < f64::EPSILON);
        assert!(signal_ratio(&[]).abs() < f64::EPSILON);
    }
}
