use crate::data::signal::{Signal, Timestamps};
use crate::data::stored::{Emphasis, StoredSignal};
use crate::spectral::magnitude::{adjust_heights, magnitudes};
use crate::spectral::policy::AdjustmentPolicy;
use crate::spectral::sft::SftEngine;

/// Everything the renderer needs for one labelled signal.
#[derive(Debug, Clone)]
pub struct Measurement {
    pub label: String,
    pub original: Signal,
    pub magnitudes: Vec<f64>,
    pub heights: Vec<f64>,
    pub timestamps: Option<Timestamps>,
    pub emphasis: Emphasis,
}

/// Measurements in input order.
#[derive(Debug, Clone, Default)]
pub struct Measurements {
    entries: Vec<Measurement>,
}

impl Measurements {
    pub fn iter(&self) -> std::slice::Iter<'_, Measurement> {
        self.entries.iter()
    }
}

pub struct MeasurementProcessor {
    engine: SftEngine,
}

impl MeasurementProcessor {
    pub fn new(policy: AdjustmentPolicy) -> Self {
        Self { engine: SftEngine::new(policy) }
    }

    pub fn process(&self, stored: &StoredSignal) -> Measurement {
        let spectrum = self.engine.transform(&stored.signal);
        let magnitudes = magnitudes(&spectrum);
        let heights = adjust_heights(&magnitudes, self.engine.policy());

        let peak = magnitudes.iter().copied().fold(0.0f64, f64::max);
        log::info!(
            "{}: n={} dc={:.4} peak={:.4}",
            stored.label,
            stored.signal.len(),
            magnitudes[0],
            peak
        );

        Measurement {
            label: stored.label.clone(),
            original: stored.signal.clone(),
            magnitudes,
            heights,
            timestamps: stored.timestamps.clone(),
            emphasis: stored.emphasis,
        }
    }
}

pub fn measure(signals: &[StoredSignal], policy: AdjustmentPolicy) -> Measurements {
    let processor = MeasurementProcessor::new(policy);
    Measurements {
        entries: signals.iter().map(|s| processor.process(s)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::stored::stored_signals;
    use crate::spectral::magnitude::adjust_magnitude;
    use crate::spectral::policy::PolicyVariant;
    use approx::assert_abs_diff_eq;

    impl Measurements {
        fn get(&self, label: &str) -> Option<&Measurement> {
            self.entries.iter().find(|m| m.label == label)
        }

        fn len(&self) -> usize {
            self.entries.len()
        }
    }

    #[test]
    fn every_stored_signal_is_measured_in_order() {
        let set = stored_signals().unwrap();
        let out = measure(&set, PolicyVariant::Mirror.policy());
        assert_eq!(out.len(), set.len());

        for (m, s) in out.iter().zip(&set) {
            assert_eq!(m.label, s.label);
            assert_eq!(m.original, s.signal);
            assert_eq!(m.magnitudes.len(), s.signal.len());
            assert_eq!(m.heights.len(), s.signal.len());
            assert_eq!(m.timestamps, s.timestamps);
            assert!(m.magnitudes.iter().all(|v| *v >= 0.0));
        }
    }

    #[test]
    fn heights_are_adjusted_magnitudes() {
        let set = stored_signals().unwrap();
        let policy = PolicyVariant::Expand.policy();
        let out = measure(&set, policy);
        let lost = out.get("lost_wave").unwrap();
        for (h, m) in lost.heights.iter().zip(&lost.magnitudes) {
            assert_eq!(*h, adjust_magnitude(*m, &policy));
        }
    }

    #[test]
    fn dc_magnitude_is_boosted_mean() {
        let set = stored_signals().unwrap();
        let out = measure(&set, PolicyVariant::Mirror.policy());
        let square = out.get("square_wave").unwrap();
        assert_abs_diff_eq!(square.magnitudes[0], 0.0, epsilon = 1e-12);

        let lost = out.get("lost_wave").unwrap();
        let mean = lost.original.mean();
        assert_abs_diff_eq!(lost.magnitudes[0], mean.abs() * 1.2, epsilon = 1e-12);
        assert!(out.get("missing").is_none());
    }
}
