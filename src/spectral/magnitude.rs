use crate::spectral::policy::AdjustmentPolicy;
use rustfft::num_complex::Complex;

pub fn magnitudes(spectrum: &[Complex<f64>]) -> Vec<f64> {
    spectrum.iter().map(|x| x.norm()).collect()
}

/// Display height for one magnitude. Independent of the in-spectrum adjustment.
pub fn adjust_magnitude(magnitude: f64, policy: &AdjustmentPolicy) -> f64 {
    if magnitude > policy.ceiling && !policy.height_clamp.is_linear() {
        policy.height_clamp.apply(magnitude, policy.ceiling)
    } else {
        magnitude * policy.boost
    }
}

pub fn adjust_heights(magnitudes: &[f64], policy: &AdjustmentPolicy) -> Vec<f64> {
    magnitudes.iter().map(|&m| adjust_magnitude(m, policy)).collect()
}
