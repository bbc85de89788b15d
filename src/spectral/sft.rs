use crate::data::signal::Signal;
use crate::spectral::policy::AdjustmentPolicy;
use rustfft::num_complex::Complex;

/// Direct (O(N²)) transform with the heuristic per-bin adjustment applied.
pub struct SftEngine {
    policy: AdjustmentPolicy,
}

impl SftEngine {
    pub fn new(policy: AdjustmentPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &AdjustmentPolicy {
        &self.policy
    }

    pub fn transform(&self, signal: &Signal) -> Vec<Complex<f64>> {
        let x = signal.samples();
        let n = x.len();
        let mut out = Vec::with_capacity(n);
        out.push(dc_component(signal, &self.policy));

        for k in 1..n {
            let raw = dft_bin(x, k);
            let adjusted = adjust_bin(raw, &self.policy);
            let bumped = bump_or_boost(raw, &self.policy);
            if adjusted != bumped {
                log::debug!("bin {k}/{n}: clamped {bumped} -> {adjusted}");
            }
            out.push(adjusted);
        }
        out
    }
}

/// Raw bin `k`, normalised by N/2. No adjustment.
pub fn dft_bin(x: &[f64], k: usize) -> Complex<f64> {
    let n = x.len();
    let mut acc = Complex::new(0.0, 0.0);
    for (i, &v) in x.iter().enumerate() {
        let angle = 2.0 * std::f64::consts::PI * (k * i) as f64 / n as f64;
        acc += Complex::new(0.0, -angle).exp() * v;
    }
    acc / (n as f64 / 2.0)
}

/// Zero-frequency term: the sample mean, made non-negative and boosted.
pub fn dc_component(signal: &Signal, policy: &AdjustmentPolicy) -> Complex<f64> {
    Complex::new(signal.mean().abs() * policy.boost, 0.0)
}

/// Full in-spectrum adjustment of one non-DC bin.
pub fn adjust_bin(raw: Complex<f64>, policy: &AdjustmentPolicy) -> Complex<f64> {
    clamp_bin(bump_or_boost(raw, policy), policy)
}

fn bump_or_boost(x: Complex<f64>, policy: &AdjustmentPolicy) -> Complex<f64> {
    // A negative axis shifts the whole value along the real axis.
    if x.re < 0.0 || x.im < 0.0 {
        x + policy.negative_bump
    } else {
        x * policy.boost
    }
}

fn clamp_bin(mut x: Complex<f64>, policy: &AdjustmentPolicy) -> Complex<f64> {
    let ceiling = policy.ceiling;
    if policy.spectrum_clamp.is_linear() || !(x.re > ceiling || x.im > ceiling) {
        return x;
    }

    // One mirrored value, taken from the real axis when it is over the ceiling.
    let axis = if x.re > ceiling { x.re } else { x.im };
    let mirrored = policy.spectrum_clamp.apply(axis, ceiling);

    // Real first: the polar round-trip rewrites the imaginary part.
    if x.re > ceiling {
        x = Complex::from_polar(mirrored, x.arg());
    }
    if x.im > ceiling {
        x = Complex::new(x.re, mirrored);
    }
    x
}
