use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SignalError {
    #[error("signal has no samples")]
    Empty,
    #[error("sample {index} is not finite")]
    NonFinite { index: usize },
}

/// Opaque start/end labels; only the renderer reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamps {
    pub start: String,
    pub end: String,
}

impl Timestamps {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self { start: start.into(), end: end.into() }
    }
}

/// A non-empty, finite, immutable sample sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    samples: Vec<f64>,
}

impl Signal {
    pub fn new<I, T>(samples: I) -> Result<Self, SignalError>
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        let samples: Vec<f64> = samples.into_iter().map(Into::into).collect();
        if samples.is_empty() {
            return Err(SignalError::Empty);
        }
        if let Some(index) = samples.iter().position(|v| !v.is_finite()) {
            return Err(SignalError::NonFinite { index });
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn mean(&self) -> f64 {
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }
}
