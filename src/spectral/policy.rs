use serde::Deserialize;

/// How a value above the ceiling is pulled back (or pushed further).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Clamp {
    /// `ceiling - excess * factor`
    Reflect(f64),
    /// `ceiling + excess * factor`
    Expand(f64),
    /// No clamp; the value passes through untouched.
    Linear,
}

impl Clamp {
    pub fn apply(self, value: f64, ceiling: f64) -> f64 {
        let excess = value - ceiling;
        match self {
            Clamp::Reflect(factor) => ceiling - excess * factor,
            Clamp::Expand(factor) => ceiling + excess * factor,
            Clamp::Linear => value,
        }
    }

    pub fn is_linear(self) -> bool {
        matches!(self, Clamp::Linear)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyVariant {
    #[default]
    Mirror,
    Expand,
    Linear,
}

impl PolicyVariant {
    pub fn as_label(&self) -> &'static str {
        match self {
            PolicyVariant::Mirror => "mirror",
            PolicyVariant::Expand => "expand",
            PolicyVariant::Linear => "linear",
        }
    }

    pub fn next(self) -> Self {
        match self {
            PolicyVariant::Mirror => PolicyVariant::Expand,
            PolicyVariant::Expand => PolicyVariant::Linear,
            PolicyVariant::Linear => PolicyVariant::Mirror,
        }
    }

    pub fn policy(self) -> AdjustmentPolicy {
        AdjustmentPolicy::from(self)
    }
}

/// Constants shared by the in-spectrum adjustment and the display-height adjuster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentPolicy {
    pub ceiling: f64,
    /// Scale for non-negative bins, for the DC term and for heights at or below the ceiling.
    pub boost: f64,
    /// Added to a bin with a negative real or imaginary part.
    pub negative_bump: f64,
    pub spectrum_clamp: Clamp,
    pub height_clamp: Clamp,
}

pub const CEILING: f64 = 3.0;
pub const BOOST: f64 = 1.20;
pub const NEGATIVE_BUMP: f64 = 0.20;

impl From<PolicyVariant> for AdjustmentPolicy {
    fn from(variant: PolicyVariant) -> Self {
        let (spectrum_clamp, height_clamp) = match variant {
            PolicyVariant::Mirror => (Clamp::Reflect(1.0), Clamp::Reflect(0.20)),
            PolicyVariant::Expand => (Clamp::Expand(1.30), Clamp::Expand(1.30)),
            PolicyVariant::Linear => (Clamp::Linear, Clamp::Linear),
        };
        Self {
            ceiling: CEILING,
            boost: BOOST,
            negative_bump: NEGATIVE_BUMP,
            spectrum_clamp,
            height_clamp,
        }
    }
}

impl Default for AdjustmentPolicy {
    fn default() -> Self {
        PolicyVariant::default().policy()
    }
}
