/// What sits at the centre of a circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleMark {
    /// Two spokes from the centre out to the diameter ends.
    Spokes,
    /// The height equals the original sample; a single dot.
    CenterDot,
}

/// Circle whose diameter is a bin's display height, resting on the x-axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MohrCircle {
    pub center: (f64, f64),
    pub radius: f64,
    pub diameter: [(f64, f64); 2],
    pub mark: CircleMark,
}

pub fn mohr_circle(position: f64, height: f64, original: f64) -> MohrCircle {
    let center_y = height / 2.0;
    let radius = center_y.abs();
    let mark = if original != height {
        CircleMark::Spokes
    } else {
        CircleMark::CenterDot
    };
    MohrCircle {
        center: (position, center_y),
        radius,
        diameter: [(position - radius, center_y), (position + radius, center_y)],
        mark,
    }
}
