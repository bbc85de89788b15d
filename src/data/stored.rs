use crate::data::signal::{Signal, SignalError, Timestamps};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Important,
    Background,
}

#[derive(Debug, Clone)]
pub struct StoredSignal {
    pub label: String,
    pub signal: Signal,
    pub timestamps: Option<Timestamps>,
    pub emphasis: Emphasis,
}

impl StoredSignal {
    pub fn new(label: impl Into<String>, signal: Signal) -> Self {
        Self {
            label: label.into(),
            signal,
            timestamps: None,
            emphasis: Emphasis::Background,
        }
    }

    pub fn with_timestamps(mut self, start: &str, end: &str) -> Self {
        self.timestamps = Some(Timestamps::new(start, end));
        self
    }

    pub fn important(mut self) -> Self {
        self.emphasis = Emphasis::Important;
        self
    }
}

const SINE_WAVE: [f64; 18] = [
    0.0, 0.342, 0.642, 0.866, 1.0, 0.94, 0.766, 0.5, 0.173, -0.173, -0.5, -0.766, -0.94, -1.0,
    -0.866, -0.642, -0.342, 0.0,
];

const SQUARE_WAVE: [i32; 20] = [1, 1, 1, 1, 1, -1, -1, -1, -1, -1, 1, 1, 1, 1, 1, -1, -1, -1, -1, -1];

const TRIANGLE_WAVE: [f64; 17] = [
    0.0, 0.526, 1.0, 0.526, 0.0, -0.526, -1.0, -0.526, 0.0, 0.526, 1.0, 0.526, 0.0, -0.526, -1.0,
    -0.526, 0.0,
];

const LOST_WAVE: [f64; 17] = [
    0.0, 0.9, 1.0, 5.0, -0.526, -1.0, -0.526, 5.0, 0.526, 4.0, 0.526, 3.0, -0.526, -1.0, -0.526,
    5.0, 0.0,
];

/// The fixed dataset, in display order.
pub fn stored_signals() -> Result<Vec<StoredSignal>, SignalError> {
    Ok(vec![
        StoredSignal::new("sine_wave", Signal::new(SINE_WAVE)?)
            .with_timestamps("2024-12-26 06:00:00", "2024-12-26 06:18:00"),
        StoredSignal::new("square_wave", Signal::new(SQUARE_WAVE)?)
            .with_timestamps("2024-12-26 06:20:00", "2024-12-26 06:40:00"),
        StoredSignal::new("triangle_wave", Signal::new(TRIANGLE_WAVE)?)
            .with_timestamps("2024-12-26 06:45:00", "2024-12-26 07:00:00"),
        StoredSignal::new("lost_wave", Signal::new(LOST_WAVE)?).important(),
    ])
}
