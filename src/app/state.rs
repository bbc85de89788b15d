use crate::data::config::Config;
use crate::data::stored::StoredSignal;
use crate::render::palette::{assign_pairs, ColorPair, PAIRS};
use crate::spectral::measure::{measure, Measurements};
use crate::ui::theme::Theme;

pub struct AppState {
    pub config: Config,
    pub theme: Theme,
    pub signals: Vec<StoredSignal>,
    pub measurements: Measurements,
    pub colors: Vec<ColorPair>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: Config, theme: Theme, signals: Vec<StoredSignal>) -> Self {
        let measurements = measure(&signals, config.policy.policy());
        let colors = assign_pairs(signals.len(), config.color_seed);
        Self {
            config,
            theme,
            signals,
            measurements,
            colors,
            should_quit: false,
        }
    }

    pub fn cycle_policy(&mut self) {
        self.config.policy = self.config.policy.next();
        log::info!("policy -> {}", self.config.policy.as_label());
        self.measurements = measure(&self.signals, self.config.policy.policy());
    }

    pub fn toggle_circles(&mut self) {
        self.config.show_circles = !self.config.show_circles;
    }

    pub fn reseed_colors(&mut self) {
        self.config.color_seed = self.config.color_seed.wrapping_add(1);
        self.colors = assign_pairs(self.signals.len(), self.config.color_seed);
    }

    pub fn color_pair(&self, index: usize) -> ColorPair {
        self.colors
            .get(index % self.colors.len().max(1))
            .copied()
            .unwrap_or(PAIRS[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::stored::stored_signals;
    use crate::spectral::policy::PolicyVariant;
    use crate::ui::theme::ColorCapability;

    fn app() -> AppState {
        AppState::new(
            Config::default(),
            Theme::with_capability(ColorCapability::TrueColor),
            stored_signals().unwrap(),
        )
    }

    #[test]
    fn cycling_policy_recomputes_measurements() {
        let mut app = app();
        app.cycle_policy();
        assert_eq!(app.config.policy, PolicyVariant::Expand);

        let expected = measure(&app.signals, PolicyVariant::Expand.policy());
        for (a, b) in app.measurements.iter().zip(expected.iter()) {
            assert_eq!(a.heights, b.heights);
        }
    }

    #[test]
    fn reseeding_is_deterministic() {
        let mut app = app();
        let seed = app.config.color_seed;
        app.reseed_colors();
        assert_eq!(app.config.color_seed, seed + 1);
        assert_eq!(app.colors, assign_pairs(app.signals.len(), seed + 1));
        assert_eq!(app.colors.len(), 4);
    }

    #[test]
    fn circles_toggle() {
        let mut app = app();
        assert!(app.config.show_circles);
        app.toggle_circles();
        assert!(!app.config.show_circles);
    }
}
