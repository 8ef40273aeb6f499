//! Panel controller state
//!
//! `PanelState` owns the current slider values and the active preset. Every
//! mutation writes straight through to a [`StyleTarget`], so the page picks up
//! changes without waiting for the panel to re-render.

use tracing::debug;

use crate::format::{css_value, parse_value};
use crate::parameter::{
    descriptor, ParameterDescriptor, ParameterId, PARAMETERS, PARAMETER_COUNT,
};
use crate::preset::{preset, PresetId};
use crate::style_target::StyleTarget;

/// Write one parameter value to the style root without touching panel state
pub fn apply_to_target(
    descriptor: &ParameterDescriptor,
    value: f64,
    target: &mut impl StyleTarget,
) {
    target.set_variable(descriptor.target_variable, &css_value(descriptor, value));
}

/// Current values plus whichever preset produced them
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    values: [f64; PARAMETER_COUNT],
    active_preset: Option<PresetId>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelState {
    /// Every parameter at its default, no preset active.
    ///
    /// Nothing is written to the style root until the first interaction.
    pub fn new() -> Self {
        Self {
            values: PARAMETERS.map(|d| d.default_value),
            active_preset: None,
        }
    }

    pub fn value(&self, id: ParameterId) -> f64 {
        self.values[id.index()]
    }

    pub fn active_preset(&self) -> Option<PresetId> {
        self.active_preset
    }

    /// Descriptors paired with their current values, in display order
    pub fn entries(&self) -> impl Iterator<Item = (&'static ParameterDescriptor, f64)> + '_ {
        PARAMETERS.iter().zip(self.values.iter().copied())
    }

    /// Set one parameter from raw range-input text.
    ///
    /// The value is stored as parsed with no clamping; the range input's own
    /// min/max/step keep it in bounds. Unparsable text stores NaN.
    pub fn set_parameter(&mut self, id: ParameterId, raw: &str, target: &mut impl StyleTarget) {
        let value = parse_value(raw);
        let descriptor = descriptor(id);

        self.values[id.index()] = value;
        self.active_preset = None;
        apply_to_target(descriptor, value, target);

        debug!("Set {} = {}", descriptor.target_variable, value);
    }

    /// Replace every value with the preset's and write all variables
    pub fn apply_preset(&mut self, id: PresetId, target: &mut impl StyleTarget) {
        let definition = preset(id);
        let values = definition.values;

        for (descriptor, value) in PARAMETERS.iter().zip(values) {
            apply_to_target(descriptor, value, target);
        }
        self.values = values;
        self.active_preset = Some(id);

        debug!("Applied preset {}", definition.label);
    }

    /// Restore defaults and write all variables
    pub fn reset(&mut self, target: &mut impl StyleTarget) {
        let values = PARAMETERS.map(|d| d.default_value);

        for (descriptor, value) in PARAMETERS.iter().zip(values) {
            apply_to_target(descriptor, value, target);
        }
        self.values = values;
        self.active_preset = None;

        debug!("Reset glass parameters to defaults");
    }

    /// Current values as a `:root` block, ready to paste into a stylesheet
    pub fn css_declarations(&self) -> String {
        let mut css = String::from(":root {\n");
        for (descriptor, value) in self.entries() {
            css.push_str(&format!(
                "  {}: {};\n",
                descriptor.target_variable,
                css_value(descriptor, value)
            ));
        }
        css.push('}');
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::PRESETS;
    use crate::style_target::MemoryStyleTarget;

    #[test]
    fn test_new_uses_defaults() {
        let state = PanelState::new();
        for d in &PARAMETERS {
            assert_eq!(state.value(d.id), d.default_value);
        }
        assert_eq!(state.active_preset(), None);
    }

    #[test]
    fn test_set_parameter_writes_value_with_unit() {
        let mut state = PanelState::new();
        let mut root = MemoryStyleTarget::new();

        state.set_parameter(ParameterId::Blur, "30", &mut root);

        assert_eq!(state.value(ParameterId::Blur), 30.0);
        assert_eq!(root.get("--glass-blur"), Some("30px"));
        assert_eq!(root.write_count(), 1);
    }

    #[test]
    fn test_set_parameter_clears_active_preset() {
        let mut state = PanelState::new();
        let mut root = MemoryStyleTarget::new();

        state.apply_preset(PresetId::Frosted, &mut root);
        assert_eq!(state.active_preset(), Some(PresetId::Frosted));

        state.set_parameter(ParameterId::Saturation, "1.6", &mut root);
        assert_eq!(state.active_preset(), None);
    }

    #[test]
    fn test_set_parameter_does_not_clamp() {
        let mut state = PanelState::new();
        let mut root = MemoryStyleTarget::new();

        state.set_parameter(ParameterId::Opacity, "0.9", &mut root);

        assert_eq!(state.value(ParameterId::Opacity), 0.9);
        assert_eq!(root.get("--glass-opacity"), Some("0.9"));
    }

    #[test]
    fn test_set_parameter_unparsable_stores_nan() {
        let mut state = PanelState::new();
        let mut root = MemoryStyleTarget::new();

        state.set_parameter(ParameterId::BezelDepth, "deep", &mut root);

        assert!(state.value(ParameterId::BezelDepth).is_nan());
        assert_eq!(root.get("--glass-bezel-depth"), Some("NaNpx"));
    }

    #[test]
    fn test_apply_every_preset() {
        for p in &PRESETS {
            let mut state = PanelState::new();
            let mut root = MemoryStyleTarget::new();

            state.apply_preset(p.id, &mut root);

            assert_eq!(state.active_preset(), Some(p.id));
            for d in &PARAMETERS {
                assert_eq!(state.value(d.id), p.value(d.id));
                assert_eq!(
                    root.get(d.target_variable),
                    Some(css_value(d, p.value(d.id)).as_str())
                );
            }
            assert_eq!(root.write_count(), PARAMETER_COUNT);
        }
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = PanelState::new();
        let mut root = MemoryStyleTarget::new();

        state.apply_preset(PresetId::Dream, &mut root);
        state.reset(&mut root);

        assert_eq!(state, PanelState::new());
        assert_eq!(root.get("--glass-blur"), Some("20px"));
        assert_eq!(root.get("--glass-brightness"), Some("1.05"));
    }

    #[test]
    fn test_apply_to_target_writes_single_variable() {
        let mut root = MemoryStyleTarget::new();

        apply_to_target(descriptor(ParameterId::Displacement), 7.0, &mut root);

        assert_eq!(root.get("--glass-displacement"), Some("7px"));
        assert_eq!(root.write_count(), 1);
    }

    #[test]
    fn test_css_declarations() {
        let mut state = PanelState::new();
        let mut root = MemoryStyleTarget::new();
        state.apply_preset(PresetId::Clear, &mut root);

        assert_eq!(
            state.css_declarations(),
            ":root {\n  --glass-displacement: 1px;\n  --glass-blur: 8px;\n  --glass-opacity: 0.08;\n  --glass-brightness: 1.05;\n  --glass-saturation: 1.1;\n  --glass-bezel-depth: 12px;\n}"
        );
    }
}
