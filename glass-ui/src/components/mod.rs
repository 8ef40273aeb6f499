//! Panel components

pub mod button;
pub mod icons;
pub mod style_variable_panel;

pub use button::{ChromelessButton, PanelButton, PanelButtonVariant};
pub use icons::{ResetIcon, SlidersIcon, XIcon};
pub use style_variable_panel::StyleVariablePanel;
