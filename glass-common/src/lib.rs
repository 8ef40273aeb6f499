//! glass-common - Pure model for the glass style panel
//!
//! Holds the parameter and preset tables, the panel controller state, and the
//! `StyleTarget` seam the view layer writes through. Nothing in here touches
//! the DOM, so everything is testable natively.

pub mod dismiss;
pub mod error;
pub mod format;
pub mod panel;
pub mod parameter;
pub mod preset;
pub mod style_target;

pub use error::GlassError;
pub use panel::{apply_to_target, PanelState};
pub use parameter::{descriptor, ParameterDescriptor, ParameterId, PARAMETERS, PARAMETER_COUNT};
pub use preset::{preset, PresetDefinition, PresetId, PRESETS};
pub use style_target::{MemoryStyleTarget, StyleTarget};
