//! When the panel asks its owner to close it, and when it accepts input

/// Something that may close the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    /// The close button in the header
    CloseButton,
    /// Escape pressed while focus is inside the panel
    Escape,
    /// Pointer-down on the document. `inside` is `None` when the panel
    /// element could not be found.
    PointerDown { inside: Option<bool> },
}

/// A single request for the owner to close the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseRequest {
    pub trigger: CloseTrigger,
}

/// Decide whether `trigger` closes the panel. Each trigger event yields at
/// most one request.
pub fn close_request(open: bool, trigger: CloseTrigger) -> Option<CloseRequest> {
    let closes = match trigger {
        CloseTrigger::CloseButton => true,
        CloseTrigger::Escape => open,
        CloseTrigger::PointerDown { inside } => open && inside == Some(false),
    };
    closes.then_some(CloseRequest { trigger })
}

/// Whether slider, preset and reset input should be applied.
///
/// A closed panel stays mounted, so stray events must not reach the style root.
pub fn accepts_input(open: bool) -> bool {
    open
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTSIDE: CloseTrigger = CloseTrigger::PointerDown {
        inside: Some(false),
    };
    const INSIDE: CloseTrigger = CloseTrigger::PointerDown { inside: Some(true) };
    const MISSING: CloseTrigger = CloseTrigger::PointerDown { inside: None };

    #[test]
    fn test_close_button_always_closes() {
        assert_eq!(
            close_request(true, CloseTrigger::CloseButton),
            Some(CloseRequest {
                trigger: CloseTrigger::CloseButton
            })
        );
        assert!(close_request(false, CloseTrigger::CloseButton).is_some());
    }

    #[test]
    fn test_escape_only_while_open() {
        assert!(close_request(true, CloseTrigger::Escape).is_some());
        assert_eq!(close_request(false, CloseTrigger::Escape), None);
    }

    #[test]
    fn test_outside_press_while_open() {
        assert_eq!(
            close_request(true, OUTSIDE),
            Some(CloseRequest { trigger: OUTSIDE })
        );
    }

    #[test]
    fn test_inside_press_keeps_open() {
        assert_eq!(close_request(true, INSIDE), None);
    }

    #[test]
    fn test_closed_panel_ignores_presses() {
        assert_eq!(close_request(false, OUTSIDE), None);
        assert_eq!(close_request(false, INSIDE), None);
    }

    #[test]
    fn test_missing_panel_element_is_noop() {
        assert_eq!(close_request(true, MISSING), None);
    }

    #[test]
    fn test_closed_panel_rejects_input() {
        assert!(accepts_input(true));
        assert!(!accepts_input(false));
    }
}
