//! Number parsing and formatting for slider values
//!
//! Style writes use the same text a browser produces when stringifying a
//! number, so `2.0` becomes `2` and NaN becomes `NaN`.

use crate::parameter::ParameterDescriptor;

/// Parse raw range-input text. Anything that is not a finite number is NaN.
pub fn parse_value(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => f64::NAN,
    }
}

/// Number text as written into a style variable.
///
/// Magnitudes of 1e21 and above, or below 1e-6, switch to exponent form
/// (`1e-7`, `1e+21`) as browsers do.
pub fn css_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        // -0 stringifies as 0
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let text = format!("{:e}", value);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    } else {
        value.to_string()
    }
}

/// Full style variable value: number followed by the descriptor's unit
pub fn css_value(descriptor: &ParameterDescriptor, value: f64) -> String {
    format!("{}{}", css_number(value), descriptor.unit)
}

/// Value text shown next to a slider.
///
/// Exact two-decimal ties round to even (`0.125` shows `0.12`); step-snapped
/// slider values never land on a tie.
pub fn display_value(descriptor: &ParameterDescriptor, value: f64) -> String {
    if value.is_nan() {
        return format!("NaN{}", descriptor.unit);
    }
    if descriptor.is_length() {
        format!("{}px", css_number(value.round()))
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::{descriptor, ParameterId};

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("30"), 30.0);
        assert_eq!(parse_value(" 0.35 "), 0.35);
        assert!(parse_value("").is_nan());
        assert!(parse_value("abc").is_nan());
        assert!(parse_value("inf").is_nan());
    }

    #[test]
    fn test_css_number_matches_browser_text() {
        assert_eq!(css_number(2.0), "2");
        assert_eq!(css_number(0.35), "0.35");
        assert_eq!(css_number(1.1), "1.1");
        assert_eq!(css_number(-0.0), "0");
        assert_eq!(css_number(f64::NAN), "NaN");
        assert_eq!(css_number(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_css_number_exponent_form() {
        assert_eq!(css_number(1e-7), "1e-7");
        assert_eq!(css_number(1.5e-7), "1.5e-7");
        assert_eq!(css_number(-2e-9), "-2e-9");
        assert_eq!(css_number(1e21), "1e+21");
        assert_eq!(css_number(0.000001), "0.000001");
        assert_eq!(css_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_css_value_exponent_keeps_unit() {
        assert_eq!(css_value(descriptor(ParameterId::Blur), 1e21), "1e+21px");
    }

    #[test]
    fn test_css_value_appends_unit() {
        assert_eq!(css_value(descriptor(ParameterId::Blur), 30.0), "30px");
        assert_eq!(css_value(descriptor(ParameterId::Opacity), 0.35), "0.35");
        assert_eq!(
            css_value(descriptor(ParameterId::BezelDepth), f64::NAN),
            "NaNpx"
        );
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(descriptor(ParameterId::Blur), 28.0), "28px");
        assert_eq!(display_value(descriptor(ParameterId::Blur), 27.6), "28px");
        assert_eq!(
            display_value(descriptor(ParameterId::Brightness), 1.1),
            "1.10"
        );
        assert_eq!(display_value(descriptor(ParameterId::Opacity), 0.0), "0.00");
        assert_eq!(
            display_value(descriptor(ParameterId::Saturation), f64::NAN),
            "NaN"
        );
    }

    #[test]
    fn test_display_value_ties_round_to_even() {
        let opacity = descriptor(ParameterId::Opacity);
        assert_eq!(display_value(opacity, 0.125), "0.12");
        // Step-snapped values are unaffected
        assert_eq!(display_value(opacity, 0.13), "0.13");
        assert_eq!(display_value(opacity, 0.35), "0.35");
    }
}
