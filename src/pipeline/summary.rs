use crate::domain::Label;

pub const BODY_SAMPLE_CHARS: usize = 240;

pub fn build_message(
    date: &str,
    subject: &str,
    body: &str,
    label: Label,
    confidence: f64,
) -> String {
    let sample: String = body.chars().take(BODY_SAMPLE_CHARS).collect();
    format!(
        "We received your email sent at {date} with the subject '{subject}'. \
         Here is a {BODY_SAMPLE_CHARS} character sample of the email body: '{sample}' \
         The email was categorized as {label} with a {}% confidence.",
        format_confidence(confidence)
    )
}

/// Shortest round-trip form, always with a fractional part: `2.0`, `97.0`, `12.345`.
/// Scientific notation carries a signed exponent of at least two digits (`1e-05`, `1e+16`).
pub fn format_confidence(confidence: f64) -> String {
    let repr = format!("{confidence:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_body_is_embedded_whole() {
        let message = build_message(
            "2024-01-01",
            "Offer",
            "WIN A FREE PRIZE NOW",
            Label::Spam,
            0.97 * 100.0,
        );
        assert_eq!(
            message,
            "We received your email sent at 2024-01-01 with the subject 'Offer'. \
             Here is a 240 character sample of the email body: 'WIN A FREE PRIZE NOW' \
             The email was categorized as Spam with a 97.0% confidence."
        );
    }

    #[test]
    fn long_body_is_cut_at_240_chars() {
        let body = format!("{}{}", "x".repeat(BODY_SAMPLE_CHARS), "TAIL");
        let message = build_message("d", "s", &body, Label::Ham, 1.0);
        assert!(message.contains(&format!("'{}'", "x".repeat(BODY_SAMPLE_CHARS))));
        assert!(!message.contains("TAIL"));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let body = "é".repeat(300);
        let message = build_message("d", "s", &body, Label::Ham, 1.0);
        assert_eq!(message.matches('é').count(), BODY_SAMPLE_CHARS);
    }

    #[test]
    fn body_of_exactly_240_is_kept() {
        let body = "y".repeat(BODY_SAMPLE_CHARS);
        let message = build_message("d", "s", &body, Label::Ham, 1.0);
        assert!(message.contains(&format!("'{body}'")));
    }

    #[test]
    fn confidence_is_not_rounded() {
        assert_eq!(format_confidence(2.0), "2.0");
        assert_eq!(format_confidence(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_confidence(99.87654321), "99.87654321");
    }

    #[test]
    fn scientific_confidence_pads_exponent() {
        assert_eq!(format_confidence(1e-5), "1e-05");
        assert_eq!(format_confidence(1.5e-7), "1.5e-07");
        assert_eq!(format_confidence(1e16), "1e+16");
        assert_eq!(format_confidence(2.5e-123), "2.5e-123");
    }
}
