//! Percentage calculator.
//!
//! Pure function of the two raw field values; re-evaluated on every edit.

use std::fmt::{Display, Formatter};

/// Result of evaluating the two calculator fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PercentageOutcome {
    /// Both fields are empty.
    Prompt,
    /// Total is missing, zero, negative or not a number.
    InvalidTotal,
    /// Obtained is negative, above total or not a number.
    ObtainedOutOfRange,
    /// `obtained / total * 100`.
    Percentage(f64),
}

impl Display for PercentageOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prompt => write!(f, "Enter marks to see percentage."),
            Self::InvalidTotal => write!(f, "Total marks must be greater than 0."),
            Self::ObtainedOutOfRange => {
                write!(f, "Obtained marks must be between 0 and total marks.")
            }
            Self::Percentage(value) => write!(f, "Percentage: {value:.2}%"),
        }
    }
}

/// Evaluates raw `total` and `obtained` field text.
///
/// Fields are trimmed. An empty field counts as 0 unless both are empty.
pub fn evaluate_percentage(total_input: &str, obtained_input: &str) -> PercentageOutcome {
    let total_input = total_input.trim();
    let obtained_input = obtained_input.trim();

    if total_input.is_empty() && obtained_input.is_empty() {
        return PercentageOutcome::Prompt;
    }

    let total = match parse_field(total_input) {
        Some(total) if total > 0.0 => total,
        _ => return PercentageOutcome::InvalidTotal,
    };

    match parse_field(obtained_input) {
        Some(obtained) if (0.0..=total).contains(&obtained) => {
            PercentageOutcome::Percentage(obtained / total * 100.0)
        }
        _ => PercentageOutcome::ObtainedOutOfRange,
    }
}

fn parse_field(value: &str) -> Option<f64> {
    if value.is_empty() {
        return Some(0.0);
    }
    value.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
}

#[cfg(test)]
mod tests {
    use super::{evaluate_percentage, PercentageOutcome};

    #[test]
    fn both_empty_prompts_for_input() {
        assert_eq!(evaluate_percentage("", "  "), PercentageOutcome::Prompt);
        assert_eq!(
            evaluate_percentage("", "").to_string(),
            "Enter marks to see percentage."
        );
    }

    #[test]
    fn non_positive_or_missing_total_is_rejected_regardless_of_obtained() {
        for total in ["", "0", "-5", "abc", "inf"] {
            assert_eq!(
                evaluate_percentage(total, "10"),
                PercentageOutcome::InvalidTotal,
                "total={total:?}"
            );
        }
        assert_eq!(
            evaluate_percentage("0", "").to_string(),
            "Total marks must be greater than 0."
        );
    }

    #[test]
    fn obtained_outside_range_is_rejected() {
        for obtained in ["-1", "101", "lots"] {
            assert_eq!(
                evaluate_percentage("100", obtained),
                PercentageOutcome::ObtainedOutOfRange,
                "obtained={obtained:?}"
            );
        }
        assert_eq!(
            evaluate_percentage("50", "60").to_string(),
            "Obtained marks must be between 0 and total marks."
        );
    }

    #[test]
    fn valid_marks_render_two_decimal_percentage() {
        assert_eq!(
            evaluate_percentage("80", "60").to_string(),
            "Percentage: 75.00%"
        );
        assert_eq!(
            evaluate_percentage("3", "2").to_string(),
            "Percentage: 66.67%"
        );
        assert_eq!(
            evaluate_percentage(" 40 ", "40").to_string(),
            "Percentage: 100.00%"
        );
    }

    #[test]
    fn empty_obtained_with_valid_total_counts_as_zero() {
        assert_eq!(
            evaluate_percentage("90", "").to_string(),
            "Percentage: 0.00%"
        );
    }

    #[test]
    fn percentage_matches_ratio_for_sampled_valid_inputs() {
        for total in [1u32, 7, 50, 99, 250] {
            for obtained in 0..=total {
                let expected = f64::from(obtained) / f64::from(total) * 100.0;
                match evaluate_percentage(&total.to_string(), &obtained.to_string()) {
                    PercentageOutcome::Percentage(value) => {
                        assert!((value - expected).abs() < 1e-9)
                    }
                    other => panic!("unexpected outcome {other:?} for {obtained}/{total}"),
                }
            }
        }
    }
}
