//! Terminal output formatting with colors and box drawing.

use colored::Colorize;

use crate::estimator::Estimate;

/// Format an [`Estimate`] for human-readable terminal output.
///
/// Uses ANSI colors and Unicode box drawing for clear presentation. Tail
/// probabilities are printed in scientific notation (a rare-event estimate
/// like 6.2×10⁻¹⁶ would render as 0.000… otherwise), and a clamped
/// variance gets a prominent precision-loss warning line.
pub fn format_estimate(estimate: &Estimate) -> String {
    let mut output = String::new();

    let header = format!(
        "{} P(X > {})",
        "TAIL ESTIMATE".bold(),
        estimate.threshold
    );

    output.push_str(&format_box_top());
    output.push_str(&format_box_line(&header));
    output.push_str(&format_box_separator());

    let mean_str = format!("Estimate: {:.6e}", estimate.mean);
    output.push_str(&format_box_line(&mean_str.green().to_string()));

    let var_str = format!("Variance: {:.6e}", estimate.variance);
    output.push_str(&format_box_line(&var_str));

    let se_str = format!("Std Error: {:.6e}", estimate.std_error);
    output.push_str(&format_box_line(&se_str));

    let ci_str = format!(
        "{:.0}% CI: [{:.6e}, {:.6e}]",
        estimate.confidence_level * 100.0,
        estimate.ci_low,
        estimate.ci_high
    );
    output.push_str(&format_box_line(&ci_str));

    output.push_str(&format_box_separator());

    let samples_str = format!("Samples: {}", estimate.samples);
    output.push_str(&format_box_line(&samples_str));

    if estimate.variance_clamped {
        let warn = "Variance clamped to zero (precision loss)"
            .yellow()
            .bold()
            .to_string();
        output.push_str(&format_box_line(&warn));
    }

    output.push_str(&format_box_bottom());

    output
}

// Box drawing helpers

const BOX_WIDTH: usize = 60;

fn format_box_top() -> String {
    format!("\u{250C}{}\u{2510}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_bottom() -> String {
    format!("\u{2514}{}\u{2518}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_separator() -> String {
    format!("\u{251C}{}\u{2524}\n", "\u{2500}".repeat(BOX_WIDTH))
}

fn format_box_line(content: &str) -> String {
    // Strip ANSI codes for length calculation
    let visible_len = strip_ansi_codes(content).chars().count();
    let padding = if visible_len < BOX_WIDTH - 2 {
        BOX_WIDTH - 2 - visible_len
    } else {
        0
    };
    format!("\u{2502} {}{} \u{2502}\n", content, " ".repeat(padding))
}

/// Strip ANSI escape codes for accurate length calculation.
fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip until 'm' (end of ANSI sequence)
            while let Some(&next) = chars.peek() {
                chars.next();
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}
