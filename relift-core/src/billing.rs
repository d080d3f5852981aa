//! Billing estimate rendering
//!
//! The modernization service bills per line of submitted code. The hosting
//! front end shows the estimate before the user confirms a job.

/// Cost of transforming a single line of code, in US dollars
pub const COST_PER_LINE_USD: f64 = 0.003;

/// Renders the cost-estimate message for a submission of `lines_of_code` lines
///
/// The dollar amount is always rendered with exactly two decimal digits.
pub fn billing_text(lines_of_code: u64) -> String {
    let charge = lines_of_code as f64 * COST_PER_LINE_USD;

    format!(
        "{} lines of code were submitted for transformation. At a rate of ${} per line, \
         you may be charged up to ${:.2} for this job. To avoid charges, stop the job \
         before it completes.",
        lines_of_code, COST_PER_LINE_USD, charge
    )
}
