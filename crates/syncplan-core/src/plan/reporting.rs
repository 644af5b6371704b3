//! Plan reporting

use std::fmt::Write;

use super::PlanResult;

/// Plan reporter
pub struct PlanReporter;

impl PlanReporter {
    /// Generate a per-file listing followed by a summary
    #[must_use]
    pub fn generate_summary(result: &PlanResult) -> String {
        let mut output = String::new();

        for entry in &result.entries {
            let _ = writeln!(output, "{:<8} {}", entry.action, entry.path.display());
        }

        output.push_str("\n=== Plan Summary ===\n");
        let _ = writeln!(output, "Upload:   {}", result.uploads());
        let _ = writeln!(output, "Delete:   {}", result.deletes());
        let _ = writeln!(output, "Nothing:  {}", result.unchanged());

        if !result.errors.is_empty() {
            let _ = writeln!(output, "\nErrors ({}):", result.errors.len());
            for error in &result.errors {
                let _ = writeln!(output, "  - {error}");
            }
        }

        if result.is_success() {
            output.push_str("Status: ✓ Success\n");
        } else {
            output.push_str("Status: ✗ Completed with errors\n");
        }

        output
    }
}
