use std::fmt::Write;

use p4unity_operations::verification::VerificationResult;

use super::OutputFormatter;

pub(crate) struct PlainTextFormatter;

impl OutputFormatter for PlainTextFormatter {
    fn format_bypass(&self) -> String {
        String::from("[p4unity] bypassing validation\n")
    }

    fn format_success(&self, _result: &VerificationResult) -> String {
        String::from("success\n")
    }

    fn format_failure(&self, result: &VerificationResult) -> String {
        let mut output = String::new();
        for violation in &result.violations {
            let _ = writeln!(output, "{violation}");
        }
        output
    }
}
