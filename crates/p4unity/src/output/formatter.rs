use p4unity_operations::verification::VerificationResult;

pub(crate) trait OutputFormatter {
    fn format_bypass(&self) -> String;
    fn format_success(&self, result: &VerificationResult) -> String;
    fn format_failure(&self, result: &VerificationResult) -> String;
}
