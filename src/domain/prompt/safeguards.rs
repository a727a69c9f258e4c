//! Privacy and security review prompts.
//!
//! Each prompt asks the model to perform a review; none of them inspects or
//! alters the supplied text itself.

use super::types::Prompt;

/// Ask the model to flag identifiable or protected health information.
pub fn build_phi_scrub_check_prompt(text: &str) -> Prompt {
    Prompt::new(format!(
        "Review the following submission for any personally identifiable or protected health information. \
         If found, flag its presence and suggest redactions.\n\
         Input: {text}"
    ))
}

/// Ask the model to validate submitted fields for forbidden patterns.
///
/// Fields are rendered in the order given, as `{"Name": "value", ...}`.
pub fn build_input_sanitization_prompt<I, K, V>(fields: I) -> Prompt
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let rendered = fields
        .into_iter()
        .map(|(name, value)| format!("{:?}: {:?}", name.as_ref(), value.as_ref()))
        .collect::<Vec<_>>()
        .join(", ");

    Prompt::new(format!(
        "Validate the following input fields for forbidden characters, excessive length, or suspicious patterns \
         (e.g., code, URLs, special characters). List any fields that do not comply.\n\
         Input: {{{rendered}}}"
    ))
}

/// Ask the model to find identifiers in earlier model output.
pub fn build_output_redaction_prompt(model_output: &str) -> Prompt {
    Prompt::new(format!(
        "Analyze the model-generated output below. Does it contain any names, full dates of birth, addresses, \
         or other direct identifiers? If so, recommend masking or redacting those items.\n\
         Output: {model_output}"
    ))
}

/// Ask the model whether an action is permitted for `role` under least privilege.
pub fn build_access_control_prompt(role: &str) -> Prompt {
    Prompt::new(format!(
        "Given this prompt and user role ({role}), check if the requested action should be permitted based on \
         least privilege and HIPAA access standards. Flag any access violations."
    ))
}

/// Ask the model to confirm a log entry carries only pseudonymized values.
pub fn build_audit_log_prompt(log_entry: &str) -> Prompt {
    Prompt::new(format!(
        "Audit this transaction: confirm that only pseudonymized values are in logs and no PHI is present. \
         Identify any privacy risks in the following log entry:\n\
         Log: {log_entry}"
    ))
}

pub fn build_compliance_review_prompt() -> Prompt {
    Prompt::new(
        "Review this prompt workflow for HIPAA compliance: Are data transmission, storage, and access protocols \
         explicitly described and followed? Summarize gaps, if any.",
    )
}
