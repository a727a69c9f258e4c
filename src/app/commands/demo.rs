//! Demo command - every builder applied to sample data.
//!
//! The samples deliberately contain a direct identifier ("John Doe") so the
//! review prompts have something to flag.

use super::render::RenderOutcome;
use crate::domain::PromptKind;
use crate::domain::prompt::{
    OutputFormat, VitalsSummaryOptions, build_access_control_prompt, build_audit_log_prompt,
    build_basic_vitals_prompt, build_bias_safety_prompt, build_compliance_review_prompt,
    build_drift_detection_prompt, build_fact_check_prompt, build_input_sanitization_prompt,
    build_output_redaction_prompt, build_peer_review_prompt, build_phi_scrub_check_prompt,
    build_regression_prompt, build_test_case_prompt, build_vitals_summary_prompt,
};

const PATIENT_ID: &str = "Pt98765";
const VITALS: &str = "- 2024-05-02: BP 145/90\n- 2024-05-04: BP 150/95, HR 104";
const DATE_RANGE: &str = "May 1, 2024 and May 7, 2024";
const USER_INPUT: &str = "Patient John Doe, DOB: 01/15/1970, ID: 1234, reports BP 145/90.";
const LLM_OUTPUT: &str = "Patient John Doe had an abnormal BP reading of 145/90.";
const LOG_ENTRY: &str = "User123 accessed record for patient Pt98765 at 10:32am.";
const CURRENT_OUTPUT: &str = "BP: 145/90\nRecommendation: Monitor.";
const APPROVED_OUTPUT: &str = "BP: 145/90\nRecommendation: Follow-up with PCP.";
const SCENARIO: &str = "65-year-old male with hypertension, reported BP readings.";
const PROMPT_TEXT: &str = "Summarize abnormal BPs for the provider.";

/// Execute the demo command.
///
/// Returns one prompt per kind, in catalog order.
pub fn execute() -> Vec<RenderOutcome> {
    PromptKind::ALL.into_iter().map(|kind| RenderOutcome { kind, prompt: sample(kind) }).collect()
}

fn sample(kind: PromptKind) -> crate::domain::Prompt {
    match kind {
        PromptKind::BasicVitals => build_basic_vitals_prompt(PATIENT_ID, VITALS, DATE_RANGE),
        PromptKind::VitalsSummary => build_vitals_summary_prompt(
            PATIENT_ID,
            VITALS,
            DATE_RANGE,
            &VitalsSummaryOptions::new()
                .with_output_format(OutputFormat::Soap)
                .with_symptoms("occasional headaches")
                .with_medication_changes("lisinopril increased to 20mg on 2024-04-28"),
        ),
        PromptKind::PhiScrub => build_phi_scrub_check_prompt(USER_INPUT),
        PromptKind::InputSanitization => build_input_sanitization_prompt([
            ("Name", "John Doe"),
            ("BP", "145/90"),
            ("Notes", "N/A"),
        ]),
        PromptKind::OutputRedaction => build_output_redaction_prompt(LLM_OUTPUT),
        PromptKind::AccessControl => build_access_control_prompt("nurse"),
        PromptKind::AuditLog => build_audit_log_prompt(LOG_ENTRY),
        PromptKind::ComplianceReview => build_compliance_review_prompt(),
        PromptKind::TestCase => build_test_case_prompt(SCENARIO, PROMPT_TEXT),
        PromptKind::Regression => build_regression_prompt(CURRENT_OUTPUT, APPROVED_OUTPUT),
        PromptKind::PeerReview => {
            build_peer_review_prompt(&format!("{}\n{}", PROMPT_TEXT, CURRENT_OUTPUT))
        }
        PromptKind::FactCheck => {
            build_fact_check_prompt(LLM_OUTPUT, Some("CDC, Institutional Protocols"))
        }
        PromptKind::BiasSafety => build_bias_safety_prompt(LLM_OUTPUT),
        PromptKind::DriftDetection => {
            build_drift_detection_prompt(CURRENT_OUTPUT, APPROVED_OUTPUT, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_kind_in_order() {
        let kinds: Vec<_> = execute().into_iter().map(|o| o.kind).collect();

        assert_eq!(kinds, PromptKind::ALL.to_vec());
    }

    #[test]
    fn demo_output_is_stable() {
        let first: Vec<_> = execute().into_iter().map(|o| o.prompt).collect();
        let second: Vec<_> = execute().into_iter().map(|o| o.prompt).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn fact_check_sample_names_guidelines() {
        let outcome = execute().into_iter().find(|o| o.kind == PromptKind::FactCheck).unwrap();

        assert!(outcome.prompt.as_str().contains("(e.g., CDC, Institutional Protocols)"));
    }
}
