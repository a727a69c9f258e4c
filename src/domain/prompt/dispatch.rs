//! Name-based prompt rendering from field maps.

use tracing::debug;

use super::error::PromptError;
use super::kind::PromptKind;
use super::request::PromptRequest;
use super::safeguards::{
    build_access_control_prompt, build_audit_log_prompt, build_compliance_review_prompt,
    build_input_sanitization_prompt, build_output_redaction_prompt, build_phi_scrub_check_prompt,
};
use super::template::{TemplateOverrides, TemplateRenderer};
use super::types::Prompt;
use super::validation::{
    build_bias_safety_prompt, build_drift_detection_prompt, build_fact_check_prompt,
    build_peer_review_prompt, build_regression_prompt, build_test_case_prompt,
};
use super::vitals::{
    OutputFormat, VitalsSummaryOptions, build_basic_vitals_prompt, build_vitals_summary_prompt,
};

/// Fallback values for optional fields a request leaves unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptDefaults {
    /// Output format for `vitals-summary`.
    pub output_format: Option<String>,
    /// Comparison window for `drift-detection`.
    pub drift_window: Option<String>,
    /// Reference guidelines for `fact-check`.
    pub guidelines: Option<String>,
}

impl PromptDefaults {
    /// The defaults that apply to `kind`, keyed by request field name.
    pub fn for_kind(&self, kind: PromptKind) -> PromptRequest {
        let mut request = PromptRequest::new();
        let candidates = [
            ("output_format", &self.output_format),
            ("time_window", &self.drift_window),
            ("guidelines", &self.guidelines),
        ];
        for (field, value) in candidates {
            if let Some(value) = value
                && kind.optional_fields().contains(&field)
            {
                request.insert(field, value.clone());
            }
        }
        request
    }
}

/// Render a prompt of `kind` from request fields.
///
/// Optional fields the request does not contain are filled from `defaults`.
/// A field the request does contain always wins over the default, even when
/// its value is empty; the builder then decides what an empty value means.
/// A template override
/// for `kind` replaces the built-in prompt; required fields are checked
/// either way.
pub fn render_request<R: TemplateRenderer>(
    kind: PromptKind,
    request: &PromptRequest,
    defaults: &PromptDefaults,
    overrides: &TemplateOverrides,
    renderer: &R,
) -> Result<Prompt, PromptError> {
    let mut request = request.clone();
    request.fill_missing(&defaults.for_kind(kind));

    check_required(kind, &request)?;

    debug!(
        kind = %kind,
        fields = ?request.field_names().collect::<Vec<_>>(),
        overridden = overrides.get(kind).is_some(),
        "rendering prompt"
    );

    match overrides.get(kind) {
        Some(template) => {
            // Optional fields are always defined for templates, blank when unset.
            for field in kind.optional_fields() {
                if !request.contains(field) {
                    request.insert(*field, "");
                }
            }
            renderer.render(template, &request, kind).map(Prompt::new)
        }
        None => build_from_request(kind, &request),
    }
}

/// Build a prompt with the built-in template for `kind`.
pub fn build_from_request(kind: PromptKind, request: &PromptRequest) -> Result<Prompt, PromptError> {
    let prompt = match kind {
        PromptKind::BasicVitals => build_basic_vitals_prompt(
            request.require(kind, "patient_id")?,
            request.require(kind, "vitals_data")?,
            request.require(kind, "date_range")?,
        ),
        PromptKind::VitalsSummary => build_vitals_summary_prompt(
            request.require(kind, "patient_id")?,
            request.require(kind, "vitals_data")?,
            request.require(kind, "date_range")?,
            &vitals_options(request),
        ),
        PromptKind::PhiScrub => build_phi_scrub_check_prompt(request.require(kind, "text")?),
        PromptKind::InputSanitization => {
            if request.is_empty() {
                return Err(PromptError::EmptyRequest { kind: kind.name().to_string() });
            }
            build_input_sanitization_prompt(request.fields())
        }
        PromptKind::OutputRedaction => {
            build_output_redaction_prompt(request.require(kind, "model_output")?)
        }
        PromptKind::AccessControl => build_access_control_prompt(request.require(kind, "user_role")?),
        PromptKind::AuditLog => build_audit_log_prompt(request.require(kind, "log_entry")?),
        PromptKind::ComplianceReview => build_compliance_review_prompt(),
        PromptKind::TestCase => build_test_case_prompt(
            request.require(kind, "scenario")?,
            request.require(kind, "prompt_text")?,
        ),
        PromptKind::Regression => build_regression_prompt(
            request.require(kind, "current_output")?,
            request.require(kind, "approved_output")?,
        ),
        PromptKind::PeerReview => build_peer_review_prompt(request.require(kind, "prompt_and_output")?),
        PromptKind::FactCheck => {
            build_fact_check_prompt(request.require(kind, "model_output")?, request.get("guidelines"))
        }
        PromptKind::BiasSafety => build_bias_safety_prompt(request.require(kind, "model_output")?),
        PromptKind::DriftDetection => build_drift_detection_prompt(
            request.require(kind, "current_outputs")?,
            request.require(kind, "historical_outputs")?,
            request.get("time_window"),
        ),
    };
    Ok(prompt)
}

fn check_required(kind: PromptKind, request: &PromptRequest) -> Result<(), PromptError> {
    for field in kind.required_fields() {
        request.require(kind, field)?;
    }
    if kind == PromptKind::InputSanitization && request.is_empty() {
        return Err(PromptError::EmptyRequest { kind: kind.name().to_string() });
    }
    Ok(())
}

fn vitals_options(request: &PromptRequest) -> VitalsSummaryOptions {
    VitalsSummaryOptions {
        output_format: request
            .get("output_format")
            .map(OutputFormat::parse_or_default)
            .unwrap_or_default(),
        symptoms: request.get("symptoms").map(str::to_string),
        medication_changes: request.get("medication_changes").map(str::to_string),
        provider_notes: request.get("provider_notes").map(str::to_string),
    }
}
