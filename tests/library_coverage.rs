use phiprompt::{
    AppError, OutputFormat, PromptError, PromptKind, PromptRequest, VitalsSummaryOptions,
    build_access_control_prompt, build_audit_log_prompt, build_basic_vitals_prompt,
    build_bias_safety_prompt, build_compliance_review_prompt, build_drift_detection_prompt,
    build_fact_check_prompt, build_input_sanitization_prompt, build_output_redaction_prompt,
    build_peer_review_prompt, build_phi_scrub_check_prompt, build_regression_prompt,
    build_test_case_prompt, build_vitals_summary_prompt, demo_prompts, list_prompts,
    load_config_at, parse_config, render_prompt, render_prompt_with_config,
};
use proptest::prelude::*;
use tempfile::TempDir;

#[test]
fn typed_and_named_rendering_agree() {
    let request = PromptRequest::new()
        .with_field("patient_id", "Pt98765")
        .with_field("vitals_data", "BP 145/90")
        .with_field("date_range", "May 1-7")
        .with_field("output_format", "soap")
        .with_field("provider_notes", "recheck in 2 weeks");

    let named = render_prompt(PromptKind::VitalsSummary, &request).unwrap();
    let typed = build_vitals_summary_prompt(
        "Pt98765",
        "BP 145/90",
        "May 1-7",
        &VitalsSummaryOptions::new()
            .with_output_format(OutputFormat::Soap)
            .with_provider_notes("recheck in 2 weeks"),
    );

    assert_eq!(named, typed);
}

#[test]
fn unknown_output_format_renders_bullets() {
    let request = PromptRequest::new()
        .with_field("patient_id", "Pt1")
        .with_field("vitals_data", "HR 120")
        .with_field("date_range", "today")
        .with_field("output_format", "yaml");

    let prompt = render_prompt(PromptKind::VitalsSummary, &request).unwrap();

    assert_eq!(prompt, build_basic_vitals_prompt("Pt1", "HR 120", "today"));
}

#[test]
fn config_lifecycle_through_public_api() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("phiprompt.toml");
    std::fs::write(
        &path,
        r#"
[defaults]
guidelines = "AHA/ACC hypertension guidelines"

[templates]
vitals-summary = """
Patient {{ patient_id }} ({{ date_range }}):
{{ vitals_data }}
{{ optional_line('Reported symptoms', symptoms) }}Format: {{ output_format or 'bullet' }}"""
"#,
    )
    .unwrap();

    let config = load_config_at(&path).unwrap();

    let fact_check = render_prompt_with_config(
        PromptKind::FactCheck,
        &PromptRequest::new().with_field("model_output", "BP 145/90 needs no follow-up."),
        &config,
    )
    .unwrap();
    assert!(fact_check.as_str().contains("(e.g., AHA/ACC hypertension guidelines)"));

    let vitals = render_prompt_with_config(
        PromptKind::VitalsSummary,
        &PromptRequest::new()
            .with_field("patient_id", "Pt98765")
            .with_field("vitals_data", "BP 145/90")
            .with_field("date_range", "May 1-7"),
        &config,
    )
    .unwrap();
    assert_eq!(vitals.as_str(), "Patient Pt98765 (May 1-7):\nBP 145/90\nFormat: bullet");
}

#[test]
fn override_referencing_unknown_field_fails_to_render() {
    let config = parse_config("[templates]\naccess-control = \"Role: {{ role }}\"\n").unwrap();

    let err = render_prompt_with_config(
        PromptKind::AccessControl,
        &PromptRequest::new().with_field("user_role", "nurse"),
        &config,
    )
    .unwrap_err();

    assert!(matches!(err, AppError::Prompt(PromptError::TemplateRender { .. })));
}

#[test]
fn catalog_and_demo_cover_every_kind() {
    let listed: Vec<_> = list_prompts().into_iter().map(|s| s.kind).collect();
    let demoed: Vec<_> = demo_prompts().into_iter().map(|o| o.kind).collect();

    assert_eq!(listed, PromptKind::ALL.to_vec());
    assert_eq!(demoed, PromptKind::ALL.to_vec());
}

#[test]
fn access_control_example() {
    let prompt = build_access_control_prompt("nurse");

    assert!(prompt.as_str().contains("role (nurse)"));
    assert!(prompt.as_str().contains("least privilege"));
}

fn build_all(a: &str, b: &str) -> Vec<String> {
    vec![
        build_basic_vitals_prompt(a, b, a).into_string(),
        build_vitals_summary_prompt(
            a,
            b,
            a,
            &VitalsSummaryOptions::new().with_symptoms(b).with_output_format(OutputFormat::Json),
        )
        .into_string(),
        build_phi_scrub_check_prompt(a).into_string(),
        build_input_sanitization_prompt([(a, b)]).into_string(),
        build_output_redaction_prompt(a).into_string(),
        build_access_control_prompt(a).into_string(),
        build_audit_log_prompt(a).into_string(),
        build_compliance_review_prompt().into_string(),
        build_test_case_prompt(a, b).into_string(),
        build_regression_prompt(a, b).into_string(),
        build_peer_review_prompt(a).into_string(),
        build_fact_check_prompt(a, Some(b)).into_string(),
        build_bias_safety_prompt(a).into_string(),
        build_drift_detection_prompt(a, b, Some(b)).into_string(),
    ]
}

proptest! {
    #[test]
    fn every_builder_is_idempotent(a in ".*", b in ".*") {
        prop_assert_eq!(build_all(&a, &b), build_all(&a, &b));
    }

    #[test]
    fn output_grows_linearly_with_input(a in ".{0,64}", b in ".{0,64}") {
        for prompt in build_all(&a, &b) {
            prop_assert!(prompt.len() <= 1024 + 8 * (a.len() + b.len()));
        }
    }
}
