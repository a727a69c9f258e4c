pub mod dispatch;
pub mod error;
pub mod kind;
pub mod request;
pub mod safeguards;
pub mod template;
pub mod types;
pub mod validation;
pub mod vitals;

pub use dispatch::{PromptDefaults, build_from_request, render_request};
pub use error::PromptError;
pub use kind::PromptKind;
pub use request::PromptRequest;
pub use safeguards::{
    build_access_control_prompt, build_audit_log_prompt, build_compliance_review_prompt,
    build_input_sanitization_prompt, build_output_redaction_prompt, build_phi_scrub_check_prompt,
};
pub use template::{TemplateOverrides, TemplateRenderer};
pub use types::Prompt;
pub use validation::{
    DEFAULT_DRIFT_WINDOW, build_bias_safety_prompt, build_drift_detection_prompt,
    build_fact_check_prompt, build_peer_review_prompt, build_regression_prompt,
    build_test_case_prompt,
};
pub use vitals::{
    OutputFormat, VitalsSummaryOptions, build_basic_vitals_prompt, build_vitals_summary_prompt,
};
