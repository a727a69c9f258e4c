use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PromptError;

/// The catalogued prompt builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptKind {
    BasicVitals,
    VitalsSummary,
    PhiScrub,
    InputSanitization,
    OutputRedaction,
    AccessControl,
    AuditLog,
    ComplianceReview,
    TestCase,
    Regression,
    PeerReview,
    FactCheck,
    BiasSafety,
    DriftDetection,
}

impl PromptKind {
    /// All prompt kinds, clinical summaries first.
    pub const ALL: [PromptKind; 14] = [
        PromptKind::BasicVitals,
        PromptKind::VitalsSummary,
        PromptKind::PhiScrub,
        PromptKind::InputSanitization,
        PromptKind::OutputRedaction,
        PromptKind::AccessControl,
        PromptKind::AuditLog,
        PromptKind::ComplianceReview,
        PromptKind::TestCase,
        PromptKind::Regression,
        PromptKind::PeerReview,
        PromptKind::FactCheck,
        PromptKind::BiasSafety,
        PromptKind::DriftDetection,
    ];

    /// Kebab-case name used on the command line and in config files.
    pub fn name(&self) -> &'static str {
        match self {
            PromptKind::BasicVitals => "basic-vitals",
            PromptKind::VitalsSummary => "vitals-summary",
            PromptKind::PhiScrub => "phi-scrub",
            PromptKind::InputSanitization => "input-sanitization",
            PromptKind::OutputRedaction => "output-redaction",
            PromptKind::AccessControl => "access-control",
            PromptKind::AuditLog => "audit-log",
            PromptKind::ComplianceReview => "compliance-review",
            PromptKind::TestCase => "test-case",
            PromptKind::Regression => "regression",
            PromptKind::PeerReview => "peer-review",
            PromptKind::FactCheck => "fact-check",
            PromptKind::BiasSafety => "bias-safety",
            PromptKind::DriftDetection => "drift-detection",
        }
    }

    /// Parse a kind from its kebab-case or snake_case name, ignoring case.
    pub fn from_name(name: &str) -> Option<PromptKind> {
        let normalized = name.trim().to_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|kind| kind.name() == normalized)
    }

    pub fn description(&self) -> &'static str {
        match self {
            PromptKind::BasicVitals => "Bullet-point summary of abnormal vital signs",
            PromptKind::VitalsSummary => {
                "Abnormal vitals summary with output format and optional clinical context"
            }
            PromptKind::PhiScrub => "Flag identifiable or protected health information in text",
            PromptKind::InputSanitization => "Validate input fields for forbidden patterns",
            PromptKind::OutputRedaction => "Find direct identifiers in model output",
            PromptKind::AccessControl => "Judge an action against least privilege for a role",
            PromptKind::AuditLog => "Confirm a log entry holds no PHI",
            PromptKind::ComplianceReview => "Review a prompt workflow for HIPAA compliance",
            PromptKind::TestCase => "Generate and grade a response for a patient scenario",
            PromptKind::Regression => "Compare current output against approved output",
            PromptKind::PeerReview => "Clinical peer review of a prompt and its output",
            PromptKind::FactCheck => "Fact-check output against authoritative guidelines",
            PromptKind::BiasSafety => "Check output for bias or unsafe recommendations",
            PromptKind::DriftDetection => "Detect drift between current and historical outputs",
        }
    }

    /// Request fields that must be present.
    ///
    /// `input-sanitization` takes the whole field map instead and lists none.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            PromptKind::BasicVitals | PromptKind::VitalsSummary => {
                &["patient_id", "vitals_data", "date_range"]
            }
            PromptKind::PhiScrub => &["text"],
            PromptKind::InputSanitization | PromptKind::ComplianceReview => &[],
            PromptKind::OutputRedaction | PromptKind::FactCheck | PromptKind::BiasSafety => {
                &["model_output"]
            }
            PromptKind::AccessControl => &["user_role"],
            PromptKind::AuditLog => &["log_entry"],
            PromptKind::TestCase => &["scenario", "prompt_text"],
            PromptKind::Regression => &["current_output", "approved_output"],
            PromptKind::PeerReview => &["prompt_and_output"],
            PromptKind::DriftDetection => &["current_outputs", "historical_outputs"],
        }
    }

    /// Request fields that change the prompt only when supplied.
    pub fn optional_fields(&self) -> &'static [&'static str] {
        match self {
            PromptKind::VitalsSummary => {
                &["output_format", "symptoms", "medication_changes", "provider_notes"]
            }
            PromptKind::FactCheck => &["guidelines"],
            PromptKind::DriftDetection => &["time_window"],
            _ => &[],
        }
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PromptKind {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| PromptError::UnknownKind(s.to_string()))
    }
}
