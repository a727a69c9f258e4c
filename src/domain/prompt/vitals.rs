//! Care-manager summaries of patient-reported vital signs.

use std::fmt;

use super::types::{Prompt, optional_line};

const REVIEW_INSTRUCTION: &str = "Please summarize the abnormalities and recommend if further review is needed by the healthcare provider. \
     Include no patient identifiers or sensitive information in your output. ";

/// Shape requested for the model's summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Bullet-point summary. Used for any unrecognized format name.
    #[default]
    Bullet,
    /// Table with one row per abnormal reading.
    Table,
    /// A single JSON object.
    Json,
    /// Subjective / Objective / Assessment / Plan note.
    Soap,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] =
        [OutputFormat::Bullet, OutputFormat::Table, OutputFormat::Json, OutputFormat::Soap];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Bullet => "bullet",
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Soap => "soap",
        }
    }

    /// Parse a recognized format name (case-insensitive).
    pub fn from_name(name: &str) -> Option<OutputFormat> {
        match name.trim().to_lowercase().as_str() {
            "bullet" | "bullets" => Some(OutputFormat::Bullet),
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "soap" => Some(OutputFormat::Soap),
            _ => None,
        }
    }

    /// Parse a format name, falling back to [`OutputFormat::Bullet`] for
    /// anything unrecognized.
    pub fn parse_or_default(name: &str) -> OutputFormat {
        Self::from_name(name).unwrap_or_default()
    }

    /// The closing instruction line for this format.
    pub fn instruction(&self) -> &'static str {
        match self {
            OutputFormat::Bullet => "Provide clear, actionable summary in bullet points.",
            OutputFormat::Table => {
                "Provide the summary as a table with columns: Vital Sign, Reading, Date, Abnormality, Recommended Action."
            }
            OutputFormat::Json => {
                "Provide the summary as a JSON object with keys: abnormalities (array), provider_review_needed (boolean), recommendation (string)."
            }
            OutputFormat::Soap => {
                "Provide the summary in SOAP format with Subjective, Objective, Assessment, and Plan sections."
            }
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options for [`build_vitals_summary_prompt`].
///
/// Optional clinical context is appended only when non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VitalsSummaryOptions {
    pub output_format: OutputFormat,
    pub symptoms: Option<String>,
    pub medication_changes: Option<String>,
    pub provider_notes: Option<String>,
}

impl VitalsSummaryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    pub fn with_symptoms(mut self, symptoms: impl Into<String>) -> Self {
        self.symptoms = Some(symptoms.into());
        self
    }

    pub fn with_medication_changes(mut self, changes: impl Into<String>) -> Self {
        self.medication_changes = Some(changes.into());
        self
    }

    pub fn with_provider_notes(mut self, notes: impl Into<String>) -> Self {
        self.provider_notes = Some(notes.into());
        self
    }
}

/// Bullet-point summary of abnormal vitals for a pseudonymized patient.
///
/// `patient_id` must already be pseudonymized; it is interpolated as given.
pub fn build_basic_vitals_prompt(patient_id: &str, vitals_data: &str, date_range: &str) -> Prompt {
    build_vitals_summary_prompt(patient_id, vitals_data, date_range, &VitalsSummaryOptions::default())
}

/// Summary of abnormal vitals with selectable output shape and optional
/// clinical context.
///
/// With default options the result is identical to
/// [`build_basic_vitals_prompt`].
pub fn build_vitals_summary_prompt(
    patient_id: &str,
    vitals_data: &str,
    date_range: &str,
    options: &VitalsSummaryOptions,
) -> Prompt {
    let mut prompt = format!(
        "Between {date_range}, patient with ID {patient_id} reported the following abnormal vital signs:\n{vitals_data}\n"
    );
    prompt.push_str(&optional_line("Reported symptoms", options.symptoms.as_deref()));
    prompt.push_str(&optional_line("Medication changes", options.medication_changes.as_deref()));
    prompt.push_str(&optional_line("Provider notes", options.provider_notes.as_deref()));
    prompt.push_str(REVIEW_INSTRUCTION);
    prompt.push_str(options.output_format.instruction());
    Prompt::new(prompt)
}
