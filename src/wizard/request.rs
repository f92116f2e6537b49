//! Paper request collected before generation starts.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::ReferenceStyle;

/// Target length of the paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperLength {
    /// Short paper
    Short,
    /// Medium paper
    #[default]
    Medium,
    /// Long paper
    Long,
}

/// Kind of paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperType {
    /// Literature review
    #[default]
    Review,
    /// Experimental study
    Experimental,
    /// Conceptual or theoretical paper
    Conceptual,
}

/// Everything the backend needs to generate a paper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRequest {
    /// Research topic
    pub topic: String,

    /// Keywords to steer generation
    pub keywords: Vec<String>,

    /// Target length
    pub length: PaperLength,

    /// Academic field
    pub academic_field: Option<String>,

    /// Kind of paper
    pub paper_type: PaperType,

    /// Citation style
    pub reference_style: ReferenceStyle,

    /// Intended readers
    pub target_audience: Option<String>,

    /// Free-form guidelines passed through to the backend
    pub guidelines: Option<String>,

    /// Standard sections, generated first
    pub required_sections: Vec<String>,

    /// User-defined sections, generated after the required ones
    pub custom_sections: Vec<String>,
}

impl PaperRequest {
    /// Create a request for a topic.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Default::default()
        }
    }

    /// Set keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set the target length.
    pub fn with_length(mut self, length: PaperLength) -> Self {
        self.length = length;
        self
    }

    /// Set the academic field.
    pub fn with_academic_field(mut self, field: impl Into<String>) -> Self {
        self.academic_field = Some(field.into());
        self
    }

    /// Set the paper type.
    pub fn with_paper_type(mut self, paper_type: PaperType) -> Self {
        self.paper_type = paper_type;
        self
    }

    /// Set the reference style.
    pub fn with_reference_style(mut self, style: ReferenceStyle) -> Self {
        self.reference_style = style;
        self
    }

    /// Set the target audience.
    pub fn with_target_audience(mut self, audience: impl Into<String>) -> Self {
        self.target_audience = Some(audience.into());
        self
    }

    /// Set additional guidelines.
    pub fn with_guidelines(mut self, guidelines: impl Into<String>) -> Self {
        self.guidelines = Some(guidelines.into());
        self
    }

    /// Set the required sections.
    pub fn with_required_sections<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_sections = sections.into_iter().map(Into::into).collect();
        self
    }

    /// Set the custom sections.
    pub fn with_custom_sections<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_sections = sections.into_iter().map(Into::into).collect();
        self
    }

    /// Check that the request can start a generation run.
    pub fn validate(&self) -> Result<()> {
        if self.topic.trim().is_empty() {
            return Err(Error::InvalidRequest("topic must not be empty".to_string()));
        }
        if self.section_order().is_empty() {
            return Err(Error::InvalidRequest(
                "at least one section (required or custom) must be selected".to_string(),
            ));
        }
        Ok(())
    }

    /// Sections in generation order: required, then custom.
    ///
    /// Names are trimmed; blank names and case-insensitive duplicates are
    /// dropped, keeping the first occurrence.
    pub fn section_order(&self) -> Vec<String> {
        let mut order: Vec<String> = Vec::new();
        for name in self.required_sections.iter().chain(&self.custom_sections) {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            if order.iter().any(|s| s.eq_ignore_ascii_case(name)) {
                continue;
            }
            order.push(name.to_string());
        }
        order
    }
}
