//! Form field identifiers and value objects

use super::section::Section;

/// Every named input of the application, in draft order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    FullName,
    Email,
    Phone,
    City,
    Country,
    School,
    Grade,
    Gpa,
    ParentName,
    ParentEmail,
    ParentPhone,
    FieldsOfInterest,
    ResearchInterest,
    Motivation,
    Extracurriculars,
    Achievements,
    FinancialAid,
    ReferralSource,
    AdditionalInfo,
}

/// How a field is edited and rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Multiline,
    Flag,
    /// Bounded multi-select over the interest vocabulary
    Selection,
    /// Bounded free-text list with its own input buffer
    List,
}

impl FieldId {
    pub const ALL: [FieldId; 19] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::City,
        FieldId::Country,
        FieldId::School,
        FieldId::Grade,
        FieldId::Gpa,
        FieldId::ParentName,
        FieldId::ParentEmail,
        FieldId::ParentPhone,
        FieldId::FieldsOfInterest,
        FieldId::ResearchInterest,
        FieldId::Motivation,
        FieldId::Extracurriculars,
        FieldId::Achievements,
        FieldId::FinancialAid,
        FieldId::ReferralSource,
        FieldId::AdditionalInfo,
    ];

    /// Wire name used in the submitted payload
    pub fn name(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::City => "city",
            Self::Country => "country",
            Self::School => "school",
            Self::Grade => "grade",
            Self::Gpa => "gpa",
            Self::ParentName => "parentName",
            Self::ParentEmail => "parentEmail",
            Self::ParentPhone => "parentPhone",
            Self::FieldsOfInterest => "fieldsOfInterest",
            Self::ResearchInterest => "researchInterest",
            Self::Motivation => "motivation",
            Self::Extracurriculars => "extracurriculars",
            Self::Achievements => "achievements",
            Self::FinancialAid => "financialAid",
            Self::ReferralSource => "referralSource",
            Self::AdditionalInfo => "additionalInfo",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::City => "City",
            Self::Country => "Country",
            Self::School => "School",
            Self::Grade => "Grade",
            Self::Gpa => "GPA (optional)",
            Self::ParentName => "Parent / Guardian Name",
            Self::ParentEmail => "Parent Email",
            Self::ParentPhone => "Parent Phone",
            Self::FieldsOfInterest => "Fields of Interest (up to 3)",
            Self::ResearchInterest => "Describe your research interest",
            Self::Motivation => "Why do you want to join?",
            Self::Extracurriculars => "Add an activity (up to 5)",
            Self::Achievements => "Achievements (optional)",
            Self::FinancialAid => "I am applying for financial aid",
            Self::ReferralSource => "How did you hear about us? (optional)",
            Self::AdditionalInfo => "Anything else? (optional)",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::ResearchInterest | Self::Motivation | Self::Achievements | Self::AdditionalInfo => {
                FieldKind::Multiline
            }
            Self::FinancialAid => FieldKind::Flag,
            Self::FieldsOfInterest => FieldKind::Selection,
            Self::Extracurriculars => FieldKind::List,
            _ => FieldKind::Text,
        }
    }

    pub fn section(self) -> Section {
        Section::ALL
            .into_iter()
            .find(|s| s.fields().contains(&self))
            .unwrap_or_default()
    }

    pub fn is_multiline(self) -> bool {
        self.kind() == FieldKind::Multiline
    }
}

/// Type-safe field values for scalar inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A scalar form input (text, multiline text, or checkbox) and its value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub id: FieldId,
    pub value: FieldValue,
}

impl FormField {
    /// Create an empty field with the value shape its kind calls for.
    /// Selection and list fields are owned by dedicated editors and get `None`.
    pub fn empty(id: FieldId) -> Option<Self> {
        let value = match id.kind() {
            FieldKind::Text | FieldKind::Multiline => FieldValue::Text(String::new()),
            FieldKind::Flag => FieldValue::Flag(false),
            FieldKind::Selection | FieldKind::List => return None,
        };
        Some(Self { id, value })
    }

    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    pub fn is_multiline(&self) -> bool {
        self.id.is_multiline()
    }

    /// Get the text value (empty for flags)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// Get the flag value (false for text fields)
    pub fn as_flag(&self) -> bool {
        match self.value {
            FieldValue::Flag(b) => b,
            FieldValue::Text(_) => false,
        }
    }

    /// Replace the text value; ignored on flags
    pub fn set_text(&mut self, value: impl Into<String>) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value.into();
        }
    }

    pub fn toggle(&mut self) {
        if let FieldValue::Flag(b) = &mut self.value {
            *b = !*b;
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Flag(b) => *b = false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(true) => "[x]".to_string(),
            FieldValue::Flag(false) => "[ ]".to_string(),
        }
    }
}
