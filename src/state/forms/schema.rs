//! Declarative validation rules for the application form
//!
//! Each field maps to an ordered list of rules; the first failing rule's
//! message is reported. `Required` is the only rule that fires on empty
//! input, so format rules on optional fields accept a blank value.

use super::activities::MAX_ACTIVITIES;
use super::field::FieldId;
use super::interests::MAX_INTERESTS;
use regex::Regex;
use std::sync::LazyLock;

/// Minimum length for the free-text essay answers
pub const MIN_ESSAY_CHARS: usize = 50;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").expect("email pattern is valid")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 ()\-]*[0-9]$").expect("phone pattern is valid"));

/// A value presented to the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    Text(&'a str),
    Flag(bool),
    /// Number of entries in a bounded collection
    Count(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Required,
    MinChars(usize),
    /// At least this many ASCII digits, ignoring separators
    MinDigits(usize),
    Email,
    Phone,
    Count { min: usize, max: usize },
}

impl Constraint {
    /// Whether the candidate satisfies this constraint.
    /// A constraint that does not apply to the candidate's shape passes.
    pub fn check(self, candidate: Candidate<'_>) -> bool {
        match (self, candidate) {
            (Self::Required, Candidate::Text(s)) => !s.trim().is_empty(),
            (Self::Required, Candidate::Count(n)) => n > 0,
            (Self::MinChars(min), Candidate::Text(s)) => {
                let s = s.trim();
                s.is_empty() || s.chars().count() >= min
            }
            (Self::MinDigits(min), Candidate::Text(s)) => {
                let s = s.trim();
                s.is_empty() || s.chars().filter(char::is_ascii_digit).count() >= min
            }
            (Self::Email, Candidate::Text(s)) => {
                let s = s.trim();
                s.is_empty() || EMAIL_PATTERN.is_match(s)
            }
            (Self::Phone, Candidate::Text(s)) => {
                let s = s.trim();
                s.is_empty() || PHONE_PATTERN.is_match(s)
            }
            (Self::Count { min, max }, Candidate::Count(n)) => (min..=max).contains(&n),
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub constraint: Constraint,
    pub message: &'static str,
}

const fn rule(constraint: Constraint, message: &'static str) -> Rule {
    Rule {
        constraint,
        message,
    }
}

const FULL_NAME: &[Rule] = &[
    rule(Constraint::Required, "Full name is required"),
    rule(Constraint::MinChars(2), "Full name must be at least 2 characters"),
];
const EMAIL: &[Rule] = &[
    rule(Constraint::Required, "Email is required"),
    rule(Constraint::Email, "Please enter a valid email address"),
];
const PHONE: &[Rule] = &[
    rule(Constraint::Required, "Phone number is required"),
    rule(Constraint::MinDigits(10), "Phone number must be at least 10 digits"),
    rule(Constraint::Phone, "Please enter a valid phone number"),
];
const CITY: &[Rule] = &[
    rule(Constraint::Required, "City is required"),
    rule(Constraint::MinChars(2), "City must be at least 2 characters"),
];
const COUNTRY: &[Rule] = &[
    rule(Constraint::Required, "Country is required"),
    rule(Constraint::MinChars(2), "Country must be at least 2 characters"),
];
const SCHOOL: &[Rule] = &[
    rule(Constraint::Required, "School is required"),
    rule(Constraint::MinChars(2), "School must be at least 2 characters"),
];
const GRADE: &[Rule] = &[rule(Constraint::Required, "Grade is required")];
const PARENT_NAME: &[Rule] = &[
    rule(Constraint::Required, "Parent name is required"),
    rule(Constraint::MinChars(2), "Parent name must be at least 2 characters"),
];
const PARENT_EMAIL: &[Rule] = &[
    rule(Constraint::Required, "Parent email is required"),
    rule(Constraint::Email, "Please enter a valid email address"),
];
const PARENT_PHONE: &[Rule] = &[
    rule(Constraint::Required, "Parent phone is required"),
    rule(Constraint::MinDigits(10), "Phone number must be at least 10 digits"),
    rule(Constraint::Phone, "Please enter a valid phone number"),
];
const FIELDS_OF_INTEREST: &[Rule] = &[
    rule(
        Constraint::Required,
        "Select at least one field of interest",
    ),
    rule(
        Constraint::Count {
            min: 1,
            max: MAX_INTERESTS,
        },
        "Select no more than 3 fields of interest",
    ),
];
const RESEARCH_INTEREST: &[Rule] = &[
    rule(Constraint::Required, "Research interest is required"),
    rule(
        Constraint::MinChars(MIN_ESSAY_CHARS),
        "Please write at least 50 characters",
    ),
];
const MOTIVATION: &[Rule] = &[
    rule(Constraint::Required, "Motivation is required"),
    rule(
        Constraint::MinChars(MIN_ESSAY_CHARS),
        "Please write at least 50 characters",
    ),
];
const EXTRACURRICULARS: &[Rule] = &[rule(
    Constraint::Count {
        min: 0,
        max: MAX_ACTIVITIES,
    },
    "You can list up to 5 activities",
)];

/// The ordered rule list for a field; optional fields have none
pub fn rules_for(field: FieldId) -> &'static [Rule] {
    match field {
        FieldId::FullName => FULL_NAME,
        FieldId::Email => EMAIL,
        FieldId::Phone => PHONE,
        FieldId::City => CITY,
        FieldId::Country => COUNTRY,
        FieldId::School => SCHOOL,
        FieldId::Grade => GRADE,
        FieldId::ParentName => PARENT_NAME,
        FieldId::ParentEmail => PARENT_EMAIL,
        FieldId::ParentPhone => PARENT_PHONE,
        FieldId::FieldsOfInterest => FIELDS_OF_INTEREST,
        FieldId::ResearchInterest => RESEARCH_INTEREST,
        FieldId::Motivation => MOTIVATION,
        FieldId::Extracurriculars => EXTRACURRICULARS,
        FieldId::Gpa
        | FieldId::Achievements
        | FieldId::FinancialAid
        | FieldId::ReferralSource
        | FieldId::AdditionalInfo => &[],
    }
}

/// Whether a field must be filled in before its section can be left
pub fn is_required(field: FieldId) -> bool {
    rules_for(field)
        .iter()
        .any(|r| r.constraint == Constraint::Required)
}

/// Validate one candidate value, returning the first failing rule's message
pub fn validate(field: FieldId, candidate: Candidate<'_>) -> Result<(), &'static str> {
    match rules_for(field)
        .iter()
        .find(|r| !r.constraint.check(candidate))
    {
        Some(failed) => Err(failed.message),
        None => Ok(()),
    }
}
