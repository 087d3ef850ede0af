//! Application form domain layer
//!
//! Field definitions, the declarative validation schema, the bounded
//! editors for activities and interests, and the wizard that owns them.

mod activities;
mod draft;
mod field;
mod interests;
pub mod schema;
mod section;
mod wizard;

pub use activities::{AddOutcome, MAX_ACTIVITIES};
pub use draft::{ApplicationDraft, SubmissionReceipt};
pub use field::{FieldId, FieldKind, FormField};
pub use interests::{ToggleOutcome, INTEREST_VOCABULARY, MAX_INTERESTS};
pub use section::{Section, TAB_GAP};
pub use wizard::{
    ApplicationWizard, Focus, SubmissionStatus, SubmitRejection, Transition, WizardAction,
};

#[cfg(test)]
pub(crate) use wizard::tests::{filled_wizard, wizard_on_additional};
