//! Lead capture: form validation, anti-bot heuristics, CRM submission, and
//! the WhatsApp quote path.
//!
//! The honeypot, timing window, and arithmetic challenge are deterrence
//! heuristics only. They run entirely on the submitting client, which can
//! inspect the expected answer and the timer, so they raise the cost of
//! casual automation without providing any security guarantee. There is no
//! server-side re-validation layer.

pub mod challenge;
pub mod crm;
pub mod error;
pub mod form;
pub mod guard;
pub mod lead;
pub mod validate;
pub mod whatsapp;

pub use challenge::{Challenge, Operation};
pub use crm::CrmClient;
pub use error::{FormError, LeadError, ValidationError};
pub use form::{FormFields, FormState, LeadForm};
pub use guard::SubmissionGuard;
pub use lead::{CrmSubmission, Lead, ProductContext, RequestType};
pub use whatsapp::{compose_quote_message, quote_deep_link, QuoteContact};
