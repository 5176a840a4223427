//! The lead-form controller: owns the field values, the challenge, the
//! anti-bot guard, and the submission state machine.

use std::time::Duration;

use crate::challenge::Challenge;
use crate::crm::CrmClient;
use crate::error::{FormError, ValidationError};
use crate::guard::SubmissionGuard;
use crate::lead::{Lead, ProductContext};
use crate::validate::{validate_email, validate_message, validate_name, validate_phone};

/// Per-form lifecycle. `Failed` is not terminal: any edit returns the form
/// to `Editing`. While `Submitting`, the caller must not start a second
/// concurrent submission from the same form (the UI disables the submit
/// control); the in-flight request has no cancel path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Editing,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Raw field values as typed by the visitor.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub request_type: String,
    pub equipment: String,
    pub message: String,
    /// Hidden product metadata when quoting a specific catalog item.
    pub product: Option<ProductContext>,
}

/// A contact/quote form instance.
pub struct LeadForm {
    fields: FormFields,
    honeypot: String,
    challenge: Challenge,
    challenge_input: String,
    guard: SubmissionGuard,
    state: FormState,
    source: String,
}

impl LeadForm {
    /// Opens a fresh form: new challenge, timer started, state `Editing`.
    /// `source` is the provenance tag reported to the CRM, e.g.
    /// `"Web Principal - Consulta General"`.
    #[must_use]
    pub fn open(source: &str) -> Self {
        LeadForm {
            fields: FormFields::default(),
            honeypot: String::new(),
            challenge: Challenge::generate(),
            challenge_input: String::new(),
            guard: SubmissionGuard::new(),
            state: FormState::Editing,
            source: source.to_string(),
        }
    }

    /// Opens a form whose timer reads as started `elapsed` ago. Used in
    /// tests to exercise the timing window without sleeping.
    #[must_use]
    pub fn open_backdated(source: &str, elapsed: Duration) -> Self {
        let mut form = Self::open(source);
        form.guard = SubmissionGuard::backdated(elapsed);
        form
    }

    #[must_use]
    pub fn state(&self) -> FormState {
        self.state
    }

    #[must_use]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Mutable access to the fields; any edit returns the form to `Editing`.
    pub fn fields_mut(&mut self) -> &mut FormFields {
        self.state = FormState::Editing;
        &mut self.fields
    }

    #[must_use]
    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    pub fn set_challenge_input(&mut self, input: &str) {
        self.state = FormState::Editing;
        self.challenge_input = input.to_string();
    }

    /// Only automation ever writes here; the field is invisible to visitors.
    pub fn set_honeypot(&mut self, value: &str) {
        self.honeypot = value.to_string();
    }

    /// Runs the full validation pass: required-field presence, anti-bot
    /// guard, challenge, then field formats. On a challenge failure the
    /// challenge is regenerated so a stale answer cannot be replayed.
    ///
    /// # Errors
    ///
    /// Returns the first failing check's [`ValidationError`]; the form
    /// returns to `Editing` and its contents are preserved.
    pub fn validate(&mut self) -> Result<Lead, ValidationError> {
        self.state = FormState::Validating;
        match self.run_checks() {
            Ok(lead) => Ok(lead),
            Err(err) => {
                if matches!(
                    err,
                    ValidationError::ChallengeMismatch | ValidationError::ChallengeNotNumeric
                ) {
                    self.challenge = Challenge::generate();
                    self.challenge_input.clear();
                }
                self.state = FormState::Editing;
                Err(err)
            }
        }
    }

    fn run_checks(&self) -> Result<Lead, ValidationError> {
        let name = self.fields.name.trim();
        let email = self.fields.email.trim();
        let phone = self.fields.phone.trim();
        let message = self.fields.message.trim();

        if name.is_empty()
            || email.is_empty()
            || phone.is_empty()
            || self.fields.request_type.is_empty()
            || message.is_empty()
        {
            return Err(ValidationError::MissingRequired);
        }

        self.guard.check(&self.honeypot)?;
        self.challenge.verify(&self.challenge_input)?;

        validate_email(email)?;
        validate_phone(phone)?;
        validate_name(name)?;
        validate_message(message)?;

        let request_type = self.fields.request_type.parse()?;

        let optional = |value: &str| {
            let value = value.trim();
            if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        };

        Ok(Lead {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            company: optional(&self.fields.company),
            request_type,
            equipment: optional(&self.fields.equipment),
            message: message.to_string(),
            product: self.fields.product.clone(),
            source: self.source.clone(),
        })
    }

    /// Validates and submits the lead. On transport success the form resets
    /// (new challenge, new timer, cleared fields); on transport failure the
    /// contents stay intact for a user-driven retry.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Validation`] if the form does not validate and
    /// [`FormError::Transport`] if the CRM request fails.
    pub async fn submit(
        &mut self,
        client: &CrmClient,
        page_uri: &str,
        page_name: &str,
    ) -> Result<(), FormError> {
        let lead = self.validate()?;
        self.state = FormState::Submitting;

        match client.submit(&lead.to_submission(page_uri, page_name)).await {
            Ok(()) => {
                self.state = FormState::Succeeded;
                self.reset();
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "lead submission failed, form preserved for retry");
                self.state = FormState::Failed;
                Err(err.into())
            }
        }
    }

    /// Clears the fields and starts a fresh session (new challenge, new
    /// timer).
    pub fn reset(&mut self) {
        self.fields = FormFields::default();
        self.honeypot.clear();
        self.challenge = Challenge::generate();
        self.challenge_input.clear();
        self.guard.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A form with valid field values, a correct challenge answer, and a
    /// timer inside the accepted window.
    fn filled_form() -> LeadForm {
        let mut form = LeadForm::open_backdated("Prueba", Duration::from_secs(10));
        let answer = form.challenge().expected().to_string();
        {
            let fields = form.fields_mut();
            fields.name = "María López".to_string();
            fields.email = "maria@hospital.mx".to_string();
            fields.phone = "55 1234 5678 90".to_string();
            fields.request_type = "cotizacion".to_string();
            fields.message = "Cotización de válvula de alivio".to_string();
        }
        form.set_challenge_input(&answer);
        form
    }

    #[test]
    fn open_starts_in_editing() {
        let form = LeadForm::open("Prueba");
        assert_eq!(form.state(), FormState::Editing);
        assert!(form.fields().name.is_empty());
    }

    #[test]
    fn fully_valid_form_produces_a_lead() {
        let mut form = filled_form();
        let lead = form.validate().expect("form should validate");
        assert_eq!(lead.name, "María López");
        assert_eq!(lead.source, "Prueba");
        assert!(lead.company.is_none());
    }

    #[test]
    fn missing_required_field_fails_first() {
        let mut form = filled_form();
        form.fields_mut().email.clear();
        // Even with a tripped honeypot, the presence check reports first.
        form.set_honeypot("bot");
        assert_eq!(form.validate(), Err(ValidationError::MissingRequired));
        assert_eq!(form.state(), FormState::Editing);
    }

    #[test]
    fn honeypot_rejects_otherwise_valid_form() {
        let mut form = filled_form();
        form.set_honeypot("http://spam.example");
        assert_eq!(form.validate(), Err(ValidationError::Honeypot));
    }

    #[test]
    fn too_fast_submission_is_rejected() {
        let mut form = LeadForm::open_backdated("Prueba", Duration::from_secs(3));
        let answer = form.challenge().expected().to_string();
        {
            let fields = form.fields_mut();
            fields.name = "María López".to_string();
            fields.email = "maria@hospital.mx".to_string();
            fields.phone = "5512345678".to_string();
            fields.request_type = "servicio".to_string();
            fields.message = "Servicio preventivo".to_string();
        }
        form.set_challenge_input(&answer);
        assert_eq!(form.validate(), Err(ValidationError::TooFast));
    }

    #[test]
    fn stale_session_is_rejected() {
        let mut form = filled_form();
        form.guard = SubmissionGuard::backdated(Duration::from_secs(2000));
        assert_eq!(form.validate(), Err(ValidationError::SessionExpired));
    }

    #[test]
    fn challenge_mismatch_regenerates_the_challenge() {
        let mut form = filled_form();
        let before = form.challenge().question();
        form.set_challenge_input("99999");
        assert_eq!(form.validate(), Err(ValidationError::ChallengeMismatch));
        // Regeneration may produce the same operands by chance, but the
        // typed answer is always cleared.
        assert!(form.challenge_input.is_empty());
        let _ = before;
    }

    #[test]
    fn invalid_field_formats_are_reported() {
        let mut form = filled_form();
        let answer = form.challenge().expected().to_string();
        form.fields_mut().email = "no-es-correo".to_string();
        form.set_challenge_input(&answer);
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));

        let mut form = filled_form();
        let answer = form.challenge().expected().to_string();
        form.fields_mut().name = "X1".to_string();
        form.set_challenge_input(&answer);
        assert_eq!(form.validate(), Err(ValidationError::InvalidName));
    }

    #[test]
    fn unknown_request_type_is_reported() {
        let mut form = filled_form();
        let answer = form.challenge().expected().to_string();
        form.fields_mut().request_type = "otro".to_string();
        form.set_challenge_input(&answer);
        assert!(matches!(
            form.validate(),
            Err(ValidationError::InvalidRequestType(_))
        ));
    }

    #[test]
    fn reset_clears_fields_and_restarts_session() {
        let mut form = filled_form();
        form.reset();
        assert!(form.fields().name.is_empty());
        assert!(form.challenge_input.is_empty());
        assert!(form.guard.elapsed() < Duration::from_secs(1));
    }
}
