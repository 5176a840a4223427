use thiserror::Error;

/// A failed validation check. Display strings are user-facing and shown as
/// transient, dismissible notifications; none are fatal, and every one is
/// recoverable by correcting the input and resubmitting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor complete todos los campos obligatorios marcados con *")]
    MissingRequired,

    #[error("El nombre debe tener al menos 2 caracteres y solo contener letras")]
    InvalidName,

    #[error("Por favor ingrese un correo electrónico válido")]
    InvalidEmail,

    #[error("Por favor ingrese un número de teléfono válido")]
    InvalidPhone,

    #[error("El mensaje debe tener al menos 5 caracteres")]
    MessageTooShort,

    #[error("Tipo de solicitud no válido: {0}")]
    InvalidRequestType(String),

    /// The honeypot field was populated. Deliberately reported with a
    /// generic message that does not reveal which check tripped.
    #[error("Validación de seguridad fallida. Por favor, intenta nuevamente.")]
    Honeypot,

    #[error("Por favor ingrese solo números en la operación matemática.")]
    ChallengeNotNumeric,

    #[error("La respuesta de la operación matemática es incorrecta. Por favor, verifica e intenta nuevamente.")]
    ChallengeMismatch,

    #[error("Formulario enviado demasiado rápido. Por favor, tómate tu tiempo para completarlo.")]
    TooFast,

    #[error("La sesión ha expirado. Por favor, recarga la página y vuelve a completar el formulario.")]
    SessionExpired,
}

/// Errors from the outbound lead paths (CRM submission, deep link).
#[derive(Debug, Error)]
pub enum LeadError {
    /// Network failure or non-2xx response from the CRM endpoint.
    #[error("error de envío: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid CRM base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("invalid deep link: {0}")]
    DeepLink(String),
}

/// A failed form submission: either the form did not validate or the
/// transport failed. Transport failures leave the form contents intact so
/// the user can retry; there is no automatic retry or backoff.
#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] LeadError),
}
