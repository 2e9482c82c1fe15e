//! Contact form model and validation.

use garde::Validate;
use serde::{Deserialize, Serialize};

use super::error::ContactError;

/// Reasons offered by the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactReason {
    /// General information request.
    Informacion,
    /// Commercial enquiry.
    Comercial,
    /// Invoice request.
    Factura,
    /// Job application.
    Curriculum,
    /// Website error report.
    Error,
    /// Anything else.
    Otro,
}

impl ContactReason {
    /// All accepted reasons.
    pub const ALL: [Self; 6] = [
        Self::Informacion,
        Self::Comercial,
        Self::Factura,
        Self::Curriculum,
        Self::Error,
        Self::Otro,
    ];

    /// Returns the form value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Informacion => "informacion",
            Self::Comercial => "comercial",
            Self::Factura => "factura",
            Self::Curriculum => "curriculum",
            Self::Error => "error",
            Self::Otro => "otro",
        }
    }

    /// Parse from the form value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|reason| reason.as_str() == s)
    }

    /// Returns true if submissions with this reason must carry a file.
    #[must_use]
    pub const fn requires_attachment(&self) -> bool {
        matches!(self, Self::Factura | Self::Curriculum)
    }
}

/// A contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ContactForm {
    /// Visitor name: letters and spaces only.
    #[garde(custom(valid_name))]
    pub name: String,
    /// Selected reason.
    #[garde(custom(valid_reason))]
    pub reason: String,
    /// Visitor email address.
    #[garde(email)]
    pub email: String,
    /// Free-text message.
    #[garde(custom(valid_message))]
    pub message: String,
}

impl ContactForm {
    /// Validates every field and the attachment requirement.
    ///
    /// Returns the parsed reason on success.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidField` for the first invalid field, or
    /// `ContactError::AttachmentRequired` when the reason needs a file and
    /// none was sent.
    pub fn check(&self, has_attachment: bool) -> Result<ContactReason, ContactError> {
        if let Err(report) = self.validate() {
            let detail = report.iter().next().map_or_else(
                || report.to_string(),
                |(path, error)| field_message(&path.to_string(), error.message()),
            );
            return Err(ContactError::InvalidField(detail));
        }

        let reason = ContactReason::parse(&self.reason)
            .ok_or_else(|| ContactError::InvalidField(unknown_reason_message()))?;

        if reason.requires_attachment() && !has_attachment {
            return Err(ContactError::AttachmentRequired);
        }

        Ok(reason)
    }
}

fn field_message(field: &str, message: &str) -> String {
    match field {
        "email" => "El correo electrónico no es válido".to_string(),
        _ => message.to_string(),
    }
}

fn unknown_reason_message() -> String {
    let allowed = ContactReason::ALL
        .iter()
        .map(ContactReason::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Motivo no válido. Se permiten: {allowed}")
}

fn valid_name(value: &str, _ctx: &()) -> garde::Result {
    if value.trim().is_empty() {
        return Err(garde::Error::new("El nombre es obligatorio"));
    }
    if !value.chars().all(|c| c.is_alphabetic() || c.is_whitespace()) {
        return Err(garde::Error::new(
            "El nombre solo debe contener letras y espacios",
        ));
    }
    Ok(())
}

fn valid_reason(value: &str, _ctx: &()) -> garde::Result {
    if ContactReason::parse(value).is_none() {
        return Err(garde::Error::new(unknown_reason_message()));
    }
    Ok(())
}

fn valid_message(value: &str, _ctx: &()) -> garde::Result {
    if value.trim().is_empty() {
        return Err(garde::Error::new("El mensaje es obligatorio"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn form(name: &str, reason: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            reason: reason.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn valid() -> ContactForm {
        form("José Ñúñez", "informacion", "jose@example.com", "Hola")
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(valid().check(false).unwrap(), ContactReason::Informacion);
    }

    #[rstest]
    #[case::digits("Ana 2")]
    #[case::punctuation("Ana-María")]
    #[case::markup("<b>Ana</b>")]
    fn test_name_charset(#[case] name: &str) {
        let err = ContactForm {
            name: name.to_string(),
            ..valid()
        }
        .check(false)
        .unwrap_err();
        assert_eq!(
            err,
            ContactError::InvalidField("El nombre solo debe contener letras y espacios".into())
        );
    }

    #[test]
    fn test_blank_name() {
        let err = ContactForm {
            name: "   ".to_string(),
            ..valid()
        }
        .check(false)
        .unwrap_err();
        assert_eq!(
            err,
            ContactError::InvalidField("El nombre es obligatorio".into())
        );
    }

    #[test]
    fn test_unknown_reason() {
        let err = ContactForm {
            reason: "invoice".to_string(),
            ..valid()
        }
        .check(true)
        .unwrap_err();
        assert!(err.to_string().starts_with("Motivo no válido"));
    }

    #[test]
    fn test_bad_email() {
        let err = ContactForm {
            email: "not-an-email".to_string(),
            ..valid()
        }
        .check(false)
        .unwrap_err();
        assert_eq!(
            err,
            ContactError::InvalidField("El correo electrónico no es válido".into())
        );
    }

    #[test]
    fn test_empty_message() {
        let err = ContactForm {
            message: "\n ".to_string(),
            ..valid()
        }
        .check(false)
        .unwrap_err();
        assert_eq!(
            err,
            ContactError::InvalidField("El mensaje es obligatorio".into())
        );
    }

    #[test]
    fn test_long_fields_accepted() {
        let f = ContactForm {
            name: "Ana ".repeat(60).trim_end().to_string(),
            message: "m".repeat(20_000),
            ..valid()
        };
        assert!(f.check(false).is_ok());
    }

    #[rstest]
    #[case("factura", false, false)]
    #[case("factura", true, true)]
    #[case("curriculum", false, false)]
    #[case("curriculum", true, true)]
    #[case("comercial", false, true)]
    #[case("error", false, true)]
    fn test_attachment_requirement(
        #[case] reason: &str,
        #[case] has_attachment: bool,
        #[case] ok: bool,
    ) {
        let result = ContactForm {
            reason: reason.to_string(),
            ..valid()
        }
        .check(has_attachment);
        assert_eq!(result.is_ok(), ok);
        if !ok {
            assert_eq!(result.unwrap_err(), ContactError::AttachmentRequired);
        }
    }

    #[test]
    fn test_reason_round_trip() {
        for reason in ContactReason::ALL {
            assert_eq!(ContactReason::parse(reason.as_str()), Some(reason));
        }
        assert_eq!(ContactReason::parse("Factura"), None);
    }

    #[test]
    fn test_error_converts_to_validation() {
        let err: paraiso_shared::AppError = ContactError::AttachmentRequired.into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(
            err.detail(),
            "Se requiere adjuntar un archivo debido al motivo seleccionado"
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Names made of letters and inner spaces are always accepted.
        #[test]
        fn prop_letter_names_accepted(name in "[a-zA-ZáéíóúñÑ]{1,20}( [a-zA-ZáéíóúñÑ]{1,20}){0,3}") {
            let f = ContactForm { name, ..valid() };
            prop_assert!(f.check(false).is_ok());
        }

        /// Any digit in the name is rejected.
        #[test]
        fn prop_digit_in_name_rejected(prefix in "[a-z]{0,10}", digit in 0u8..10, suffix in "[a-z]{0,10}") {
            let f = ContactForm { name: format!("{prefix}{digit}{suffix}"), ..valid() };
            prop_assert!(f.check(false).is_err());
        }
    }
}
