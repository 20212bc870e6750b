use super::DomainError;
use super::hackathon::{require, require_short};

/// Unvalidated contact form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl TryFrom<ContactInput> for NewContactMessage {
    type Error = DomainError;

    fn try_from(input: ContactInput) -> Result<Self, Self::Error> {
        Ok(Self {
            name: require_short("name", input.name)?,
            email: require_short("email", input.email)?,
            subject: require_short("subject", input.subject)?,
            message: require("message", input.message)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_are_required() {
        let input = ContactInput {
            name: Some("Ana".to_string()),
            email: Some("ana@example.com".to_string()),
            subject: None,
            message: Some("hola".to_string()),
        };

        assert_eq!(
            NewContactMessage::try_from(input),
            Err(DomainError::MissingField("subject"))
        );
    }

    #[test]
    fn subject_is_bounded_but_message_is_not() {
        let input = ContactInput {
            name: Some("Ana".to_string()),
            email: Some("ana@example.com".to_string()),
            subject: Some("s".repeat(256)),
            message: Some("m".repeat(5000)),
        };
        assert_eq!(
            NewContactMessage::try_from(input.clone()),
            Err(DomainError::TooLong {
                field: "subject",
                max: 255,
            })
        );

        let input = ContactInput {
            subject: Some("Sponsor".to_string()),
            ..input
        };
        assert!(NewContactMessage::try_from(input).is_ok());
    }

    #[test]
    fn fields_are_trimmed() {
        let input = ContactInput {
            name: Some(" Ana ".to_string()),
            email: Some("ana@example.com".to_string()),
            subject: Some("Sponsor".to_string()),
            message: Some("hola\n".to_string()),
        };

        let message = NewContactMessage::try_from(input).expect("input should validate");
        assert_eq!(message.name, "Ana");
        assert_eq!(message.message, "hola");
    }
}
