use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    #[error("missing required field: {}", .0.label())]
    MissingField(Field),
    #[error("a message is already being sent")]
    AlreadySubmitting,
    #[error("message could not be sent: {0}")]
    Send(String),
}

/// The payload handed to whatever delivers the message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// First required field that is empty or whitespace only.
    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    fields: ContactMessage,
    phase: Phase,
    last_error: Option<ContactError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    pub fn last_error(&self) -> Option<&ContactError> {
        self.last_error.as_ref()
    }

    /// Editing the field a missing-field error points at dismisses the error.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
        if self.last_error == Some(ContactError::MissingField(field)) {
            self.last_error = None;
        }
    }

    /// `Editing -> Submitting`. Stays in `Editing` when a field is missing,
    /// recording the error for display, and leaves an in-flight send alone.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::AlreadySubmitting);
        }
        if let Some(field) = self.fields.missing_field() {
            let err = ContactError::MissingField(field);
            self.last_error = Some(err.clone());
            return Err(err);
        }
        self.phase = Phase::Submitting;
        self.last_error = None;
        Ok(self.fields.clone())
    }

    /// `Submitting -> Editing`. A successful send clears every field, a failed
    /// one keeps what the user typed.
    pub fn complete(&mut self, outcome: Result<(), ContactError>) {
        if !self.is_submitting() {
            log::warn!("contact form completed while not submitting");
            return;
        }
        self.phase = Phase::Editing;
        match outcome {
            Ok(()) => self.fields = ContactMessage::default(),
            Err(e) => self.last_error = Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Ada");
        form.set(Field::Email, "ada@example.com");
        form.set(Field::Subject, "Audit");
        form.set(Field::Message, "Can you review our bridge?");
        form
    }

    #[test]
    fn test_submit_round_trip_clears_fields() {
        let mut form = filled();
        assert_eq!(form.phase(), Phase::Editing);

        let msg = form.begin_submit().expect("filled form should submit");
        assert_eq!(form.phase(), Phase::Submitting);
        assert_eq!(msg.name, "Ada");
        assert_eq!(msg.message, "Can you review our bridge?");

        form.complete(Ok(()));
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.fields(), &ContactMessage::default());
        assert!(form.last_error().is_none());
    }

    #[test]
    fn test_empty_field_blocks_submit() {
        for missing in Field::ALL {
            let mut form = filled();
            form.set(missing, "");
            let before = form.fields().clone();
            assert_eq!(
                form.begin_submit(),
                Err(ContactError::MissingField(missing))
            );
            assert_eq!(form.phase(), Phase::Editing);
            assert_eq!(form.fields(), &before);
        }
    }

    #[test]
    fn test_missing_field_error_is_shown_until_fixed() {
        let mut form = filled();
        form.set(Field::Message, "  \n ");
        assert!(form.begin_submit().is_err());
        assert_eq!(
            form.last_error(),
            Some(&ContactError::MissingField(Field::Message))
        );

        // typing elsewhere keeps it, fixing the field clears it
        form.set(Field::Name, "Ada L.");
        assert!(form.last_error().is_some());
        form.set(Field::Message, "Hello");
        assert!(form.last_error().is_none());
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut form = filled();
        form.set(Field::Subject, "   ");
        assert_eq!(
            form.begin_submit(),
            Err(ContactError::MissingField(Field::Subject))
        );
        assert_eq!(form.phase(), Phase::Editing);
    }

    #[test]
    fn test_email_format_not_checked() {
        let mut form = filled();
        form.set(Field::Email, "not-an-email");
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(ContactError::AlreadySubmitting));
        assert!(form.is_submitting());
    }

    #[test]
    fn test_failed_send_keeps_input() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.complete(Err(ContactError::Send("mail service down".to_string())));
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.fields().get(Field::Name), "Ada");
        assert_eq!(
            form.last_error(),
            Some(&ContactError::Send("mail service down".to_string()))
        );

        // the next attempt clears the stale error
        form.begin_submit().unwrap();
        assert!(form.last_error().is_none());
    }

    #[test]
    fn test_complete_without_submit_is_ignored() {
        let mut form = filled();
        form.complete(Ok(()));
        assert_eq!(form.fields().get(Field::Email), "ada@example.com");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingField(Field::Email).to_string(),
            "missing required field: Email"
        );
    }
}
