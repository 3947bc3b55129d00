use crate::domain::ContactError;
use std::time::{Duration, Instant};

/// How long the simulated send takes.
pub const SEND_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
    /// The "Send Message" button.
    Submit,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
        ContactField::Submit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
            ContactField::Submit => "Send Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Your full name",
            ContactField::Email => "your@email.com",
            ContactField::Subject => "What's this about?",
            ContactField::Message => "Tell us more about your inquiry...",
            ContactField::Submit => "",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

/// The contact page form. Sending is simulated.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub focus: ContactField,
    sending_until: Option<Instant>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            focus: ContactField::Name,
            sending_until: None,
        }
    }
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
            ContactField::Submit => "",
        }
    }

    fn focused_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            ContactField::Name => Some(&mut self.name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Subject => Some(&mut self.subject),
            ContactField::Message => Some(&mut self.message),
            ContactField::Submit => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if self.is_sending() {
            return;
        }
        if let Some(value) = self.focused_mut() {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.is_sending() {
            return;
        }
        if let Some(value) = self.focused_mut() {
            value.pop();
        }
    }

    pub fn focus_next(&mut self) {
        let next = (self.focus.position() + 1) % ContactField::ALL.len();
        self.focus = ContactField::ALL[next];
    }

    pub fn focus_previous(&mut self) {
        let len = ContactField::ALL.len();
        let prev = (self.focus.position() + len - 1) % len;
        self.focus = ContactField::ALL[prev];
    }

    pub fn is_sending(&self) -> bool {
        self.sending_until.is_some()
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for field in &ContactField::ALL[..4] {
            if self.value(*field).trim().is_empty() {
                return Err(ContactError::MissingField(field.label()));
            }
        }
        if !self.email.contains('@') {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Starts the simulated send.
    pub fn submit(&mut self, now: Instant) -> Result<(), ContactError> {
        if self.is_sending() {
            return Err(ContactError::AlreadySubmitting);
        }
        self.validate()?;
        tracing::info!(subject = %self.subject, "contact message submitted");
        self.sending_until = Some(now + SEND_DURATION);
        Ok(())
    }

    /// Completes the send once its delay has passed. Returns true exactly
    /// once per submission, after which the form is cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.sending_until {
            Some(until) if now >= until => {
                *self = Self::default();
                true
            }
            _ => false,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.sending_until
    }
}
