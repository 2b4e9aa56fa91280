// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contact form model.
//!
//! Where submissions go is up to the caller: [`ContactForm::submit`] hands a
//! [`Submission`] to a [`SubmissionSink`]. [`LogSink`] only logs it.

use alloc::string::String;
use core::fmt;

use tracing::info;

/// A form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Sender's name.
    Name,
    /// Sender's email address.
    Email,
    /// Message body.
    Message,
}

impl Field {
    /// Every field in form order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Field label as shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A completed form, as handed to a [`SubmissionSink`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Submission {
    /// Sender's name.
    pub name: String,
    /// Sender's email address.
    pub email: String,
    /// Message body.
    pub message: String,
}

/// Destination for contact form submissions.
pub trait SubmissionSink {
    /// Delivery failure.
    type Error: core::error::Error;

    /// Delivers one submission.
    fn deliver(&mut self, submission: &Submission) -> Result<(), Self::Error>;
}

/// A sink that logs each submission at `info` level and always succeeds.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    type Error = core::convert::Infallible;

    fn deliver(&mut self, submission: &Submission) -> Result<(), Self::Error> {
        info!(
            name = %submission.name,
            email = %submission.email,
            message_len = submission.message.len(),
            "contact form submitted"
        );
        Ok(())
    }
}

/// Why a submission was not delivered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError<E> {
    /// A required field is blank; the sink was not called.
    Incomplete(Field),
    /// The sink rejected the submission.
    Delivery(E),
}

impl<E: fmt::Display> fmt::Display for SubmitError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete(field) => write!(f, "the {field} field is required"),
            Self::Delivery(err) => write!(f, "could not deliver the message: {err}"),
        }
    }
}

impl<E: core::error::Error + 'static> core::error::Error for SubmitError<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Incomplete(_) => None,
            Self::Delivery(err) => Some(err),
        }
    }
}

/// Field values and focus for the contact form.
///
/// ```
/// use sway_page::{ContactForm, Field, LogSink, SubmitError};
///
/// let mut form = ContactForm::new();
/// form.set(Field::Name, "Ada");
/// form.set(Field::Email, "ada@example.com");
/// assert_eq!(form.submit(&mut LogSink), Err(SubmitError::Incomplete(Field::Message)));
///
/// form.set(Field::Message, "Hello!");
/// let sent = form.submit(&mut LogSink).unwrap();
/// assert_eq!(sent.name, "Ada");
/// assert!(form.get(Field::Name).is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: Submission,
    focused: Option<Field>,
}

impl ContactForm {
    /// An empty form with nothing focused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the value of `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// Current value of `field`.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.values.name,
            Field::Email => &self.values.email,
            Field::Message => &self.values.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.values.name,
            Field::Email => &mut self.values.email,
            Field::Message => &mut self.values.message,
        }
    }

    /// Moves focus to `field`.
    pub fn focus(&mut self, field: Field) {
        self.focused = Some(field);
    }

    /// Clears focus if `field` has it.
    pub fn blur(&mut self, field: Field) {
        if self.focused == Some(field) {
            self.focused = None;
        }
    }

    /// The focused field, if any.
    #[must_use]
    pub fn focused(&self) -> Option<Field> {
        self.focused
    }

    /// First blank field in form order.
    #[must_use]
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
    }

    /// Returns `true` if no field is blank.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        self.values = Submission::default();
    }

    /// Validates the form and hands it to `sink`.
    ///
    /// On success the fields are cleared and the delivered submission is
    /// returned. On failure the fields are kept so the sender can retry.
    pub fn submit<S: SubmissionSink + ?Sized>(
        &mut self,
        sink: &mut S,
    ) -> Result<Submission, SubmitError<S::Error>> {
        if let Some(field) = self.first_missing() {
            return Err(SubmitError::Incomplete(field));
        }
        sink.deliver(&self.values).map_err(SubmitError::Delivery)?;
        Ok(core::mem::take(&mut self.values))
    }
}
