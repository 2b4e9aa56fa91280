// Copyright 2025 the Sway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact form submission.
//!
//! Fills the contact form, submits it once with a field missing and once
//! complete. Submissions are delivered to a JSON outbox on stdout.
//!
//! Run:
//! - `RUST_LOG=info cargo run -p sway_demos --example contact_form`

use sway_demos::init_tracing;
use sway_page::{ContactForm, Field, LogSink, Submission, SubmissionSink};

/// Prints each submission as a JSON line.
struct JsonOutbox;

impl SubmissionSink for JsonOutbox {
    type Error = serde_json::Error;

    fn deliver(&mut self, submission: &Submission) -> Result<(), Self::Error> {
        println!("{}", serde_json::to_string(submission)?);
        Ok(())
    }
}

fn main() {
    init_tracing();

    let mut form = ContactForm::new();
    form.focus(Field::Name);
    form.set(Field::Name, "Ada Lovelace");
    form.blur(Field::Name);
    form.focus(Field::Email);
    form.set(Field::Email, "ada@example.com");
    form.blur(Field::Email);

    match form.submit(&mut JsonOutbox) {
        Ok(sent) => eprintln!("sent message from {}", sent.name),
        Err(err) => eprintln!("not sent: {err}"),
    }

    form.set(Field::Message, "Would love to talk about parallax.");
    match form.submit(&mut JsonOutbox) {
        Ok(sent) => eprintln!("sent message from {}", sent.name),
        Err(err) => eprintln!("not sent: {err}"),
    }
    assert!(form.get(Field::Name).is_empty());

    // The logging sink never fails.
    form.set(Field::Name, "Grace");
    form.set(Field::Email, "grace@example.com");
    form.set(Field::Message, "Hello!");
    match form.submit(&mut LogSink) {
        Ok(sent) => eprintln!("logged message from {}", sent.name),
        Err(err) => eprintln!("not logged: {err}"),
    }
}
