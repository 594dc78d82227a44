// SPDX-License-Identifier: MPL-2.0
//! Email draft for the community contact page.
//!
//! A message is turned into a `mailto:` link that opens a pre-filled draft
//! in the user's mail client. No validation happens here.

/// Address drafts are sent to unless overridden.
pub const DEFAULT_RECIPIENT: &str = "dylphiiee@gmail.com";

const SUBJECT_PREFIX: &str = "[Lunar Community]";
const SIGNATURE: &str = "Sent from Lunar Community Website";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl MessageDraft {
    /// Builds a draft with surrounding whitespace removed from every field.
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    #[must_use]
    pub fn subject_line(&self) -> String {
        format!("{SUBJECT_PREFIX} {}", self.subject)
    }

    #[must_use]
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nSubject: {}\n\nMessage:\n{}\n\n---\n{SIGNATURE}",
            self.name, self.email, self.subject, self.message
        )
    }

    #[must_use]
    pub fn mailto_link(&self) -> String {
        self.mailto_link_to(DEFAULT_RECIPIENT)
    }

    #[must_use]
    pub fn mailto_link_to(&self, recipient: &str) -> String {
        format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(&self.subject_line()),
            urlencoding::encode(&self.body())
        )
    }
}
