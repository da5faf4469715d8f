//! Contact form fields and its (absent) submission handling.
//!
//! The form has no backend. It is rendered without an endpoint and marked
//! with `data-submit="unwired"`; [`SubmitHandler::Unwired`] is the only
//! handler and it never sends anything.

use tracing::debug;

/// How a field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `<input type="text">`
    Text,
    /// `<input type="email">`
    Email,
    /// `<textarea>`
    Multiline {
        /// Visible text lines
        rows: u8,
    },
}

impl FieldKind {
    /// `type` attribute for `<input>` fields, `None` for a textarea.
    pub const fn input_type(self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::Multiline { .. } => None,
        }
    }
}

/// One labelled form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactField {
    /// Used as both `name` and `id`.
    pub name: &'static str,
    /// Label text
    pub label: &'static str,
    /// Control to render
    pub kind: FieldKind,
}

/// Form fields in display order.
pub const CONTACT_FIELDS: [ContactField; 3] = [
    ContactField {
        name: "name",
        label: "姓名",
        kind: FieldKind::Text,
    },
    ContactField {
        name: "email",
        label: "邮箱",
        kind: FieldKind::Email,
    },
    ContactField {
        name: "message",
        label: "留言",
        kind: FieldKind::Multiline { rows: 4 },
    },
];

/// Text of the submit button.
pub const SUBMIT_LABEL: &str = "发送信息";

/// Values a visitor typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    /// `name` field
    pub name: String,
    /// `email` field
    pub email: String,
    /// `message` field
    pub message: String,
}

impl ContactSubmission {
    /// All three fields are filled in.
    pub fn is_complete(&self) -> bool {
        !(self.name.is_empty() || self.email.is_empty() || self.message.is_empty())
    }
}

/// What happens to a submitted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitHandler {
    /// Not implemented yet: no endpoint, nothing is dispatched.
    #[default]
    Unwired,
}

/// Result of [`SubmitHandler::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submission was dropped without any request being made.
    NotWired,
}

impl SubmitHandler {
    /// Form `action`, if the handler has one.
    pub const fn endpoint(self) -> Option<&'static str> {
        match self {
            SubmitHandler::Unwired => None,
        }
    }

    /// Value of the form's `data-submit` attribute.
    pub const fn marker(self) -> &'static str {
        match self {
            SubmitHandler::Unwired => "unwired",
        }
    }

    /// Process a submission. The unwired handler only logs it.
    pub fn handle(self, submission: &ContactSubmission) -> SubmitOutcome {
        match self {
            SubmitHandler::Unwired => {
                debug!(
                    complete = submission.is_complete(),
                    "contact form submitted but no handler is wired"
                );
                SubmitOutcome::NotWired
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_name_email_message() {
        let names: Vec<_> = CONTACT_FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names, ["name", "email", "message"]);
        assert_eq!(CONTACT_FIELDS[1].kind.input_type(), Some("email"));
        assert_eq!(CONTACT_FIELDS[2].kind.input_type(), None);
    }

    #[test]
    fn full_submission_dispatches_nothing() {
        let submission = ContactSubmission {
            name: "张三".into(),
            email: "zhangsan@example.com".into(),
            message: "请联系我".into(),
        };
        assert!(submission.is_complete());

        let handler = SubmitHandler::default();
        assert_eq!(handler.endpoint(), None);
        assert_eq!(handler.handle(&submission), SubmitOutcome::NotWired);
    }

    #[test]
    fn empty_submission_is_incomplete() {
        assert!(!ContactSubmission::default().is_complete());
    }
}
