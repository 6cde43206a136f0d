//! Login form state.
//!
//! The form is an immutable value: every keystroke produces a new
//! [`LoginForm`] through [`LoginForm::apply`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::session::LoginOutcome;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid email regex pattern"));

/// Which input has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn other(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

/// User input the form reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormInput {
    Char(char),
    Backspace,
    /// Clear the focused field
    ClearField,
    NextField,
    PrevField,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    /// A login request is in flight; input is ignored until it finishes.
    pub submitting: bool,
    /// Inline error from the last attempt or from validation.
    pub error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form with the email pre-filled and the password focused.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            focus: LoginField::Password,
            ..Self::default()
        }
    }

    /// Apply one input, returning the next form state.
    pub fn apply(self, input: FormInput) -> Self {
        if self.submitting {
            return self;
        }
        match input {
            FormInput::Char(c) if c.is_control() => self,
            FormInput::Char(c) => self.edit_focused(|value| value.push(c)),
            FormInput::Backspace => self.edit_focused(|value| {
                value.pop();
            }),
            FormInput::ClearField => self.edit_focused(String::clear),
            FormInput::NextField | FormInput::PrevField => Self {
                focus: self.focus.other(),
                ..self
            },
        }
    }

    fn edit_focused(self, edit: impl FnOnce(&mut String)) -> Self {
        let Self {
            mut email,
            mut password,
            focus,
            ..
        } = self;
        match focus {
            LoginField::Email => edit(&mut email),
            LoginField::Password => edit(&mut password),
        }
        Self {
            email,
            password,
            focus,
            submitting: false,
            error: None,
        }
    }

    /// Whether both fields are filled in.
    pub fn is_complete(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty()
    }

    /// Loose shape check; the backend decides whether the account exists.
    pub fn email_looks_valid(&self) -> bool {
        EMAIL_REGEX.is_match(self.email.trim())
    }

    /// Start submitting. Incomplete forms get a validation error instead.
    pub fn begin_submit(self) -> Self {
        if self.submitting {
            return self;
        }
        if !self.is_complete() {
            let focus = if self.email.trim().is_empty() {
                LoginField::Email
            } else {
                LoginField::Password
            };
            return Self {
                focus,
                error: Some("Email and password are required.".to_string()),
                ..self
            };
        }
        if !self.email_looks_valid() {
            return Self {
                focus: LoginField::Email,
                error: Some("Enter a valid email address.".to_string()),
                ..self
            };
        }
        Self {
            submitting: true,
            error: None,
            ..self
        }
    }

    /// Fold the result of a login attempt into the form.
    ///
    /// Success resets the form. Failure keeps the email, clears the
    /// password and shows the message inline.
    pub fn finish(self, outcome: &LoginOutcome) -> Self {
        match outcome {
            LoginOutcome::Success => Self::default(),
            LoginOutcome::Failure { error } => Self {
                email: self.email,
                password: String::new(),
                focus: LoginField::Password,
                submitting: false,
                error: Some(error.clone()),
            },
        }
    }

    /// The password as shown on screen.
    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.chars().count())
    }
}
