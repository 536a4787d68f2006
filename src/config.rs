//! Page copy for the password form.

/// Strings rendered around the evaluation panel.
///
/// `Default` gives the stock copy; use the `with_*` methods to override
/// individual fields.
///
/// # Example
///
/// ```rust
/// use pwd_meter::FormConfig;
///
/// let config = FormConfig::default().with_title("Check your password");
/// assert_eq!(config.title, "Check your password");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Browser tab title.
    pub page_title: String,
    /// Page heading.
    pub title: String,
    pub description: String,
    pub input_label: String,
    pub placeholder: String,
    pub help_text: String,
    pub footer: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            page_title: "Password Strength Analyzer".to_string(),
            title: "🔒 Password Strength Analyzer".to_string(),
            description: "Check how secure your password is and get instant feedback for improvement"
                .to_string(),
            input_label: "Enter your password".to_string(),
            placeholder: "Type your password here...".to_string(),
            help_text: "We don't store your password. It's checked locally in your browser."
                .to_string(),
            footer: "🔒 Your password is processed locally and never stored".to_string(),
        }
    }
}

impl FormConfig {
    pub fn with_page_title(mut self, page_title: impl Into<String>) -> Self {
        self.page_title = page_title.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_input_label(mut self, label: impl Into<String>) -> Self {
        self.input_label = label.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = help_text.into();
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }
}
