//! Password form - holds the current input and re-renders on change.

use secrecy::{ExposeSecret, SecretString};

use crate::config::FormConfig;
use crate::error::FormError;
use crate::evaluator::{evaluate_password, Evaluation};
use crate::render::render_page;

/// Output of one change-handler run.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedForm {
    /// Full page markup.
    pub html: String,
    /// `None` while the input is empty and the panel hidden.
    pub evaluation: Option<Evaluation>,
}

/// Single-input password form.
///
/// # Example
///
/// ```rust
/// use pwd_meter::{FormConfig, PasswordForm, StrengthTier};
/// use secrecy::SecretString;
///
/// let mut form = PasswordForm::new(FormConfig::default());
/// let rendered = form
///     .on_input(SecretString::new("Password1!".to_string().into()))
///     .expect("render into String");
///
/// let evaluation = rendered.evaluation.expect("panel shown");
/// assert_eq!(evaluation.tier(), StrengthTier::Strong);
/// ```
#[derive(Debug)]
pub struct PasswordForm {
    config: FormConfig,
    input: SecretString,
}

impl Default for PasswordForm {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl PasswordForm {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            input: empty_secret(),
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Evaluation of the current input, `None` when empty.
    pub fn evaluation(&self) -> Option<Evaluation> {
        if self.input.expose_secret().is_empty() {
            return None;
        }
        Some(evaluate_password(&self.input))
    }

    /// Change handler: stores the new value, then evaluates and renders.
    pub fn on_input(&mut self, value: SecretString) -> Result<RenderedForm, FormError> {
        self.input = value;
        self.render()
    }

    /// Clears the input, hiding the panel.
    pub fn clear(&mut self) -> Result<RenderedForm, FormError> {
        self.on_input(empty_secret())
    }

    /// Renders the page for the current input.
    pub fn render(&self) -> Result<RenderedForm, FormError> {
        let evaluation = self.evaluation();
        let mut html = String::new();
        render_page(&mut html, &self.config, evaluation.as_ref())?;
        Ok(RenderedForm { html, evaluation })
    }
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new().into())
}
