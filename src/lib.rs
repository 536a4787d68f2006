//! Password strength checklist form
//!
//! This library checks a password against six fixed requirements and
//! renders a single-page form with a strength bar, a checklist and a
//! feedback card. Everything runs locally; the password is never stored
//! or written into the rendered markup.
//!
//! # Features
//!
//! - `async` (default): Enables the channel-driven input session
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{evaluate_password, StrengthTier};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("qwerty123".to_string().into());
//! let evaluation = evaluate_password(&password);
//!
//! assert_eq!(evaluation.score().value(), 3);
//! assert_eq!(evaluation.tier(), StrengthTier::Moderate);
//! println!("Bar width: {:.2}%", evaluation.percent());
//! ```

// Internal modules
mod config;
mod error;
mod evaluator;
mod form;
mod render;
mod sections;
#[cfg(feature = "async")]
mod session;
mod types;

// Public API
pub use config::FormConfig;
pub use error::FormError;
pub use evaluator::{evaluate_password, Evaluation, RequirementResult};
pub use form::{PasswordForm, RenderedForm};
pub use render::{render_footer, render_input, render_page, render_panel};
pub use sections::{Requirement, COMMON_PATTERNS, MIN_LENGTH, REQUIREMENTS};
pub use types::{Score, StrengthTier};

#[cfg(feature = "async")]
pub use session::{run_session, InputEvent};
