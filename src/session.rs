//! Async session driver - feeds input-change events into a form.

use secrecy::SecretString;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::error::FormError;
use crate::form::{PasswordForm, RenderedForm};

/// One change on the password input.
#[derive(Debug)]
pub enum InputEvent {
    Changed(SecretString),
    Cleared,
}

/// Runs the change handler for every event, in arrival order.
///
/// Each event is evaluated and rendered to completion before the next one
/// is received. Returns the form once `events` closes or `token` is
/// cancelled.
///
/// # Errors
///
/// Returns `FormError::OutputClosed` if the receiver of `out` is dropped,
/// or `FormError::Render` if rendering fails.
pub async fn run_session(
    mut form: PasswordForm,
    mut events: mpsc::Receiver<InputEvent>,
    out: mpsc::Sender<RenderedForm>,
    token: CancellationToken,
) -> Result<PasswordForm, FormError> {
    #[cfg(feature = "tracing")]
    tracing::info!("password form session started");

    loop {
        let event = tokio::select! {
            biased;
            _ = token.cancelled() => break,
            event = events.recv() => match event {
                Some(event) => event,
                None => break,
            },
        };

        let rendered = match event {
            InputEvent::Changed(value) => form.on_input(value)?,
            InputEvent::Cleared => form.clear()?,
        };

        if out.send(rendered).await.is_err() {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send rendered form: receiver dropped");
            return Err(FormError::OutputClosed);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::info!("password form session stopped");

    Ok(form)
}
