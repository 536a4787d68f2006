//! Form error type.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Failed to write rendered markup: {0}")]
    Render(#[from] std::fmt::Error),
    #[cfg(feature = "async")]
    #[error("Rendered output receiver was dropped")]
    OutputClosed,
}
