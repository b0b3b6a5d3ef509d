/// Error type for form generation.
///
/// Whatever goes wrong, the current form is left as it was.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The prompt was empty or whitespace only.
    #[error("Please enter a prompt")]
    EmptyPrompt,

    /// User abandoned the generation (closed the dialog, etc.)
    #[error("Generation cancelled by user")]
    Cancelled,

    /// The generator's output was not a valid field list.
    #[error("Generated form is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    /// Generator-specific failure (network, quota, missing API key, etc.)
    #[error("Failed to generate form: {0}")]
    Backend(#[from] anyhow::Error),
}

impl GenerationError {
    /// Create a backend error from any error type.
    ///
    /// A `GenerationError` wrapped in the error is unwrapped again, so that
    /// cancellations and parse failures keep their kind.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        let err = err.into();
        match err.downcast::<GenerationError>() {
            Ok(inner) => inner,
            Err(other) => Self::Backend(other),
        }
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_keeps_cancellation() {
        let err = GenerationError::backend(GenerationError::Cancelled);
        assert!(err.is_cancelled());
    }

    #[test]
    fn backend_wraps_foreign_errors() {
        let err = GenerationError::backend(anyhow::anyhow!("quota exceeded"));
        assert_eq!(err.to_string(), "Failed to generate form: quota exceeded");
        assert!(!err.is_cancelled());
    }
}
