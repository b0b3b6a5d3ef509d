use crate::FormField;

/// Trait for collaborators that produce a whole field list from a prompt.
///
/// Generators decide how the list comes about (a generative API, a
/// template library, a file on disk). Every returned field must carry a
/// fresh id; the list replaces the current form wholesale.
pub trait FormGenerator {
    /// The error type for this generator.
    type Error: Into<anyhow::Error>;

    /// Produce a field list for the given prompt.
    ///
    /// # Arguments
    /// * `prompt` - A non-blank description of the wanted form
    ///
    /// # Returns
    /// * `Ok(fields)` on success
    /// * `Err` on failure or cancellation
    fn generate(&self, prompt: &str) -> Result<Vec<FormField>, Self::Error>;
}

impl<G: FormGenerator + ?Sized> FormGenerator for &G {
    type Error = G::Error;

    fn generate(&self, prompt: &str) -> Result<Vec<FormField>, Self::Error> {
        (**self).generate(prompt)
    }
}
