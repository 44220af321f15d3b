//! Configuration validation trait

/// Common configuration validation interface
///
/// Deserialization bypasses validating constructors, so loaded configurations
/// are re-checked through this trait before they are handed to a client.
pub trait ConfigValidation {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Validate the configuration
    fn validate(&self) -> Result<(), Self::Error>;

    /// Get configuration warnings (non-fatal issues)
    fn warnings(&self) -> Vec<String> {
        Vec::new()
    }
}
