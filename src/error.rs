//! Error types for the season_wardrobe library

use thiserror::Error;

/// Result type alias for season_wardrobe operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Error types raised at the crate boundary.
///
/// Degradations inside the analysis and composition paths (no face,
/// too few pixels, empty slot) are not errors: they yield fallback
/// descriptors, default profiles or placeholders instead.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration file could not be read, parsed or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Garment or palette data could not be parsed
    #[error("Catalog data error: {message}")]
    CatalogError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Garment record violates the data model invariants
    #[error("Invalid garment '{id}': {reason}")]
    InvalidGarment { id: String, reason: String },

    /// Color space conversion error
    #[error("Color conversion error: {message}")]
    ColorConversionError { message: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl AnalysisError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a catalog data error with context
    pub fn catalog<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::CatalogError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Recoverable errors leave the caller free to retry with corrected
    /// input; the rest point at broken files or configuration.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AnalysisError::InvalidGarment { .. } | AnalysisError::InvalidParameter { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            AnalysisError::ImageLoadError { .. } => {
                "Could not load the photo. Please check the file format and try again.".to_string()
            }
            AnalysisError::InvalidGarment { reason, .. } => {
                format!("This garment could not be saved: {}.", reason)
            }
            AnalysisError::InvalidParameter { parameter, .. } => {
                format!("The value given for '{}' is not valid.", parameter)
            }
            AnalysisError::ConfigError { .. } | AnalysisError::CatalogError { .. } => {
                "The styling data could not be loaded. Please contact support.".to_string()
            }
            _ => "Color analysis failed. Please try with a different photo.".to_string(),
        }
    }
}
