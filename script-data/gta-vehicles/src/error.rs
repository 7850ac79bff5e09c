//! Error handling for vehicle identifier lookups

use thiserror::Error;

/// Errors that can occur when resolving vehicle identifiers
#[derive(Debug, Error)]
pub enum VehicleError {
    /// No vehicle model with the given symbolic name exists
    #[error("Unknown vehicle model: {0}")]
    UnknownModel(String),

    /// No vehicle model with the given hash exists
    #[error("Unknown vehicle model hash: {0} (0x{0:08X})")]
    UnknownHash(u32),
}

/// Type alias for Results from vehicle identifier operations
pub type Result<T> = std::result::Result<T, VehicleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = VehicleError::UnknownModel("Phantom9".to_string());
        assert_eq!(format!("{}", error), "Unknown vehicle model: Phantom9");

        let error = VehicleError::UnknownHash(255);
        assert_eq!(
            format!("{}", error),
            "Unknown vehicle model hash: 255 (0x000000FF)"
        );
    }
}
