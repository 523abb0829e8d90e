/// Errors raised by the display engine.
///
/// These are programming or configuration errors: nothing here is retried,
/// and no default glyph or geometry is substituted when one is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClockError {
    /// A digit slot outside `0..=3`.
    #[error("digit slot must be 0, 1, 2, or 3, got {0}")]
    InvalidDigitSlot(usize),

    /// A digit outside `0..=9`.
    #[error("digit must be between 0 and 9, got {0}")]
    InvalidDigit(u8),

    /// The display configuration failed validation.
    #[error("invalid display configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// The canvas width cannot hold a clock grid.
    #[error("canvas width must be a positive number, got {0}")]
    InvalidCanvasWidth(f64),
}

pub type Result<T, E = ClockError> = std::result::Result<T, E>;
