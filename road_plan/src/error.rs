use thiserror::Error;

/// Top-level error type for road composition and export.
///
/// Composition errors abort the whole run: a skipped segment would break the
/// arc-length continuity of everything downstream, so no partial geometry is
/// ever returned.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid segment: length must be positive, got {length}")]
    InvalidSegment { length: f64 },

    #[error("invalid config: plot_step must be positive, got {plot_step}")]
    InvalidConfig { plot_step: f64 },

    #[error("numeric integration did not converge on [{from}, {to}]")]
    Integration { from: f64, to: f64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
