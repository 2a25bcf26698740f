use alloc::string::String;
use enough::StopReason;

/// Errors from artifact synthesis.
///
/// Deliberately malformed output (spoofed headers, truncated files, garbage)
/// is never reported through this type; it is the product, not a failure.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SynthError {
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("host buffer too small: need {needed} bytes, got {actual}")]
    HostTooSmall { needed: usize, actual: usize },

    #[error("segment payload of {len} bytes does not fit a 16-bit length field")]
    SegmentTooLarge { len: usize },

    #[error("unsupported variant: {0}")]
    UnsupportedVariant(String),

    #[error("upstream encoding failed: {0}")]
    UpstreamEncodingFailed(String),

    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    #[error("invalid payload: {0}")]
    InvalidPayload(String),

    #[error("entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for SynthError {
    fn from(r: StopReason) -> Self {
        SynthError::Cancelled(r)
    }
}
