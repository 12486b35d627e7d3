use thiserror::Error;

/// Failure kinds surfaced by the engine.
///
/// Every failure is fatal to the enclosing call: nothing is retried and no
/// partial result is ever observable. Callers and tests match on the
/// variant, not the message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeedbrushError {
    /// Weighted bucket table whose entries sum past 100.
    #[error("percentages sum greater than 100")]
    PercentagesGreaterThan100,

    /// Mix ratio larger than the total percentage.
    #[error("mix ratio exceeds total percentage")]
    RatioInvalid,

    /// Malformed hex input for a seed value.
    #[error("seed parse error: {0}")]
    SeedParse(#[from] hex::FromHexError),

    /// Malformed base64 input.
    #[error("base64 decode error: {0}")]
    Base64Decode(String),
}
