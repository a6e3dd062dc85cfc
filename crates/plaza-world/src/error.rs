//! Asset loading errors reported by [`PropLoader`](crate::PropLoader) implementations.

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset `{name}` not found")]
    NotFound { name: String },

    #[error("failed to decode `{name}`: {reason}")]
    Decode { name: String, reason: String },
}
