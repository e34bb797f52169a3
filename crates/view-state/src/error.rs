use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateError {
    #[error("unknown feature flag: {0:?}")]
    UnknownFeature(String),
}
