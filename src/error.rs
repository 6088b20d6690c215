use thiserror::Error;

#[derive(Debug, Error)]
pub enum NoiseError {
    #[error("octave count must be greater than zero")]
    InvalidOctaves,
    #[error("failed to draw a seed from the entropy source: {0}")]
    Entropy(#[from] rand::Error),
}
