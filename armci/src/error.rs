use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("armci: No Joint={} is found.", .0)]
    NoJoint(String),
    #[error("armci: Length mismatch (model = {}, input = {})", model, input)]
    LengthMismatch { model: usize, input: usize },
    #[error("armci: Uninitialized : {}", message)]
    Uninitialized { message: String },
    #[error("armci: Other: {:?}", .0)]
    Other(#[from] anyhow::Error),
}
