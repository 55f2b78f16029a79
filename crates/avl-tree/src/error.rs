use crate::validate::AvlViolation;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write tree rendering: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid AVL tree: {0}")]
    Invalid(#[from] AvlViolation),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
