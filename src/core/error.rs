use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcoError {
    #[error("Unknown species: {0}")]
    InvalidSpecies(String),

    #[error("Invalid {what} amount: {amount}")]
    InvalidAmount { what: &'static str, amount: i64 },
}

pub type Result<T> = std::result::Result<T, EcoError>;
