use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("Unknown filter '{0}'")]
    UnknownFilter(String),
}
