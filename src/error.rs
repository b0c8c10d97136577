use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionalError {
    #[error("No value present for {type_name}")]
    Absent { type_name: &'static str },
}

pub type Result<T> = std::result::Result<T, OptionalError>;

impl OptionalError {
    pub(crate) fn absent<T>() -> Self {
        Self::Absent { type_name: std::any::type_name::<T>() }
    }
}
