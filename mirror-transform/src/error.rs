use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A rename or case conversion produced a field name that is already
    /// taken in the same declaration.
    #[error("duplicate field name '{name}' in declaration '{declaration}'")]
    DuplicateFieldName { declaration: String, name: String },
}
