use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DictError {
    #[error("key \"{key}\" not found in dict({key_type}, {val_type})")]
    KeyNotFound {
        key: String,
        key_type: &'static str,
        val_type: &'static str,
    },
}
