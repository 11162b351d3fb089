mod dict;
mod error;

pub use dict::Dict;
pub use error::DictError;
