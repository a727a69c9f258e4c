//! File-backed configuration and request loaders.
//!
//! Pure schema/model parsing lives in `domain::config`.

mod load_config;
mod load_request;

pub use load_config::{load_config, load_config_file};
pub use load_request::{load_request_file, parse_field_args};
