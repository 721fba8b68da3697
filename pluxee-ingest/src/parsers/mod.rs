//! Provider-specific statement parsers.

pub mod pluxee;
