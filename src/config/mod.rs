//! JSON run configurations for the CLI tools.

pub mod reconstruct;
