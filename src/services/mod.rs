//! Backend communication services.
//!
//! # Services
//!
//! - [`upload`] - Multipart image upload to the grading endpoint

pub mod upload;

pub use upload::*;
