//! UI Components for the AutoProf application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - File picker and upload control
//! - [`ProgressSection`] - Cosmetic upload progress bar
//! - [`GradeOutput`] / [`ResultsPanel`] - Server verdict surfaces
//! - [`RefreshButton`] - Full page reload

mod hero;
mod upload;
mod progress;
mod grade;
mod refresh;
mod footer;

pub use hero::*;
pub use upload::*;
pub use progress::*;
pub use grade::*;
pub use refresh::*;
pub use footer::*;
