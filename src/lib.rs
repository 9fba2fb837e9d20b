//! AutoProf - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading a photo of an assignment and
//! displaying the grade returned by the AutoProf service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (file picker, upload button)             │
//! │  ├── ProgressSection (cosmetic progress bar)                │
//! │  ├── GradeOutput / ResultsPanel (server verdict)            │
//! │  └── RefreshButton (full page reload)                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoints and deployment presets
//! - [`types`] - Common types (GradeReport, ProgressMeter, errors)
//! - [`components`] - UI components (Upload, Progress, Grade, etc.)
//! - [`services`] - Backend communication (upload)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, GradeReport, ProgressMeter};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 AutoProf - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application
    let (percent, set_percent) = create_signal(0u8);
    let (progress_shown, set_progress_shown) = create_signal(false);
    let (grade, set_grade) = create_signal(None::<String>);
    let (result_text, set_result_text) = create_signal(None::<String>);
    let (is_uploading, set_is_uploading) = create_signal(false);

    view! {
        <div class="container">
            <Hero/>

            <UploadSection
                config=UploadConfig::default()
                is_uploading=is_uploading
                set_is_uploading=set_is_uploading
                set_percent=set_percent
                set_progress_shown=set_progress_shown
                set_grade=set_grade
                set_result_text=set_result_text
            />

            <ProgressSection percent=percent shown=progress_shown/>

            <GradeOutput grade=grade/>
            <ResultsPanel text=result_text/>

            <RefreshButton/>
        </div>

        <Footer/>
    }
}
