//! Invoice QC - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading PDF invoices to the Invoice QC
//! backend and reviewing the validation report it returns.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navigation, backend status)                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (drop zone, FileList, submit)            │
//! │  └── ResultsSection (report or error panel)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoints, limits, base URL resolution
//! - [`types`] - Wire types (QcReport, ValidationResult) and errors
//! - [`selection`] - Staged files (PDF filter, name dedup)
//! - [`controller`] - Submission state machine
//! - [`render`] - Pure view models for the file list and report
//! - [`components`] - UI components (Header, Upload, Results, etc.)
//! - [`services`] - Backend communication (upload, health)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod selection;
pub mod controller;
pub mod render;
pub mod dom;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    QcReport, ValidationResult, HealthStatus,
    // Errors
    AppError, AppResult,
};

// State
pub use selection::{Candidate, SelectionError, SelectionSet};
pub use controller::{Outcome, Phase, SubmitError, UploadController};
pub use render::{build_report_view, ReportView, ResultsView};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Root
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Invoice QC"/>
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
    // Backend is chosen once, from the page's host
    let config = AppConfig::from_location();
    provide_context(config.clone());

    let controller = create_rw_signal(UploadController::<File>::new(config.max_files));
    let results = create_rw_signal(None::<ResultsView>);
    let (api_online, set_api_online) = create_signal(None::<bool>);

    spawn_local(async move {
        set_api_online.set(Some(is_backend_online(&config).await));
    });

    view! {
        <Header api_online=api_online/>

        <div class="container">
            <Hero/>
            <UploadSection controller=controller results=results/>
            <ResultsSection results=results/>
        </div>

        <Footer/>
    }
}
