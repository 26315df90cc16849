//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Invoice QC - Extract & Validate"</h1>
            <p class="subtitle">
                "Drop your B2B invoices as PDF. "
                "Each one is extracted and checked against completeness, format and business rules."
            </p>
        </div>
    }
}
