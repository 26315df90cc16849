use leptos::*;
use web_sys::MouseEvent;

use crate::dom::scroll_to_id;

/// Anchor that scrolls smoothly to the section with `target` as id.
#[component]
fn NavLink(target: &'static str, label: &'static str) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        scroll_to_id(target);
    };

    view! {
        <a href=format!("#{}", target) class="nav-link" on:click=on_click>{label}</a>
    }
}

#[component]
pub fn Header(
    /// `None` while the health probe is pending
    api_online: ReadSignal<Option<bool>>,
) -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"INVOICE QC"</a>
                <nav class="header-nav">
                    <NavLink target="upload" label="Upload"/>
                    <NavLink target="results" label="Results"/>
                </nav>
            </div>
            <div class="header-right">
                <div class="api-status" class:online=move || api_online.get() == Some(true)>
                    <span class="api-dot" class:online=move || api_online.get() == Some(true)></span>
                    <span>
                        {move || match api_online.get() {
                            None => "Checking API...",
                            Some(true) => "API online",
                            Some(false) => "API offline",
                        }}
                    </span>
                </div>
            </div>
        </header>
    }
}
