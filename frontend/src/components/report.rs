//! Results area: validation report or failure panel.

use leptos::*;

use crate::dom::scroll_into_view_smooth;
use crate::render::{
    ErrorPanel, InvoiceCard, IssueSection, ResultsView, Summary, NO_ISSUES_TEXT,
};

#[component]
fn SummaryStat(
    kind: &'static str,
    icon: &'static str,
    value: usize,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("summary-stat {}", kind)>
            <div class="stat-icon">{icon}</div>
            <div class="stat-content">
                <div class="value">{value}</div>
                <div class="label">{label}</div>
            </div>
        </div>
    }
}

#[component]
fn ReportSummary(summary: Summary) -> impl IntoView {
    view! {
        <div class="summary">
            <div class="summary-header">
                <h2>"📊 Validation Summary"</h2>
                <div class="summary-badge">{summary.badge()}</div>
            </div>
            <div class="summary-stats">
                <SummaryStat kind="total" icon="🧾" value=summary.total label="Total"/>
                <SummaryStat kind="valid" icon="✅" value=summary.valid label="Valid"/>
                <SummaryStat kind="invalid" icon="❌" value=summary.invalid label="Invalid"/>
            </div>
        </div>
    }
}

#[component]
fn IssueList(section: IssueSection) -> impl IntoView {
    let kind = section.kind;
    let count = section.count();

    view! {
        <div class=format!("{}s", kind.css_class())>
            <div class=format!("section-header {}-header", kind.css_class())>
                <span>{kind.icon()} " " {kind.title()}</span>
                <div class=format!("count-badge {}", kind.css_class())>{count}</div>
            </div>
            <div class="issues-list">
                {section
                    .items
                    .into_iter()
                    .map(|item| view! {
                        <div class=format!("issue-item {}", kind.css_class())>
                            {kind.icon()} " " <span>{item}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn InvoiceCardView(card: InvoiceCard) -> impl IntoView {
    let verdict = card.verdict;
    let no_issues = card.shows_no_issues();

    view! {
        <div class=format!("invoice-result {}", verdict.css_class())>
            <div class="invoice-header">
                <div class="invoice-info">
                    <div class="invoice-number">"🧾 " {card.invoice_number}</div>
                    <div class="invoice-meta">"ℹ️ Invoice Analysis Report"</div>
                </div>
                <div class=format!("status-badge {}", verdict.css_class())>
                    {verdict.icon()} " " {verdict.label()}
                </div>
            </div>
            <div class="invoice-content">
                {card.errors.map(|section| view! { <IssueList section=section/> })}
                {card.warnings.map(|section| view! { <IssueList section=section/> })}
                {no_issues.then(|| view! { <div class="no-issues">"✔ " {NO_ISSUES_TEXT}</div> })}
            </div>
        </div>
    }
}

#[component]
fn FailurePanel(panel: ErrorPanel) -> impl IntoView {
    let hint = panel.hint();

    view! {
        <div class="summary error-panel">
            <h2>"⚠️ Error"</h2>
            <p>{panel.message}</p>
            <p class="error-hint">{hint}</p>
            <p class="error-hint small">"Check browser console for details (F12)"</p>
        </div>
    }
}

/// Renders whatever [`ResultsView`] holds, replacing previous content.
#[component]
pub fn ResultsSection(results: RwSignal<Option<ResultsView>>) -> impl IntoView {
    let section = create_node_ref::<html::Section>();

    // Bring a fresh report into view once the DOM is updated
    create_effect(move |_| {
        let has_report = results.with(|r| matches!(r, Some(ResultsView::Report(_))));
        if has_report {
            request_animation_frame(move || {
                if let Some(element) = section.get_untracked() {
                    scroll_into_view_smooth(&element);
                }
            });
        }
    });

    view! {
        <section class="results" id="results" node_ref=section>
            {move || results.get().map(|content| match content {
                ResultsView::Report(report) => view! {
                    <div class="container">
                        <ReportSummary summary=report.summary/>
                        {report
                            .cards
                            .into_iter()
                            .map(|card| view! { <InvoiceCardView card=card/> })
                            .collect_view()}
                    </div>
                }
                .into_view(),
                ResultsView::Failure(panel) => view! {
                    <div class="container">
                        <FailurePanel panel=panel/>
                    </div>
                }
                .into_view(),
            })}
        </section>
    }
}
