//! Server verdict surfaces: grade output and free-text results.

use leptos::*;

/// Grade returned by the grading deployment (`note` field).
#[component]
pub fn GradeOutput(
    /// Grade text; `None` keeps the container hidden.
    grade: ReadSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div
            class="grade-output"
            id="gradeOutput"
            style:display=move || if grade.get().is_some() { "block" } else { "none" }
        >
            <span class="grade-label">"Note : "</span>
            <span class="grade-value" id="grade">
                {move || grade.get().unwrap_or_default()}
            </span>
        </div>
    }
}

/// Raw text returned by the transcript deployment (`text` field).
#[component]
pub fn ResultsPanel(
    /// Result text; `None` keeps the container hidden.
    text: ReadSignal<Option<String>>,
) -> impl IntoView {
    view! {
        <div
            class="results-panel"
            id="results"
            style:display=move || if text.get().is_some() { "block" } else { "none" }
        >
            {move || text.get().unwrap_or_default()}
        </div>
    }
}
