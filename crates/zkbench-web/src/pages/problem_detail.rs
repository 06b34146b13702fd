use leptos::prelude::*;
use zkbench_core::{SubmissionRecord, ZkBenchConfig};

use crate::components::submissions_table::SubmissionsTable;

/// `<script type="application/json">` element holding the submissions array.
pub const SUBMISSIONS_ELEMENT_ID: &str = "submissions-data";
/// Optional element holding a `ZkBenchConfig`.
pub const CONFIG_ELEMENT_ID: &str = "zkbench-config";

fn embedded_json(id: &str) -> Option<String> {
    document().get_element_by_id(id)?.text_content()
}

/// Submissions shipped with the page. `Ok(None)` when the page has none.
fn embedded_submissions() -> Result<Option<Vec<SubmissionRecord>>, String> {
    let Some(json) = embedded_json(SUBMISSIONS_ELEMENT_ID) else {
        return Ok(None);
    };
    SubmissionRecord::list_from_json(&json)
        .map(Some)
        .map_err(|e| e.to_string())
}

fn embedded_config() -> ZkBenchConfig {
    let Some(json) = embedded_json(CONFIG_ELEMENT_ID) else {
        return ZkBenchConfig::default();
    };
    ZkBenchConfig::from_json(&json).unwrap_or_else(|e| {
        web_sys::console::warn_1(&format!("ignoring page config: {e}").into());
        ZkBenchConfig::default()
    })
}

#[component]
pub fn ProblemDetailPage() -> impl IntoView {
    let (submissions, error) = match embedded_submissions() {
        Ok(submissions) => (submissions, None),
        Err(e) => (None, Some(e)),
    };
    let config = embedded_config();

    view! {
        <div class="page problem-detail-page">
            <h2>"Submissions"</h2>

            {error.map(|e| view! {
                <div class="error-panel">
                    <p style="color: var(--error);">"Error: " {e}</p>
                </div>
            })}

            <SubmissionsTable data_source=submissions theme=config.theme />
        </div>
    }
}
