use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"zkBench"</h1>
            <span class="subtitle">"Zero-Knowledge Prover Benchmarks"</span>
        </header>
    }
}
