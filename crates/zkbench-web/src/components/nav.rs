use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavTabs() -> impl IntoView {
    view! {
        <nav class="nav-tabs">
            <A href="/" attr:class="nav-tab">"Home"</A>
            <A href="/problems" attr:class="nav-tab">"Submissions"</A>
        </nav>
    }
}
