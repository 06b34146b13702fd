use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::header::Header;
use crate::components::nav::NavTabs;
use crate::pages::{home::HomePage, problem_detail::ProblemDetailPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <Header />
                <NavTabs />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/problems") view=ProblemDetailPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
