use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <h2>"Welcome to zkBench"</h2>
            <p>"Side-by-side results of zero-knowledge provers on shared problems."</p>

            <div class="features">
                <div class="feature">
                    <h3>"Timing"</h3>
                    <p>"Setup, witness generation, proving and verification time"</p>
                </div>
                <div class="feature">
                    <h3>"Footprint"</h3>
                    <p>"Peak memory and proof size"</p>
                </div>
            </div>
        </div>
    }
}
