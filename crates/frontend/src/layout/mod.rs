pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

use crate::sections::{FeatureSections, Hero};
use footer::Footer;
use header::Navbar;

/// Page layout.
///
/// ```text
/// +------------------------------------------+
/// |               Navbar (sticky)            |
/// +------------------------------------------+
/// |               Hero                       |
/// |               FeatureSections            |
/// +------------------------------------------+
/// |               Footer                     |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Navbar />
            <main class="app-main">
                <Hero />
                <FeatureSections />
            </main>
            <Footer />
        </div>
    }
}
