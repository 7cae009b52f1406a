pub mod left;
pub mod top_header;

use leptos::prelude::*;
use left::Navbar;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Navbar  |          Content              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <div data-zone="left" class="left">
                    <Navbar />
                </div>

                <main data-zone="center" class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
