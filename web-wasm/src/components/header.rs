//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Lost & Found Matcher"</h1>
            <p class="subtitle">"Upload a photo to search for matching items"</p>
        </header>
    }
}
