//! エラーパネルコンポーネント
//!
//! メッセージはテキストノードとして挿入する（HTML解釈しない）

use leptos::html;
use leptos::prelude::*;

use crate::components::scroll_to_element;

#[component]
pub fn ErrorPanel(message: String) -> impl IntoView {
    let panel_ref = NodeRef::<html::Div>::new();

    // マウント後にエラーまで画面を移動
    Effect::new(move |_| {
        if let Some(panel) = panel_ref.get() {
            scroll_to_element(&panel);
        }
    });

    view! {
        <div node_ref=panel_ref class="error-message">
            {message}
        </div>
    }
}
