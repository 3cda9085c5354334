//! マッチ結果表示コンポーネント
//!
//! 受信順のまま1件1カードで描画する。自由記述フィールドは
//! テキストノードとして挿入されるためHTMLとして解釈されない

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ErrorEvent, HtmlImageElement};

use crate::components::scroll_to_element;
use lostfound_common::{badge_label, format_date, match_percent, MatchResult, ScoreTier};

/// サムネイル取得失敗時の代替画像（インラインSVG）
const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns=%22http://www.w3.org/2000/svg%22 width=%22200%22 height=%22200%22%3E%3Crect fill=%22%23ddd%22 width=%22200%22 height=%22200%22/%3E%3Ctext fill=%22%23999%22 font-family=%22sans-serif%22 font-size=%2218%22 dy=%2210.5%22 font-weight=%22bold%22 x=%2250%25%22 y=%2250%25%22 text-anchor=%22middle%22%3EImage Not Found%3C/text%3E%3C/svg%3E";

#[component]
pub fn ResultsSection(matches: Vec<MatchResult>) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();

    // マウント後に結果まで画面を移動
    Effect::new(move |_| {
        if let Some(section) = section_ref.get() {
            scroll_to_element(&section);
        }
    });

    view! {
        <section node_ref=section_ref class="results-section">
            <h2>"Possible Matches"</h2>
            <div class="results-container">
                {matches
                    .into_iter()
                    .map(|result| view! { <MatchCard result=result /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn MatchCard(result: MatchResult) -> impl IntoView {
    let percent = match_percent(result.similarity);
    let tier = ScoreTier::from_percent(percent);
    let image_src = format!("/uploads/{}", result.filename);

    let on_image_error = move |ev: ErrorEvent| {
        if let Some(target) = ev.target() {
            if let Ok(image) = target.dyn_into::<HtmlImageElement>() {
                image.set_src(PLACEHOLDER_IMAGE);
            }
        }
    };

    view! {
        <div class="result-card">
            <img src=image_src alt=result.item_name.clone() on:error=on_image_error />
            <h3>{result.item_name.clone()}</h3>
            <div class="result-info">
                <strong>"Type: "</strong>
                {result.item_type.label()}
            </div>
            <div class="result-info">
                <strong>"Color: "</strong>
                {result.color.clone()}
            </div>
            <div class="result-info">
                <strong>"Location: "</strong>
                {result.location.clone()}
            </div>
            <div class="result-info">
                <strong>"Date: "</strong>
                {format_date(result.date.as_deref())}
            </div>
            <div class="match-score" style=format!("background: {}", tier.css_color())>
                {badge_label(result.similarity)}
            </div>
        </div>
    }
}
