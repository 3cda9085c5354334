//! メインアプリケーションコンポーネント
//!
//! アップロードフロー全体の状態を1本のシグナルで持つ。
//! 結果パネルとエラーパネルは同時に出ない

use leptos::either::EitherOf3;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::FormData;

use crate::api;
use crate::components::{
    error_panel::ErrorPanel, header::Header, results_section::ResultsSection,
    upload_form::UploadForm,
};
use lostfound_common::{MatchResult, UploadError};

/// 画面の排他的な状態
///
/// Idle/Submitting中は結果・エラーとも非表示
#[derive(Clone)]
pub enum ViewPhase {
    Idle,
    Submitting,
    Results(Vec<MatchResult>),
    Failed(String),
}

/// フォームから収集した送信内容
pub struct UploadRequest {
    pub has_file: bool,
    pub form_data: FormData,
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (phase, set_phase) = signal(ViewPhase::Idle);
    let is_submitting = Signal::derive(move || matches!(phase.get(), ViewPhase::Submitting));

    let on_submit = move |request: UploadRequest| {
        // ファイル未選択はネットワークに出る前に弾く
        if !request.has_file {
            set_phase.set(ViewPhase::Failed(UploadError::NoFileSelected.to_string()));
            return;
        }

        set_phase.set(ViewPhase::Submitting);

        spawn_local(async move {
            let outcome = api::upload::submit_upload(&request.form_data).await;

            // 全ての結果が終端状態への代入に合流するため、
            // ボタンとローダーは必ず初期状態に戻る
            let next = match outcome {
                Ok(matches) if matches.is_empty() => {
                    ViewPhase::Failed(UploadError::NoMatches.to_string())
                }
                Ok(matches) => ViewPhase::Results(matches),
                Err(err) => ViewPhase::Failed(err.to_string()),
            };
            set_phase.set(next);
        });
    };

    view! {
        <div class="container">
            <Header />

            <UploadForm is_submitting=is_submitting on_submit=on_submit />

            {move || match phase.get() {
                ViewPhase::Results(matches) => {
                    EitherOf3::A(view! { <ResultsSection matches=matches /> })
                }
                ViewPhase::Failed(message) => {
                    EitherOf3::B(view! { <ErrorPanel message=message /> })
                }
                ViewPhase::Idle | ViewPhase::Submitting => EitherOf3::C(()),
            }}
        </div>
    }
}
