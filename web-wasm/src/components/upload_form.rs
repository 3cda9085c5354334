//! アップロードフォームコンポーネント
//!
//! 届け出内容の入力、選択画像のプレビュー、送信ボタンのbusy表示を持つ

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, FormData, SubmitEvent};

use crate::app::UploadRequest;

#[component]
pub fn UploadForm<F>(is_submitting: Signal<bool>, on_submit: F) -> impl IntoView
where
    F: Fn(UploadRequest) + 'static + Clone,
{
    let (preview_url, set_preview_url) = signal(None::<String>);
    let form_ref = NodeRef::<html::Form>::new();
    let file_ref = NodeRef::<html::Input>::new();

    let on_file_change = move |_| {
        let Some(input) = file_ref.get_untracked() else {
            return;
        };
        match input.files().and_then(|files| files.get(0)) {
            Some(file) => read_preview(file, set_preview_url),
            // 選択解除は即座にプレビューを消す
            None => set_preview_url.set(None),
        }
    };

    let on_form_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(form) = form_ref.get_untracked() else {
            return;
        };
        let Ok(form_data) = FormData::new_with_form(&form) else {
            return;
        };
        let has_file = file_ref
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .is_some();

        on_submit(UploadRequest { has_file, form_data });
    };

    view! {
        <form node_ref=form_ref class="upload-form" on:submit=on_form_submit>
            <div class="form-group">
                <label for="itemType">"I have..."</label>
                <select id="itemType" name="itemType">
                    <option value="lost">"Lost an item"</option>
                    <option value="found">"Found an item"</option>
                </select>
            </div>

            <div class="form-group">
                <label for="itemName">"Item name"</label>
                <input
                    type="text"
                    id="itemName"
                    name="itemName"
                    placeholder="e.g. Black Wallet"
                    required
                />
            </div>

            <div class="form-group">
                <label for="itemColor">"Color"</label>
                <input type="text" id="itemColor" name="itemColor" placeholder="e.g. black" required />
            </div>

            <div class="form-group">
                <label for="itemLocation">"Location"</label>
                <input
                    type="text"
                    id="itemLocation"
                    name="itemLocation"
                    placeholder="e.g. Central Station"
                    required
                />
            </div>

            <div class="form-group">
                <label for="itemImage">"Photo"</label>
                <input
                    node_ref=file_ref
                    type="file"
                    id="itemImage"
                    name="itemImage"
                    accept="image/*"
                    on:change=on_file_change
                />
            </div>

            <div class="image-preview">
                {move || preview_url.get().map(|url| view! { <img src=url alt="Preview" /> })}
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                <span>
                    {move || if is_submitting.get() { "Searching..." } else { "Search for Matches" }}
                </span>
                <Show when=move || is_submitting.get()>
                    <span class="loader"></span>
                </Show>
            </button>
        </form>
    }
}

/// 選択ファイルをData URLとして読み、完了時にプレビューへ反映する
///
/// 読み込みはキャンセルしない。選択が連続した場合は
/// 最後に完了した読み込みが勝つ
fn read_preview(file: File, set_preview_url: WriteSignal<Option<String>>) {
    let Ok(reader) = FileReader::new() else {
        return;
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                set_preview_url.set(Some(data_url));
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
