//! /upload エンドポイント連携
//!
//! multipart送信とボディ取得のみを担当し、
//! 解釈は lostfound_common::parser に委譲する

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

use lostfound_common::{parse_upload_response, MatchResult, UploadError};

const UPLOAD_URL: &str = "/upload";

/// フォーム全体をmultipartで送信し、マッチ一覧を得る
///
/// 通信自体の失敗はコンソールに記録した上でConnectionに畳む
pub async fn submit_upload(form_data: &FormData) -> Result<Vec<MatchResult>, UploadError> {
    match post_multipart(form_data).await {
        Ok((ok, body)) => parse_upload_response(ok, &body),
        Err(err) => {
            gloo::console::error!("upload request failed:", err);
            Err(UploadError::Connection)
        }
    }
}

/// fetchでPOSTし、(Response.ok, ボディ文字列) を返す
///
/// Content-Typeは設定しない。multipart境界はブラウザが付与する
async fn post_multipart(form_data: &FormData) -> Result<(bool, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(form_data.as_ref());

    let request = Request::new_with_str_and_init(UPLOAD_URL, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: Response = response_value.dyn_into()?;

    let ok = response.ok();
    let body_value = JsFuture::from(response.text()?).await?;
    let body = body_value.as_string().unwrap_or_default();

    Ok((ok, body))
}
