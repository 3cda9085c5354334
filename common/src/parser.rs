//! サーバーレスポンスパーサー
//!
//! HTTPステータスとボディ文字列からマッチ一覧またはUploadErrorに変換する。
//! fetch自体はWASM側（web-wasm/src/api）が担当し、ここは純粋なロジックのみ

use crate::error::UploadError;
use crate::types::{ErrorResponse, MatchResult, UploadResponse};

/// POST /upload のレスポンスを解釈
///
/// - 2xx: ボディをUploadResponseとしてパースし、matchesを返す
///   （空配列もそのまま返す。0件の扱いは呼び出し側の責務）
/// - 非2xx: ボディのerrorフィールドを持つUploadError::Serverを返す
/// - ボディがJSONとして不正な場合はどちらもUploadError::Connection
///
/// # Arguments
/// * `ok` - HTTPステータスが2xxかどうか（Response.ok相当）
/// * `body` - レスポンスボディ
pub fn parse_upload_response(ok: bool, body: &str) -> Result<Vec<MatchResult>, UploadError> {
    if ok {
        let response: UploadResponse =
            serde_json::from_str(body).map_err(|_| UploadError::Connection)?;
        Ok(response.matches)
    } else {
        let response: ErrorResponse =
            serde_json::from_str(body).map_err(|_| UploadError::Connection)?;
        Err(UploadError::Server(response.error))
    }
}
