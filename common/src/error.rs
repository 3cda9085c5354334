//! エラー型定義
//!
//! ユーザーに表示するエラーは全てこの型に集約し、
//! Display実装がそのまま画面に出す文言になる

use thiserror::Error;

/// サーバーエラーメッセージ欠損時のフォールバック文言
const GENERIC_SERVER_MESSAGE: &str = "An error occurred while processing your request.";

/// アップロードフローのユーザー向けエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// ファイル未選択（ネットワーク到達前に検出）
    #[error("Please select an image file.")]
    NoFileSelected,

    /// サーバーが非2xxで返したエラー。ボディのerrorフィールドがあればそれを表示
    #[error("{}", .0.as_deref().unwrap_or(GENERIC_SERVER_MESSAGE))]
    Server(Option<String>),

    /// 通信失敗またはボディがJSONとして不正
    #[error("Failed to connect to server. Please try again.")]
    Connection,

    /// 技術的エラーではないが、マッチ0件もエラーパネルで通知する
    #[error("No matches found. Try uploading a different image.")]
    NoMatches,
}
