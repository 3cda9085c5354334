//! マッチング結果の型定義
//!
//! サーバーとのワイヤ契約:
//! - UploadResponse: POST /upload の2xxボディ
//! - ErrorResponse: 非2xxボディ
//! - MatchResult: マッチ候補1件（表示専用、読み取りのみ）

use serde::{Deserialize, Serialize};

/// 届け出種別
///
/// サーバーは "lost" / "found" を返すが、未知の値は "Found" として扱う
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Lost,
    #[serde(other)]
    Found,
}

impl ItemType {
    /// カードに表示するラベル
    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Lost => "Lost",
            ItemType::Found => "Found",
        }
    }
}

/// マッチ候補1件
///
/// 配列内の位置以外に識別子はなく、受信順がそのまま表示順になる
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub filename: String,
    pub item_name: String,
    pub item_type: ItemType,
    pub color: String,
    pub location: String,

    /// 登録日時（ISO形式、欠損あり）
    #[serde(default)]
    pub date: Option<String>,

    /// 総合類似度 0.0〜1.0
    pub similarity: f64,

    /// 画像のみの類似度（サーバーの内訳、表示には使わない）
    #[serde(default)]
    pub image_similarity: Option<f64>,

    /// テキストのみの類似度（同上）
    #[serde(default)]
    pub text_similarity: Option<f64>,
}

/// POST /upload 成功時のレスポンスボディ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,

    /// matchesキー欠損は空配列と同義
    #[serde(default)]
    pub matches: Vec<MatchResult>,
}

/// POST /upload 失敗時のレスポンスボディ
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}
