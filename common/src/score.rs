//! 類似度スコアの表示変換
//!
//! サーバーの類似度（0.0〜1.0）をパーセント表示とバッジ色に変換する。
//! 色分けはフォーマット済み文字列ではなく数値のパーセントで判定する

/// 類似度のパーセント換算
pub fn match_percent(similarity: f64) -> f64 {
    similarity * 100.0
}

/// カードに表示するバッジ文言（小数1桁）
///
/// # Examples
/// ```
/// use lostfound_common::badge_label;
///
/// assert_eq!(badge_label(0.705), "70.5% Match");
/// ```
pub fn badge_label(similarity: f64) -> String {
    format!("{:.1}% Match", match_percent(similarity))
}

/// スコア帯
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    /// 70%以上
    Success,
    /// 50%以上70%未満
    Warning,
    /// 50%未満
    Neutral,
}

impl ScoreTier {
    /// 数値パーセントから帯を判定
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 70.0 {
            ScoreTier::Success
        } else if percent >= 50.0 {
            ScoreTier::Warning
        } else {
            ScoreTier::Neutral
        }
    }

    /// バッジ背景色
    pub fn css_color(&self) -> &'static str {
        match self {
            ScoreTier::Success => "#28a745",
            ScoreTier::Warning => "#ffc107",
            ScoreTier::Neutral => "#667eea",
        }
    }
}
