//! 日付表示フォーマット
//!
//! サーバーはPythonの `datetime.utcnow().isoformat()` 形式で返すが、
//! 欠損・タイムゾーン付き・日付のみのレコードも混在する

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// 日付欠損時の表示
const ABSENT_DATE: &str = "N/A";

/// パース不能な日付の表示（レンダリング全体は失敗させない）
const INVALID_DATE: &str = "Invalid Date";

/// 日付文字列を "Jan 5, 2024" 形式に変換
///
/// # Examples
/// ```
/// use lostfound_common::format_date;
///
/// assert_eq!(format_date(Some("2024-01-05T08:30:00.123456")), "Jan 5, 2024");
/// assert_eq!(format_date(None), "N/A");
/// ```
pub fn format_date(date: Option<&str>) -> String {
    let Some(raw) = date else {
        return ABSENT_DATE.to_string();
    };
    if raw.is_empty() {
        return ABSENT_DATE.to_string();
    }

    parse_naive_date(raw)
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// 受け入れる形式の優先順:
/// 1. RFC 3339（タイムゾーン付き）
/// 2. ナイーブな日時（isoformat、秒の小数部は任意）
/// 3. 日付のみ
fn parse_naive_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
