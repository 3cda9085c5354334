//! アップロードフロー結合テスト
//!
//! サーバーレスポンスのパースからカード表示用の値
//! （バッジ文言・色・日付）までを通しで検証する

use lostfound_common::{
    badge_label, format_date, match_percent, parse_upload_response, ItemType, ScoreTier,
    UploadError,
};

/// 典型的な成功レスポンス
const SUCCESS_BODY: &str = r#"{
    "message": "Item stored successfully.",
    "matches": [
        {
            "item_name": "Black Wallet",
            "item_type": "lost",
            "color": "black",
            "location": "Central Station",
            "filename": "3f9a_wallet.jpg",
            "date": "2024-01-05T08:30:00.123456",
            "similarity": 0.705,
            "image_similarity": 0.72,
            "text_similarity": 0.66
        },
        {
            "item_name": "Red Umbrella",
            "item_type": "found",
            "color": "red",
            "location": "Bus Stop 4",
            "filename": "77c1_umbrella.png",
            "date": "2024-02-18T14:05:09",
            "similarity": 0.5
        },
        {
            "item_name": "Keychain",
            "item_type": "found",
            "color": "silver",
            "location": "Gym",
            "filename": "0b2d_keychain.jpg",
            "date": null,
            "similarity": 0.1
        }
    ]
}"#;

/// 成功レスポンスは受信順のままカード化できる
#[test]
fn test_success_response_renders_in_order() {
    let matches = parse_upload_response(true, SUCCESS_BODY).expect("パース失敗");
    assert_eq!(matches.len(), 3);

    let names: Vec<&str> = matches.iter().map(|m| m.item_name.as_str()).collect();
    assert_eq!(names, vec!["Black Wallet", "Red Umbrella", "Keychain"]);
}

/// バッジ文言と色帯の対応（境界値を含む）
#[test]
fn test_badge_and_tier_per_match() {
    let matches = parse_upload_response(true, SUCCESS_BODY).expect("パース失敗");

    let expected = [
        ("70.5% Match", ScoreTier::Success),
        ("50.0% Match", ScoreTier::Warning),
        ("10.0% Match", ScoreTier::Neutral),
    ];

    for (m, (label, tier)) in matches.iter().zip(expected) {
        assert_eq!(badge_label(m.similarity), label);
        assert_eq!(ScoreTier::from_percent(match_percent(m.similarity)), tier);
    }
}

/// 日付は整形、欠損は N/A
#[test]
fn test_card_dates() {
    let matches = parse_upload_response(true, SUCCESS_BODY).expect("パース失敗");

    assert_eq!(format_date(matches[0].date.as_deref()), "Jan 5, 2024");
    assert_eq!(format_date(matches[1].date.as_deref()), "Feb 18, 2024");
    assert_eq!(format_date(matches[2].date.as_deref()), "N/A");
}

/// 種別ラベル
#[test]
fn test_card_type_labels() {
    let matches = parse_upload_response(true, SUCCESS_BODY).expect("パース失敗");
    assert_eq!(matches[0].item_type, ItemType::Lost);
    assert_eq!(matches[0].item_type.label(), "Lost");
    assert_eq!(matches[1].item_type.label(), "Found");
}

/// マッチ0件はOkで返り、呼び出し側がNoMatchesに変換する
#[test]
fn test_empty_matches_is_ok_not_error() {
    let body = r#"{"message": "Item stored successfully.", "matches": []}"#;
    let matches = parse_upload_response(true, body).expect("パース失敗");
    assert!(matches.is_empty());

    // コントローラが出す文言
    assert_eq!(
        UploadError::NoMatches.to_string(),
        "No matches found. Try uploading a different image."
    );
}

/// サーバーエラーはボディの文言をそのまま表示する
#[test]
fn test_server_error_message_passthrough() {
    let result = parse_upload_response(false, r#"{"error": "All fields are required."}"#);
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "All fields are required.");
}

/// errorフィールドのないサーバーエラーは汎用文言
#[test]
fn test_server_error_generic_fallback() {
    let result = parse_upload_response(false, r#"{"message": "oops"}"#);
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "An error occurred while processing your request."
    );
}

/// JSONでないボディは接続エラー扱い
#[test]
fn test_malformed_body_is_connection_error() {
    let result = parse_upload_response(true, "upstream timeout");
    assert_eq!(result.unwrap_err(), UploadError::Connection);
    assert_eq!(
        UploadError::Connection.to_string(),
        "Failed to connect to server. Please try again."
    );
}
