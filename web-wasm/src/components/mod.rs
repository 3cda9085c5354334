//! UIコンポーネント

pub mod error_panel;
pub mod header;
pub mod results_section;
pub mod upload_form;

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// パネルを表示位置までスムーズスクロール
pub(crate) fn scroll_to_element(element: &web_sys::Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Nearest);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
