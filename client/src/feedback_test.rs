#![cfg(not(feature = "browser"))]

use super::*;

#[test]
fn banners_auto_hide_after_five_seconds() {
    assert_eq!(AUTO_HIDE_MS, 5_000);
}

#[test]
fn banner_ids_are_distinct() {
    assert_ne!(SUCCESS_BANNER_ID, ERROR_BANNER_ID);
}

#[test]
fn native_show_is_a_noop_but_callable() {
    show_success();
    show_error();
}
