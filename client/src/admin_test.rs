use super::*;

#[test]
fn admin_gate_follows_the_build_feature() {
    assert_eq!(admin_enabled(), cfg!(feature = "admin"));
}
