#![cfg(not(feature = "browser"))]

use store::env::Environment;

use super::*;

#[test]
fn native_clock_returns_fixed_zero_values() {
    let env = BrowserEnvironment;
    assert_eq!(env.now_ms(), 0);
    assert_eq!(env.now_iso(), "");
    assert!((env.random() - 0.0).abs() < f64::EPSILON);
}
