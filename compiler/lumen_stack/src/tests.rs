use super::*;

/// Mimics the shape of a nested-parenthesis parse: one frame per level.
fn nesting_depth(levels: u32) -> u32 {
    ensure_sufficient_stack(|| if levels == 0 { 0 } else { 1 + nesting_depth(levels - 1) })
}

#[test]
fn shallow_nesting_is_unaffected() {
    assert_eq!(nesting_depth(16), 16);
}

#[test]
fn deep_nesting_grows_the_stack() {
    assert_eq!(nesting_depth(200_000), 200_000);
}

#[test]
fn propagates_errors_from_the_closure() {
    let result: Result<u8, String> = ensure_sufficient_stack(|| Err("unexpected token".to_string()));
    assert_eq!(result, Err("unexpected token".to_string()));
}
