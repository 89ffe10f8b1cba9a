use pretty_assertions::assert_eq;

use super::*;

#[test]
fn buffer_captures_lines() {
    let handler = buffer_handler();
    handler.println("one");
    handler.println("two");
    assert_eq!(handler.output(), "one\ntwo\n");
}

#[test]
fn stdout_handler_captures_nothing() {
    assert_eq!(stdout_handler().output(), "");
}

#[test]
fn shared_handles_see_the_same_buffer() {
    let handler = buffer_handler();
    let other = Arc::clone(&handler);
    other.println("hi");
    assert_eq!(handler.output(), "hi\n");
}
