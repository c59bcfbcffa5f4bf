//! Window computation over in-memory buffers

use ansihl::{ByteRange, InMemoryBuffer, TextBuffer, Window};

fn numbered_lines(count: usize) -> InMemoryBuffer {
    let mut text = String::new();
    for i in 0..count {
        text.push_str(&format!("line {}\n", i));
    }
    InMemoryBuffer::new(text)
}

#[test]
fn test_window_in_middle_of_document() {
    let buffer = numbered_lines(100);
    let window = Window::around_visible_lines(&buffer, 40, 60, 5);

    assert_eq!(window.first_line, 35);
    assert_eq!(window.last_line, 65);
    assert_eq!(window.range.start, buffer.offset_at_line(35));
    assert_eq!(window.range.end, buffer.offset_at_line(66));
}

#[test]
fn test_window_clamped_at_top() {
    let buffer = numbered_lines(100);
    let window = Window::around_visible_lines(&buffer, 2, 10, 5);

    assert_eq!(window.first_line, 0);
    assert_eq!(window.range.start, 0);
}

#[test]
fn test_window_clamped_at_bottom() {
    let buffer = numbered_lines(20);
    // 20 newline-terminated lines means 21 lines, the last one empty
    assert_eq!(buffer.line_count(), 21);

    let window = Window::around_visible_lines(&buffer, 18, 19, 5);
    assert_eq!(window.last_line, 20);
    assert_eq!(window.range.end, buffer.len());
}

#[test]
fn test_window_covers_whole_small_document() {
    let buffer = numbered_lines(3);
    let window = Window::around_visible_lines(&buffer, 0, 2, 10);

    assert_eq!(window.first_line, 0);
    assert_eq!(window.last_line, 3);
    assert_eq!(window.range, ByteRange::new(0, buffer.len()));
}

#[test]
fn test_empty_buffer_window() {
    let buffer = InMemoryBuffer::new(String::new());
    let window = Window::around_visible_lines(&buffer, 0, 0, 5);

    assert_eq!(window.range, ByteRange::new(0, 0));
}

#[test]
fn test_zero_margin() {
    let buffer = numbered_lines(10);
    let window = Window::around_visible_lines(&buffer, 3, 5, 0);

    assert_eq!(window.first_line, 3);
    assert_eq!(window.last_line, 5);
    assert_eq!(window.range.start, buffer.offset_at_line(3));
    assert_eq!(window.range.end, buffer.offset_at_line(6));
}

#[test]
fn test_same_viewport_same_window() {
    let buffer = numbered_lines(50);
    let a = Window::around_visible_lines(&buffer, 10, 20, 5);
    let b = Window::around_visible_lines(&buffer, 10, 20, 5);
    assert_eq!(a.range, b.range);
}
