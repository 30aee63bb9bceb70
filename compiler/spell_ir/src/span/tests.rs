use super::*;

#[test]
fn test_span_new() {
    let span = Span::new(4, 10);
    assert_eq!((span.start, span.end), (4, 10));
    assert_eq!(Span::default(), Span::DUMMY);
}

#[test]
fn test_span_debug() {
    assert_eq!(format!("{:?}", Span::new(1, 9)), "1..9");
}
