use super::*;

#[test]
fn test_misspelled_name_keeps_parts() {
    let name = Name::pack(3, 42);
    let span = Span::new(3, 9);
    let misspelled = MisspelledName::new(name, span);
    assert_eq!(misspelled.name, name);
    assert_eq!(misspelled.span, span);
}
