/// helper macro to include files from the content folder
#[macro_export]
macro_rules! include_content_file {
    ($file_name:literal) => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/content/",
            $file_name
        ))
    };
}

/// Returns true when the text has no characters besides whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[test]
fn test_is_blank() {
    assert!(is_blank(""));
    assert!(is_blank("   "));
    assert!(is_blank("\t\n "));
    assert!(!is_blank(" a "));
    assert!(!is_blank("user@example.com"));
}
