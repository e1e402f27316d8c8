/// Entry names double as output file stems and as keys the host sees, so
/// anything outside `[A-Za-z0-9_$]` is folded into `_`.
pub fn sanitize_entry_name(str: &str) -> String {
  let mut sanitized = String::with_capacity(str.len());
  for char in str.chars() {
    if char.is_ascii_alphanumeric() || matches!(char, '_' | '$') {
      sanitized.push(char);
    } else {
      sanitized.push('_');
    }
  }
  sanitized
}

#[test]
fn test_sanitize_entry_name() {
  assert_eq!(sanitize_entry_name("utils_helper"), "utils_helper");
  assert_eq!(sanitize_entry_name("my-sheet.server"), "my_sheet_server");
  assert_eq!(sanitize_entry_name("\0+a=Z_0$"), "__a_Z_0$");
}
