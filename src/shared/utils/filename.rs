/// Normalize an arbitrary user-supplied filename into a safe, lower-case,
/// filesystem-legal name.
///
/// Directory components (either separator style) are stripped, the name is
/// lower-cased, and characters outside `a-z`, `0-9`, `.`, `-`, `_` are
/// dropped. Leading and trailing dots are removed so the result can never be
/// `.` or `..`. For any non-empty input the result is non-empty: when nothing
/// legal remains, the name falls back to `file`.
pub fn safe_file_name(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);

    let cleaned: String = base
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '-' | '_'))
        .collect();

    let cleaned = cleaned.trim_matches('.');
    if cleaned.is_empty() {
        return "file".to_string();
    }

    cleaned.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_illegal_characters() {
        assert_eq!(safe_file_name("My File!.JPG"), "myfile.jpg");
        assert_eq!(safe_file_name("Résumé (final).PDF"), "rsumfinal.pdf");
    }

    #[test]
    fn test_preserves_legal_names() {
        assert_eq!(safe_file_name("photo.jpg"), "photo.jpg");
        assert_eq!(safe_file_name("report_2024-01.pdf"), "report_2024-01.pdf");
    }

    #[test]
    fn test_strips_directory_components() {
        assert_eq!(safe_file_name("uploads/2024/photo.jpg"), "photo.jpg");
        assert_eq!(safe_file_name("C:\\Users\\me\\photo.jpg"), "photo.jpg");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(safe_file_name("  photo.jpg  "), "photo.jpg");
    }

    #[test]
    fn test_never_returns_dot_segments() {
        assert_eq!(safe_file_name(".."), "file");
        assert_eq!(safe_file_name("..."), "file");
        assert_eq!(safe_file_name(".hidden"), "hidden");
    }

    #[test]
    fn test_falls_back_for_fully_illegal_input() {
        assert_eq!(safe_file_name("日本語"), "file");
        assert_eq!(safe_file_name("!!!"), "file");
    }
}
