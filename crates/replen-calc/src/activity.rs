//! 活動報名條目解析
//!
//! 報名輸入是使用者從後台複製的一長串條碼，分隔符混用中英文
//! 分號、逗號與各式空白，逐條手工整理不現實。

use replen_core::ReplenError;

/// 是否為條目分隔符：中英文分號、逗號或任何空白字元
fn is_separator(c: char) -> bool {
    matches!(c, ';' | '；' | ',' | '，') || c.is_whitespace()
}

/// 解析活動報名輸入字串為條碼清單
///
/// 依分隔符切分後修剪、去除空項，重複條目保留首次出現的位置。
/// 一條都不剩時回傳 [`ReplenError::NoValidUpcs`]。
pub fn parse_entries(input: &str) -> replen_core::Result<Vec<String>> {
    let mut entries: Vec<String> = Vec::new();

    for piece in input.split(is_separator) {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        if !entries.iter().any(|e| e == piece) {
            entries.push(piece.to_string());
        }
    }

    if entries.is_empty() {
        return Err(ReplenError::NoValidUpcs);
    }

    tracing::info!("活動報名條目解析完成：{} 條", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("690001;690002;690003")]
    #[case("690001；690002，690003")]
    #[case("690001, 690002\n690003")]
    #[case("690001\t690002  690003")]
    #[case(";690001;;690002 ，\n690003；")]
    fn test_mixed_separators(#[case] input: &str) {
        let entries = parse_entries(input).unwrap();
        assert_eq!(entries, vec!["690001", "690002", "690003"]);
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let entries = parse_entries("690002;690001;690002;690003;690001").unwrap();
        assert_eq!(entries, vec!["690002", "690001", "690003"]);
    }

    #[test]
    fn test_single_entry() {
        let entries = parse_entries("  690001  ").unwrap();
        assert_eq!(entries, vec!["690001"]);
    }

    #[rstest]
    #[case("")]
    #[case("   \n\t ")]
    #[case(";；,，")]
    fn test_no_valid_entries_is_fatal(#[case] input: &str) {
        let err = parse_entries(input).unwrap_err();
        assert!(matches!(err, ReplenError::NoValidUpcs));
    }
}
