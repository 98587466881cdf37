use std::collections::HashSet;

/// Flattens comma-joined tag fields and drops duplicates, keeping first-seen order.
pub fn normalize_tags<S: AsRef<str>>(raw_tags: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    for entry in raw_tags {
        for token in entry.as_ref().split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            if seen.insert(token.to_string()) {
                tags.push(token.to_string());
            }
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_and_trims_comma_joined_entries() {
        let tags = normalize_tags(&["VitePress, 网站", " 建站 "]);
        assert_eq!(tags, vec!["VitePress", "网站", "建站"]);
    }

    #[test]
    fn test_dedupes_across_entries() {
        let tags = normalize_tags(&["VSCode,AI", "AI", "VSCode, DeepSeek"]);
        assert_eq!(tags, vec!["VSCode", "AI", "DeepSeek"]);
    }

    #[test]
    fn test_discards_empty_tokens() {
        let tags = normalize_tags(&[",, ,", "", "MacOS,"]);
        assert_eq!(tags, vec!["MacOS"]);

        let none: Vec<String> = normalize_tags::<&str>(&[]);
        assert!(none.is_empty());
    }

    #[test]
    fn test_is_idempotent() {
        let once = normalize_tags(&["Photoshop, 图像, Photoshop", "图像,证件照"]);
        let twice = normalize_tags(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_is_case_sensitive() {
        // 樣式解析才做小寫轉換
        let tags = normalize_tags(&["vitepress, VitePress"]);
        assert_eq!(tags, vec!["vitepress", "VitePress"]);
    }
}
