//! Decoding of `LS_COLORS`-style values: `key=code[;code...]` items joined
//! by `:`.

use super::sgr::Rendition;

/// Descriptions of the file-type categories used by `ls`.
pub const LS_KEYS: &[(&str, &str)] = &[
    ("no", "normal"),
    ("fi", "file"),
    ("di", "directory"),
    ("ln", "symlink"),
    ("pi", "pipe"),
    ("do", "door"),
    ("bd", "block device"),
    ("cd", "character device"),
    ("or", "orphan"),
    ("so", "socket"),
    ("su", "setuid"),
    ("sg", "setgid"),
    ("tw", "sticky other writable"),
    ("ow", "other writable"),
    ("st", "sticky"),
    ("ex", "executable"),
    ("mi", "missing"),
    ("lc", "left code"),
    ("rc", "right code"),
    ("ec", "end code"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LsColorsEntry<'a> {
    /// The whole `key=codes` item as it appeared in the value.
    pub item: &'a str,
    pub key: &'a str,
    pub codes: Vec<&'a str>,
}

impl<'a> LsColorsEntry<'a> {
    /// Returns `None` unless `item` has a non-empty key before its `=`.
    pub fn parse(item: &'a str) -> Option<Self> {
        match item.find('=') {
            Some(idx) if idx > 0 => Some(LsColorsEntry {
                item,
                key: &item[..idx],
                codes: item[idx + 1..].split(';').collect(),
            }),
            _ => None,
        }
    }

    pub fn description(&self) -> Option<&'static str> {
        describe(self.key)
    }

    pub fn rendition(&self) -> Rendition {
        Rendition::from_codes(self.codes.iter().copied())
    }
}

/// Case-insensitive lookup in [`LS_KEYS`].
pub fn describe(key: &str) -> Option<&'static str> {
    LS_KEYS
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(key))
        .map(|(_, description)| *description)
}

pub fn parse(value: &str) -> Vec<LsColorsEntry<'_>> {
    value.split(':').filter_map(LsColorsEntry::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::Color;

    #[test]
    fn test_parse_directory_entry() {
        let entry = LsColorsEntry::parse("di=01;34").expect("entry should decode");
        assert_eq!(entry.key, "di");
        assert_eq!(entry.codes, vec!["01", "34"]);
        assert_eq!(entry.description(), Some("directory"));
        assert_eq!(entry.rendition().foreground, Some(Color::Blue));
    }

    #[test]
    fn test_items_without_key_are_skipped() {
        assert_eq!(LsColorsEntry::parse(""), None);
        assert_eq!(LsColorsEntry::parse("rs"), None);
        assert_eq!(LsColorsEntry::parse("=01;34"), None);
    }

    #[test]
    fn test_parse_value_with_trailing_colon() {
        let entries = parse("rs=0:di=01;34:ln=01;36:*.tar=01;31:");
        let keys: Vec<&str> = entries.iter().map(|entry| entry.key).collect();
        assert_eq!(keys, vec!["rs", "di", "ln", "*.tar"]);
    }

    #[test]
    fn test_empty_code_list() {
        let entry = LsColorsEntry::parse("mi=").expect("entry should decode");
        assert_eq!(entry.codes, vec![""]);
        assert_eq!(entry.rendition(), Rendition::default());
    }

    #[test]
    fn test_describe_is_case_insensitive() {
        assert_eq!(describe("DI"), Some("directory"));
        assert_eq!(describe("Ex"), Some("executable"));
        assert_eq!(describe("*.tar"), None);
        assert_eq!(describe("rs"), None);
    }
}
