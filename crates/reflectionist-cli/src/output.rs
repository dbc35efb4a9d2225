//! Output formatting utilities.

use reflectionist_journal::Entry;

/// Formats an entry as pretty JSON.
pub fn format_json(entry: &Entry) -> String {
    serde_json::to_string_pretty(entry).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a list of entries as a pretty JSON array.
pub fn format_json_list(entries: &[Entry]) -> String {
    serde_json::to_string_pretty(entries).unwrap_or_else(|_| "[]".to_string())
}

/// Formats one line of the `list` output.
pub fn format_list_row(id: usize, entry: &Entry) -> String {
    format!("{}. situation={}", id, entry.happened)
}

/// Formats the `list` header line.
pub fn format_list_header(count: usize) -> String {
    format!("{} reflections:", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry() -> Entry {
        Entry {
            created_at: "2024-01-01 12:00:00.000000".to_string(),
            happened: "I was a dog".to_string(),
            felt: "I was a cat".to_string(),
            learned: "I was a mouse".to_string(),
        }
    }

    #[test]
    fn test_list_row() {
        assert_eq!(format_list_row(3, &make_entry()), "3. situation=I was a dog");
    }

    #[test]
    fn test_list_header() {
        assert_eq!(format_list_header(2), "2 reflections:");
    }

    #[test]
    fn test_json_contains_all_fields() {
        let text = format_json(&make_entry());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["happened"], "I was a dog");
        assert_eq!(value["felt"], "I was a cat");
        assert_eq!(value["learned"], "I was a mouse");
        assert_eq!(value["created_at"], "2024-01-01 12:00:00.000000");
    }
}
