//! Drive Query / A1 Notation Helpers
//!
//! Drive の検索クエリと Sheets の範囲指定の組み立て

/// Escape a value for use inside a single-quoted Drive query string
pub fn escape_query_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Query for non-trashed children of `parent_id` named `name`
pub fn children_named_query(parent_id: &str, name: &str) -> String {
    format!(
        "'{}' in parents and name = '{}' and trashed = false",
        escape_query_value(parent_id),
        escape_query_value(name)
    )
}

/// Query for non-trashed folders under `parent_id` named `name`
pub fn child_folder_named_query(parent_id: &str, name: &str, folder_mime_type: &str) -> String {
    format!(
        "{} and mimeType = '{}'",
        children_named_query(parent_id, name),
        escape_query_value(folder_mime_type)
    )
}

/// Pick the id of the first entry whose name matches exactly
///
/// Drive's `name =` comparison is not guaranteed to be exact for every
/// character, so the listing is re-checked on the client side.
pub fn first_exact_match<I>(entries: I, name: &str) -> Option<String>
where
    I: IntoIterator<Item = (Option<String>, Option<String>)>,
{
    entries
        .into_iter()
        .find(|(_, entry_name)| entry_name.as_deref() == Some(name))
        .and_then(|(id, _)| id)
}

/// A1 range covering a whole sheet, quoted so titles with spaces or
/// punctuation are accepted
pub fn a1_sheet_range(sheet_name: &str) -> String {
    format!("'{}'", sheet_name.replace('\'', "''"))
}
