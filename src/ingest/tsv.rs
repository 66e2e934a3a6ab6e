//! Field-level helpers for the tab-separated dataset layout

/// Placeholder the datasets use for a missing value.
pub const NULL_FIELD: &str = "\\N";

/// Prefix carried by actor identifiers (`nm0000001`).
pub const ACTOR_PREFIX: &str = "nm";

/// Prefix carried by title identifiers (`tt0000001`).
pub const MOVIE_PREFIX: &str = "tt";

/// Title type kept when loading titles.
pub const MOVIE_TITLE_TYPE: &str = "movie";

/// Strip `prefix` and parse the remaining digits.
pub fn parse_identifier(token: &str, prefix: &str) -> Option<u32> {
    token.trim().strip_prefix(prefix)?.parse().ok()
}

/// Split one record into columns, ignoring a trailing carriage return.
pub fn split_record(line: &str) -> Vec<&str> {
    line.trim_end_matches('\r').split('\t').collect()
}

/// Comma-separated identifier list, with empty and null entries removed.
pub fn list_entries(field: &str) -> impl Iterator<Item = &str> {
    field
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty() && *entry != NULL_FIELD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("tt0000001", MOVIE_PREFIX => Some(1); "title id")]
    #[test_case("nm0000102", ACTOR_PREFIX => Some(102); "actor id")]
    #[test_case(" tt42 ", MOVIE_PREFIX => Some(42); "surrounding whitespace")]
    #[test_case("nm0000001", MOVIE_PREFIX => None; "wrong prefix")]
    #[test_case("tt", MOVIE_PREFIX => None; "prefix only")]
    #[test_case("ttabc", MOVIE_PREFIX => None; "non numeric")]
    #[test_case(NULL_FIELD, MOVIE_PREFIX => None; "null field")]
    fn test_parse_identifier(token: &str, prefix: &str) -> Option<u32> {
        parse_identifier(token, prefix)
    }

    #[test]
    fn test_split_record_drops_carriage_return() {
        assert_eq!(split_record("a\tb\tc\r"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_list_entries_skips_null() {
        let entries: Vec<&str> = list_entries("tt1,\\N,,tt2").collect();
        assert_eq!(entries, vec!["tt1", "tt2"]);
    }
}
