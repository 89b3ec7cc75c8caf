//! Genre lists are persisted as a single text column joined with [`DELIMITER`].
//!
//! Values must not contain the delimiter; the form layer restricts genres to
//! [`crate::forms::GENRE_CHOICES`], none of which do.

pub const DELIMITER: &str = ", ";

pub fn join<S: AsRef<str>>(genres: &[S]) -> String {
    genres
        .iter()
        .map(|g| g.as_ref())
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

/// An empty column yields an empty list rather than `[""]`.
pub fn split(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        return Vec::new();
    }
    stored.split(DELIMITER).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_join_preserves_entry_order() {
        assert_eq!(join(&["Rock", "Jazz", "Blues"]), "Rock, Jazz, Blues");
    }

    #[test]
    fn test_split_recovers_joined_list() {
        let genres = vec![
            "Jazz".to_string(),
            "Rock n Roll".to_string(),
            "R&B".to_string(),
        ];
        assert_eq!(split(&join(&genres)), genres);
    }

    #[test]
    fn test_single_genre() {
        assert_eq!(split("Folk"), vec!["Folk".to_string()]);
        assert_eq!(join(&["Folk"]), "Folk");
    }

    #[test]
    fn test_empty_column_is_empty_list() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(join(&empty), "");
        assert!(split("").is_empty());
    }
}
