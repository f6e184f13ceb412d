/// A work item in the tracking database, either fetched or freshly created.
///
/// `id` and `url` are always populated; the tracker implementations never
/// hand back a partially-constructed ticket.
#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: String,
    pub url: String,
    pub title: String,
}

/// Turns a branch slug into a human-readable ticket title: hyphens become
/// spaces and the first character is uppercased.
pub fn title_from_slug(slug: &str) -> String {
    let spaced = slug.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_slug_as_title() {
        assert_eq!(title_from_slug("fix-login-bug"), "Fix login bug");
    }

    #[test]
    fn formats_single_word_slug() {
        assert_eq!(title_from_slug("cleanup"), "Cleanup");
    }

    #[test]
    fn empty_slug_stays_empty() {
        assert_eq!(title_from_slug(""), "");
    }
}
