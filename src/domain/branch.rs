/// Result of matching a head-branch name against the
/// `{username}/{ticket_num}-{ticket_name}` convention.
///
/// A missing ticket number is a valid match: it means "no ticket exists yet,
/// create one", as opposed to an explicit number that must resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchMatch {
    pub username: String,
    pub ticket_number: Option<u64>,
    /// Digit segment exactly as written in the branch name, empty when
    /// absent. Downstream outputs echo it verbatim, so `007` stays `007`.
    pub number_text: String,
    pub slug: String,
}

/// Parses a branch name of the shape `username/1234-ticket-name`.
///
/// The whole name must match: `username` is lowercase ASCII letters, the
/// numeric segment may be empty, the `-` separator is optional, and the slug
/// is lowercase letters, digits, and hyphens. Anything else is no match.
pub fn parse(branch: &str) -> Option<BranchMatch> {
    let (username, rest) = branch.split_once('/')?;
    if !username.chars().all(|c| c.is_ascii_lowercase()) {
        return None;
    }

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (digits, tail) = rest.split_at(digits_end);
    let slug = tail.strip_prefix('-').unwrap_or(tail);
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return None;
    }

    let ticket_number = if digits.is_empty() {
        None
    } else {
        // An unrepresentable digit string cannot denote a real ticket.
        Some(digits.parse::<u64>().ok()?)
    };

    Some(BranchMatch {
        username: username.to_string(),
        ticket_number,
        number_text: digits.to_string(),
        slug: slug.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_numbered_branch() {
        let matched = parse("alice/1234-slug").unwrap();
        assert_eq!(matched.username, "alice");
        assert_eq!(matched.ticket_number, Some(1234));
        assert_eq!(matched.slug, "slug");
    }

    #[test]
    fn empty_number_segment_means_create() {
        let matched = parse("alice/-new-feature").unwrap();
        assert_eq!(matched.ticket_number, None);
        assert_eq!(matched.slug, "new-feature");

        let matched = parse("alice/fix-login-bug").unwrap();
        assert_eq!(matched.ticket_number, None);
        assert_eq!(matched.slug, "fix-login-bug");
    }

    #[test]
    fn slug_may_contain_digits() {
        let matched = parse("bob/42-upgrade-to-v2").unwrap();
        assert_eq!(matched.ticket_number, Some(42));
        assert_eq!(matched.slug, "upgrade-to-v2");
    }

    #[test]
    fn rejects_branch_without_slash() {
        assert_eq!(parse("feature_x"), None);
        assert_eq!(parse("main"), None);
    }

    #[test]
    fn rejects_uppercase_segments() {
        assert_eq!(parse("UserName/1-x"), None);
        assert_eq!(parse("alice/1-Fix"), None);
    }

    #[test]
    fn rejects_extra_path_segments() {
        assert_eq!(parse("alice/bob/1-x"), None);
    }

    #[test]
    fn keeps_digit_string_as_written() {
        let matched = parse("alice/007-bond").unwrap();
        assert_eq!(matched.ticket_number, Some(7));
        assert_eq!(matched.number_text, "007");
    }

    #[test]
    fn number_text_is_empty_when_absent() {
        let matched = parse("alice/fix-login-bug").unwrap();
        assert_eq!(matched.number_text, "");
    }
}
