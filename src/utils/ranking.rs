use crate::models::{OrganicResult, Rank};
use crate::utils::normalize_url;

/// Results past this index are never considered for a match.
pub const MAX_EXAMINED_RESULTS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankMatch {
    pub rank: Rank,
    /// Link of the matching result exactly as the provider returned it.
    pub found_url: String,
}

impl RankMatch {
    pub fn not_found() -> Self {
        Self {
            rank: Rank::NotFound,
            found_url: String::new(),
        }
    }
}

/// Returns the 1-based index of the first result whose normalized link
/// contains `normalized_target` or is contained in it.
///
/// The containment is deliberately loose, so `example.com` also matches
/// `blog.example.com/post` and `myexample.com`.
pub fn find_rank(normalized_target: &str, results: &[OrganicResult]) -> RankMatch {
    if normalized_target.is_empty() {
        return RankMatch::not_found();
    }

    results
        .iter()
        .take(MAX_EXAMINED_RESULTS)
        .enumerate()
        .find(|(_, result)| {
            let link = normalize_url(&result.link);
            !link.is_empty()
                && (link.contains(normalized_target) || normalized_target.contains(link.as_str()))
        })
        .map(|(index, result)| RankMatch {
            rank: Rank::Position(index as u32 + 1),
            found_url: result.link.clone(),
        })
        .unwrap_or_else(RankMatch::not_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn results(links: &[&str]) -> Vec<OrganicResult> {
        links
            .iter()
            .enumerate()
            .map(|(i, link)| OrganicResult {
                position: i as u32 + 1,
                title: format!("Result {}", i + 1),
                link: link.to_string(),
            })
            .collect()
    }

    #[test]
    fn finds_first_position() {
        let found = find_rank(
            "example.com",
            &results(&["https://example.com/page", "https://other.com"]),
        );
        assert_eq!(found.rank, Rank::Position(1));
        assert_eq!(found.found_url, "https://example.com/page");
    }

    #[test]
    fn lowest_index_wins_when_several_match() {
        let found = find_rank(
            "example.com",
            &results(&[
                "https://other.com",
                "https://example.com/a",
                "https://example.com/b",
            ]),
        );
        assert_eq!(found.rank, Rank::Position(2));
        assert_eq!(found.found_url, "https://example.com/a");
    }

    #[test]
    fn target_longer_than_link_still_matches() {
        let found = find_rank(
            "example.com/deep/page",
            &results(&["https://other.com", "https://Example.com/"]),
        );
        assert_eq!(found.rank, Rank::Position(2));
        assert_eq!(found.found_url, "https://Example.com/");
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec!["https://example.com"])]
    #[case(vec!["https://a.com", "https://b.com"])]
    fn empty_target_is_never_found(#[case] links: Vec<&str>) {
        assert_eq!(find_rank("", &results(&links)), RankMatch::not_found());
    }

    #[test]
    fn no_overlap_reports_sentinel() {
        let found = find_rank("example.com", &results(&["https://a.org", "https://b.net"]));
        assert_eq!(found.rank, Rank::NotFound);
        assert!(found.rank.position().is_none());
        assert!(found.found_url.is_empty());
    }

    #[test]
    fn empty_links_never_match() {
        let found = find_rank("example.com", &results(&["", "https://example.com"]));
        assert_eq!(found.rank, Rank::Position(2));
    }

    #[test]
    fn results_past_the_window_are_ignored() {
        let mut links = vec!["https://filler.org"; MAX_EXAMINED_RESULTS];
        links.push("https://example.com");
        let found = find_rank("example.com", &results(&links));
        assert_eq!(found.rank, Rank::NotFound);
    }

    #[test]
    fn last_examined_result_can_match() {
        let mut links = vec!["https://filler.org"; MAX_EXAMINED_RESULTS - 1];
        links.push("https://example.com");
        let found = find_rank("example.com", &results(&links));
        assert_eq!(found.rank, Rank::Position(100));
    }
}
