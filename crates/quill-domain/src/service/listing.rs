//! Listing rules - which posts the archive shows and in what order
//!
//! The archive only shows archived posts, newest first. Both rules apply
//! no matter which filter fetched the posts.

use crate::model::post::Post;

/// Keep archived posts only, preserving their relative order
pub fn filter_archived(posts: Vec<Post>) -> Vec<Post> {
    posts.into_iter().filter(Post::is_archived).collect()
}

/// Order posts by publication date, newest first
///
/// `sort_by` is stable: posts published at the same instant keep the
/// order they came in.
pub fn sort_by_published_desc(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| b.published_at().cmp(&a.published_at()));
    posts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::node::NodeId;
    use crate::model::workspace::Workspace;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, 8, 0, 0).unwrap()
    }

    fn post(id: &str, archived: bool, day: u32) -> Post {
        Post::new(NodeId::new(id), Workspace::live(), "en_US", at(day)).with_archived(archived)
    }

    fn ids(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.id().as_str()).collect()
    }

    #[test]
    fn test_filter_keeps_only_archived() {
        let posts = vec![post("a", true, 1), post("b", false, 2), post("c", true, 3)];

        let archived = filter_archived(posts);
        assert_eq!(ids(&archived), vec!["a", "c"]);
        assert!(archived.iter().all(Post::is_archived));
    }

    #[test]
    fn test_filter_empty_input() {
        assert!(filter_archived(Vec::new()).is_empty());
    }

    #[test]
    fn test_sort_newest_first() {
        let posts = vec![post("old", true, 1), post("new", true, 20), post("mid", true, 10)];

        let sorted = sort_by_published_desc(posts);
        assert_eq!(ids(&sorted), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let posts = vec![
            post("first", true, 5),
            post("newest", true, 9),
            post("second", true, 5),
            post("third", true, 5),
        ];

        let sorted = sort_by_published_desc(posts);
        assert_eq!(ids(&sorted), vec!["newest", "first", "second", "third"]);
        assert!(sorted
            .windows(2)
            .all(|w| w[0].published_at() >= w[1].published_at()));
    }
}
