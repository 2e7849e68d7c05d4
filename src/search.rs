use crate::post::Post;

/// Posts whose title, description or one of the tags contains `query`,
/// ignoring case.
///
/// An empty query is a substring of everything and so matches every post.
/// Callers that only want results for a typed query have to check for an
/// empty query themselves.
pub fn search<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    let query = query.to_lowercase();
    posts.iter().filter(|post| matches_lowercase(post, &query)).collect()
}

pub fn matches(post: &Post, query: &str) -> bool {
    matches_lowercase(post, &query.to_lowercase())
}

fn matches_lowercase(post: &Post, query: &str) -> bool {
    post.title.to_lowercase().contains(query)
        || post.description.to_lowercase().contains(query)
        || post.tags.iter().any(|tag| tag.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, title: &str, description: &str, tags: &[&str]) -> Post {
        Post {
            slug: slug.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            date: "2024-01-01".to_string(),
            author: String::new(),
            category: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: String::new(),
            content: "design everywhere in the body".to_string(),
        }
    }

    fn sample() -> Vec<Post> {
        vec![
            post("title-hit", "Design Systems", "", &[]),
            post("tag-hit", "Colors", "", &["UI/UX Design"]),
            post("description-hit", "Typography", "How I think about design", &[]),
            post("miss", "Rust CLI tools", "Parsing arguments", &["rust"]),
        ]
    }

    #[test]
    fn test_search() {
        let posts = sample();
        let found: Vec<&str> = search(&posts, "design").iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(found, ["title-hit", "tag-hit", "description-hit"]);

        let found: Vec<&str> = search(&posts, "DESIGN").iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(found, ["title-hit", "tag-hit", "description-hit"]);
    }

    #[test]
    fn test_body_is_not_searched() {
        let posts = sample();
        assert!(!matches(&posts[3], "design"));
        assert!(search(&posts, "everywhere").is_empty());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let posts = sample();
        assert_eq!(search(&posts, "").len(), posts.len());
    }

    #[test]
    fn test_matches() {
        let posts = sample();
        assert!(matches(&posts[3], "cli"));
        assert!(matches(&posts[3], "ARGUMENTS"));
        assert!(matches(&posts[3], "Rus"));
        assert!(!matches(&posts[3], "python"));
    }
}
