use crate::post::Post;

/// Categories picked on the blog listing. With nothing selected every post is
/// shown, otherwise a post is shown when its category is any of the selected
/// ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFilter {
    selected: Vec<String>,
}

impl CategoryFilter {
    pub fn new() -> CategoryFilter {
        Default::default()
    }

    /// Selects `category`, or deselects it when it is already selected.
    pub fn toggle(&mut self, category: &str) {
        match self.selected.iter().position(|c| c == category) {
            Some(index) => {
                self.selected.remove(index);
            }
            None => self.selected.push(category.to_string()),
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected.iter().any(|c| c == category)
    }

    /// Selected categories in the order they were picked.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn accepts(&self, post: &Post) -> bool {
        self.is_empty() || self.is_selected(&post.category)
    }

    pub fn apply<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        posts.iter().filter(|post| self.accepts(post)).collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CategoryFilter {
    /// Builds a filter by selecting each category once. Repeated values are
    /// ignored rather than toggled off.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut filter = CategoryFilter::new();
        for category in iter {
            let category = category.as_ref();
            if !filter.is_selected(category) {
                filter.toggle(category);
            }
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use crate::test_data::post_file;

    use super::*;

    fn sample() -> Vec<Post> {
        [("a", "Design"), ("b", "Tech"), ("c", "Life"), ("d", "Design"), ("e", "")]
            .iter()
            .map(|(slug, category)| Post::from_string(slug, &post_file(slug, "2024-01-01", category, "[]")).unwrap())
            .collect()
    }

    fn shown(filter: &CategoryFilter, posts: &[Post]) -> Vec<String> {
        filter.apply(posts).iter().map(|p| p.slug.clone()).collect()
    }

    #[test]
    fn test_empty_shows_everything() {
        let posts = sample();
        let filter = CategoryFilter::new();
        assert_eq!(shown(&filter, &posts), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut filter = CategoryFilter::new();
        filter.toggle("X");
        assert!(filter.is_selected("X"));
        filter.toggle("X");
        assert_eq!(filter, CategoryFilter::new());
    }

    #[test]
    fn test_selection_is_or() {
        let posts = sample();
        let mut filter = CategoryFilter::new();
        filter.toggle("Design");
        assert_eq!(shown(&filter, &posts), ["a", "d"]);

        filter.toggle("Life");
        assert_eq!(shown(&filter, &posts), ["a", "c", "d"]);
        assert_eq!(filter.selected(), ["Design", "Life"]);

        filter.toggle("Design");
        assert_eq!(shown(&filter, &posts), ["c"]);
    }

    #[test]
    fn test_clear() {
        let posts = sample();
        let mut filter = CategoryFilter::new();
        filter.toggle("Tech");
        filter.toggle("Missing");
        assert_eq!(shown(&filter, &posts), ["b"]);

        filter.clear();
        assert!(filter.is_empty());
        assert_eq!(shown(&filter, &posts).len(), posts.len());
    }

    #[test]
    fn test_empty_category_can_be_selected() {
        let posts = sample();
        let mut filter = CategoryFilter::new();
        filter.toggle("");
        assert_eq!(shown(&filter, &posts), ["e"]);
    }

    #[test]
    fn test_from_iter() {
        let filter: CategoryFilter = ["Tech", "Design", "Tech"].into_iter().collect();
        assert_eq!(filter.selected(), ["Tech", "Design"]);
    }
}
