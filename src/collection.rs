//! Views derived from a loaded post collection.
//!
//! Everything here takes the posts as loaded by the store and keeps their
//! order. Nothing reads from disk.

use std::collections::{HashMap, HashSet};

use crate::post::Post;

pub fn by_category<'a>(posts: &'a [Post], category: &str) -> Vec<&'a Post> {
    posts.iter().filter(|post| post.category == category).collect()
}

pub fn by_tag<'a>(posts: &'a [Post], tag: &str) -> Vec<&'a Post> {
    posts.iter().filter(|post| post.has_tag(tag)).collect()
}

/// First `count` posts, skipping `exclude_slug`. Expects `posts` to be
/// sorted already.
pub fn latest<'a>(posts: &'a [Post], count: usize, exclude_slug: Option<&str>) -> Vec<&'a Post> {
    posts.iter()
        .filter(|post| Some(post.slug.as_str()) != exclude_slug)
        .take(count)
        .collect()
}

pub fn find<'a>(posts: &'a [Post], slug: &str) -> Option<&'a Post> {
    posts.iter().find(|post| post.slug == slug)
}

/// Every category in first-seen order. Posts without a category contribute
/// an empty string.
pub fn distinct_categories(posts: &[Post]) -> Vec<String> {
    distinct(posts.iter().map(|post| post.category.as_str()))
}

pub fn distinct_tags(posts: &[Post]) -> Vec<String> {
    distinct(posts.iter().flat_map(|post| post.tags.iter().map(|tag| tag.as_str())))
}

/// Tags with the number of posts using them, most used first. Ties keep
/// first-seen order.
pub fn tag_counts(posts: &[Post]) -> Vec<(String, usize)> {
    let mut tag_map: HashMap<&str, usize> = HashMap::new();
    for tag in posts.iter().flat_map(|post| post.tags.iter()) {
        *tag_map.entry(tag.as_str()).or_insert(0) += 1;
    }

    let mut tag_list: Vec<(String, usize)> = distinct_tags(posts)
        .into_iter()
        .map(|tag| {
            let count = tag_map.get(tag.as_str()).copied().unwrap_or(0);
            (tag, count)
        })
        .collect();
    tag_list.sort_by(|(_, ca), (_, cb)| cb.cmp(ca));
    tag_list
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut res = vec![];
    for value in values {
        if seen.insert(value) {
            res.push(value.to_string());
        }
    }
    res
}
