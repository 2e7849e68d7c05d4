use std::io;
use std::io::ErrorKind;
use std::path::Path;

use ntex::web;
use ntex::web::Error;
use ntex_files::NamedFile;
use serde::Serialize;

use crate::category_filter::CategoryFilter;
use crate::collection::{distinct_categories, latest, tag_counts};
use crate::config::Defaults;
use crate::post::Post;
use crate::post_store::PostStore;
use crate::query_string::QueryString;
use crate::search::matches;
use crate::text_utils::is_safe_path_segment;
use crate::view::post_view::{summaries, ImageOptions, PostDetail, TagCount};

/// Filters of the post listing, taken from the query string.
#[derive(Debug, Default)]
pub struct PostQuery {
    pub categories: CategoryFilter,
    pub tag: Option<String>,
    pub search: Option<String>,
}

impl PostQuery {
    pub fn from_query_string(qs: &QueryString) -> PostQuery {
        PostQuery {
            categories: qs.get_all("category").into_iter().collect(),
            tag: qs.get_non_empty("tag"),
            search: qs.get_non_empty("q"),
        }
    }

    pub fn accepts(&self, post: &Post) -> bool {
        if !self.categories.accepts(post) {
            return false;
        }
        if let Some(ref tag) = self.tag {
            if !post.has_tag(tag) {
                return false;
            }
        }
        match self.search {
            Some(ref query) => matches(post, query),
            None => true,
        }
    }

    pub fn apply<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        posts.iter().filter(|post| self.accepts(post)).collect()
    }
}

fn image_options(defaults: &Defaults) -> ImageOptions {
    ImageOptions {
        prefix: &defaults.image_prefix,
        fallback: &defaults.fallback_image,
    }
}

fn to_json<T: Serialize>(value: &T) -> io::Result<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn list_posts(store: &PostStore, defaults: &Defaults, query: &PostQuery) -> io::Result<String> {
    let posts = store.load_all()?;
    let filtered = query.apply(&posts);
    to_json(&summaries(&filtered, &image_options(defaults)))
}

/// `None` when the post does not exist.
pub fn view_post(store: &PostStore, defaults: &Defaults, slug: &str) -> io::Result<Option<String>> {
    let Some(post) = store.load_one(slug) else {
        return Ok(None);
    };
    let detail = PostDetail::new(&post, &image_options(defaults))?;
    Ok(Some(to_json(&detail)?))
}

pub fn latest_posts(store: &PostStore, defaults: &Defaults, count: usize, exclude_slug: Option<&str>) -> io::Result<String> {
    let posts = store.load_all()?;
    let latest = latest(&posts, count, exclude_slug);
    to_json(&summaries(&latest, &image_options(defaults)))
}

pub fn list_categories(store: &PostStore) -> io::Result<String> {
    let posts = store.load_all()?;
    to_json(&distinct_categories(&posts))
}

pub fn list_tags(store: &PostStore) -> io::Result<String> {
    let posts = store.load_all()?;
    let tags: Vec<TagCount> = tag_counts(&posts)
        .into_iter()
        .map(|(tag, count)| TagCount { tag, count })
        .collect();
    to_json(&tags)
}

pub fn list_slugs(store: &PostStore) -> io::Result<String> {
    to_json(&store.slugs()?)
}

pub fn get_public_file(public_dir: &Path, file: &str) -> Result<NamedFile, Error> {
    if !is_safe_path_segment(file) {
        return Err(web::error::ErrorUnauthorized("Access forbidden").into());
    }

    let file_path = public_dir.join(file);
    if !file_path.is_file() {
        return Err(io::Error::new(ErrorKind::NotFound, format!("File not found: {}", file)).into());
    }
    Ok(NamedFile::open(file_path)?)
}
