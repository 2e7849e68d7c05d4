use std::fmt::{Display, Formatter};
use std::path::Path;
use std::{fmt, fs, io};
use std::io::ErrorKind;

use serde::Serialize;

use crate::content::front_matter::parse_front_matter;
use crate::text_utils::display_date;

/// A single blog entry, built from one file in the posts directory.
///
/// The slug is the file name without extension. All text fields are empty
/// strings when the front matter does not declare them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub author: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image: String,
    pub content: String,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "slug={}, date={}, author={}, category={}, tags=[{}]\ntitle={}\n",
               self.slug,
               self.date,
               self.author,
               self.category,
               self.tags.join(", "),
               self.title,
        )
    }
}

impl Post {
    pub fn from_file(file_name: &Path) -> io::Result<Post> {
        let slug = match file_name.file_stem().and_then(|s| s.to_str()) {
            Some(slug) => slug.to_string(),
            None => return Err(io::Error::new(ErrorKind::InvalidInput, format!("Invalid post file name {}", file_name.display()))),
        };

        let raw = fs::read_to_string(file_name)?;
        Self::from_string(&slug, &raw).map_err(|e| {
            io::Error::new(e.kind(), format!("{} - file={}", e, file_name.display()))
        })
    }

    pub fn from_string(slug: &str, raw: &str) -> io::Result<Post> {
        let (front_matter, body) = parse_front_matter(raw)?;

        Ok(Post {
            slug: slug.to_string(),
            title: front_matter.title,
            description: front_matter.description,
            date: front_matter.date,
            author: front_matter.author,
            category: front_matter.category,
            tags: front_matter.tags,
            image: front_matter.image,
            content: body.to_string(),
        })
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn display_date(&self) -> String {
        display_date(&self.date)
    }

    /// Image path as seen by the image loader, with the public directory
    /// prefix removed.
    pub fn image_path(&self, public_prefix: &str) -> String {
        strip_public_prefix(&self.image, public_prefix).to_string()
    }

    /// Header image for the post page. Falls back to `fallback` when the post
    /// declares no image.
    pub fn banner_image(&self, public_prefix: &str, fallback: &str) -> String {
        if self.image.is_empty() {
            fallback.to_string()
        } else {
            self.image_path(public_prefix)
        }
    }

    /// The first `max` tags plus how many were left out.
    pub fn tag_preview(&self, max: usize) -> (&[String], usize) {
        let shown = self.tags.len().min(max);
        (&self.tags[..shown], self.tags.len() - shown)
    }
}

fn strip_public_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return path;
    }
    match path.strip_prefix(prefix) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::test_data::{POST_ARRAY_TAGS, POST_MALFORMED, POST_STRING_TAGS};

    use super::*;

    #[test]
    fn test_from_string() {
        let post = Post::from_string("design-systems", POST_ARRAY_TAGS).unwrap();
        println!("{}", post);
        assert_eq!(post.slug, "design-systems");
        assert_eq!(post.title, "Design Systems in Practice");
        assert_eq!(post.category, "Design");
        assert!(post.has_tag("UI/UX Design"));
        assert!(!post.has_tag("ui/ux design"));
        assert!(post.content.starts_with("\n# Design Systems"));
    }

    #[test]
    fn test_malformed_is_an_error() {
        let err = Post::from_string("broken", POST_MALFORMED).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_from_file_missing() {
        let err = Post::from_file(&PathBuf::from("does/not/exist.md")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_image_path() {
        let post = Post::from_string("design-systems", POST_ARRAY_TAGS).unwrap();
        assert_eq!(post.image_path("/public"), "/blog/design.jpg");
        assert_eq!(post.image_path(""), "/public/blog/design.jpg");
        assert_eq!(post.banner_image("/public", "/products/3.jpg"), "/blog/design.jpg");

        let post = Post::from_string("news", POST_STRING_TAGS).unwrap();
        assert_eq!(post.image_path("/public"), "");
        assert_eq!(post.banner_image("/public", "/products/3.jpg"), "/products/3.jpg");
    }

    #[test]
    fn test_image_prefix_only_on_segment_boundary() {
        assert_eq!(strip_public_prefix("/publications/cover.png", "/public"), "/publications/cover.png");
        assert_eq!(strip_public_prefix("images/a.png", "/public"), "images/a.png");
    }

    #[test]
    fn test_tag_preview() {
        let post = Post::from_string("design-systems", POST_ARRAY_TAGS).unwrap();
        let (shown, hidden) = post.tag_preview(2);
        assert_eq!(shown, ["Design", "UI/UX Design"]);
        assert_eq!(hidden, 1);

        let (shown, hidden) = post.tag_preview(5);
        assert_eq!(shown.len(), 3);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn test_display_date() {
        let post = Post::from_string("news", POST_STRING_TAGS).unwrap();
        assert_eq!(post.display_date(), "January 20, 2024");
    }
}
