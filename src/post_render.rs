use std::io;
use std::io::ErrorKind;

use markdown::Options;

use crate::post::Post;

const COMMENT_START: &str = "<!--";
const COMMENT_END: &str = "-->";

/// Drops HTML comments from a markdown body. An unterminated comment runs to
/// the end of the text.
pub fn remove_comments(md_post: &str) -> String {
    let mut res = String::with_capacity(md_post.len());
    let mut remaining = md_post;

    while let Some(start) = remaining.find(COMMENT_START) {
        res.push_str(&remaining[..start]);
        let after_start = &remaining[start + COMMENT_START.len()..];
        remaining = match after_start.find(COMMENT_END) {
            Some(end) => &after_start[end + COMMENT_END.len()..],
            None => "",
        };
    }
    res.push_str(remaining);

    res
}

pub fn render_markdown(md_text: &str) -> io::Result<String> {
    let buf = remove_comments(md_text);
    markdown::to_html_with_options(buf.as_str(), &Options::gfm())
        .map_err(|e| io::Error::new(ErrorKind::InvalidInput, e.reason))
}

pub fn render_post(post: &Post) -> io::Result<String> {
    render_markdown(&post.content)
}

#[cfg(test)]
mod tests {
    use crate::test_data::{POST_ARRAY_TAGS, POST_STRING_TAGS};

    use super::*;

    #[test]
    fn test_remove_comments() {
        assert_eq!(remove_comments("Some text.<!-- more -->Wo<!-- xyz -->rd"), "Some text.Word");
        assert_eq!(remove_comments("Some text.Word"), "Some text.Word");
        assert_eq!(remove_comments(""), "");
        assert_eq!(remove_comments("<!-- more --><!-- xyz -->"), "");
        assert_eq!(remove_comments("kept<!-- never closed"), "kept");
    }

    #[test]
    fn test_render_post() {
        let post = Post::from_string("design-systems", POST_ARRAY_TAGS).unwrap();
        let html = render_post(&post).unwrap();
        assert!(html.contains("<h1>Design Systems</h1>"));
        assert!(html.contains("<p>A design system is a set of shared decisions.</p>"));
    }

    #[test]
    fn test_render_drops_comments() {
        let post = Post::from_string("news", POST_STRING_TAGS).unwrap();
        let html = render_post(&post).unwrap();
        assert!(html.contains("<p>Weekly summary.</p>"));
        assert!(!html.contains("draft note"));
    }
}
