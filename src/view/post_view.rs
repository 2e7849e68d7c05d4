use std::io;

use serde::Serialize;

use crate::post::Post;
use crate::post_render::render_post;

/// How post images are exposed to clients.
pub struct ImageOptions<'a> {
    pub prefix: &'a str,
    pub fallback: &'a str,
}

/// A post as shown in listings, without the body.
#[derive(Serialize, Debug, PartialEq)]
pub struct PostSummary<'a> {
    pub slug: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub date: &'a str,
    pub display_date: String,
    pub author: &'a str,
    pub category: &'a str,
    pub tags: &'a [String],
    pub image: String,
}

impl<'a> PostSummary<'a> {
    pub fn new(post: &'a Post, images: &ImageOptions) -> PostSummary<'a> {
        PostSummary {
            slug: &post.slug,
            title: &post.title,
            description: &post.description,
            date: &post.date,
            display_date: post.display_date(),
            author: &post.author,
            category: &post.category,
            tags: &post.tags,
            image: post.image_path(images.prefix),
        }
    }
}

/// A full post page: summary fields plus the markdown body and its HTML.
#[derive(Serialize, Debug)]
pub struct PostDetail<'a> {
    #[serde(flatten)]
    pub summary: PostSummary<'a>,
    pub banner_image: String,
    pub content: &'a str,
    pub html: String,
}

impl<'a> PostDetail<'a> {
    pub fn new(post: &'a Post, images: &ImageOptions) -> io::Result<PostDetail<'a>> {
        Ok(PostDetail {
            summary: PostSummary::new(post, images),
            banner_image: post.banner_image(images.prefix, images.fallback),
            content: &post.content,
            html: render_post(post)?,
        })
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

pub fn summaries<'a>(posts: &[&'a Post], images: &ImageOptions) -> Vec<PostSummary<'a>> {
    posts.iter().map(|&post| PostSummary::new(post, images)).collect()
}
