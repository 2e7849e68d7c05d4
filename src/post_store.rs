use std::io;
use std::path::{Path, PathBuf};

use spdlog::{debug, info, warn};

use crate::post::Post;
use crate::post_list::PostList;
use crate::text_utils::is_safe_path_segment;

pub const DEFAULT_EXTENSION: &str = "md";

/// Reads posts straight from the posts directory.
///
/// Nothing is kept between calls: every `load_all` and `load_one` goes back to
/// disk, so callers always see the current content of the directory.
pub struct PostStore {
    post_list: PostList,
}

impl PostStore {
    pub fn new(root_dir: &Path) -> PostStore {
        Self::with_extension(root_dir, DEFAULT_EXTENSION)
    }

    pub fn with_extension(root_dir: &Path, extension: &str) -> PostStore {
        PostStore {
            post_list: PostList {
                root_dir: root_dir.to_path_buf(),
                extension: extension.trim_start_matches('.').to_string(),
            },
        }
    }

    pub fn root_dir(&self) -> &PathBuf {
        &self.post_list.root_dir
    }

    /// All posts, newest first. Files with malformed metadata are skipped.
    /// Failing to read the directory is an error.
    pub fn load_all(&self) -> io::Result<Vec<Post>> {
        let files = self.post_list.retrieve_files().map_err(|e| {
            io::Error::new(e.kind(), format!("Error reading posts directory {}: {}", self.root_dir().display(), e))
        })?;

        let mut posts = Vec::with_capacity(files.len());
        for file in files {
            match Post::from_file(&file) {
                Ok(post) => posts.push(post),
                Err(e) => warn!("Skipping post: {}", e),
            }
        }

        sort_by_date_desc(&mut posts);
        debug!("Loaded {} posts from {}", posts.len(), self.root_dir().display());
        Ok(posts)
    }

    /// The post stored as `<slug>.<ext>`, or `None` when the slug is not a
    /// plain file name or the file is missing or malformed.
    pub fn load_one(&self, slug: &str) -> Option<Post> {
        if !is_safe_path_segment(slug) {
            warn!("Rejected post slug {:?}", slug);
            return None;
        }

        let file = self.post_list.file_for(slug);
        match Post::from_file(&file) {
            Ok(post) => Some(post),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("Post not found: {}", slug);
                None
            }
            Err(e) => {
                warn!("Could not load post {}: {}", slug, e);
                None
            }
        }
    }

    /// Slugs of every post in listing order.
    pub fn slugs(&self) -> io::Result<Vec<String>> {
        Ok(self.load_all()?.into_iter().map(|post| post.slug).collect())
    }
}

/// Newest first by lexical comparison of the date strings. Posts with the
/// same date keep their relative order.
pub fn sort_by_date_desc(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date));
}
