use std::{fs, io};
use std::path::{Path, PathBuf};

pub struct PostList {
    pub root_dir: PathBuf,
    pub extension: String,
}

impl PostList {
    /// Post files in directory order. Fails only when the directory itself
    /// cannot be read; entries that cannot be inspected are skipped.
    pub fn retrieve_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut posts = vec![];
        let entries = fs::read_dir(self.root_dir.as_path())?;
        for entry in entries.flatten() {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            if !file_type.is_file() {
                continue;
            }
            let path = entry.path();
            if self.has_post_extension(&path) {
                posts.push(path);
            }
        }
        Ok(posts)
    }

    /// Path a slug maps to. The slug is not validated here.
    pub fn file_for(&self, slug: &str) -> PathBuf {
        self.root_dir.join(format!("{}.{}", slug, self.extension))
    }

    fn has_post_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == self.extension)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir, write};

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_retrieve_files() -> io::Result<()> {
        let dir = TempDir::new()?;
        write(dir.path().join("first.md"), "a")?;
        write(dir.path().join("second.md"), "b")?;
        write(dir.path().join("notes.txt"), "c")?;
        write(dir.path().join("README"), "d")?;
        create_dir(dir.path().join("folder.md"))?;

        let post_list = PostList { root_dir: dir.path().to_path_buf(), extension: "md".to_string() };
        let mut files: Vec<String> = post_list.retrieve_files()?
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        files.sort();
        assert_eq!(files, ["first.md", "second.md"]);
        Ok(())
    }

    #[test]
    fn test_missing_dir() {
        let post_list = PostList { root_dir: PathBuf::from("no/such/posts/dir"), extension: "md".to_string() };
        let err = post_list.retrieve_files().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_file_for() {
        let post_list = PostList { root_dir: PathBuf::from("app/_posts"), extension: "md".to_string() };
        assert_eq!(post_list.file_for("hello-world"), PathBuf::from("app/_posts/hello-world.md"));
    }
}
