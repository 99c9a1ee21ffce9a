//! Remove generated files

use anyhow::Result;
use std::fs;

use crate::generator::Generator;
use crate::Blog;

/// Delete the generated export, and the public directory if that leaves it empty
pub fn run(blog: &Blog) -> Result<()> {
    let export = Generator::new(blog).llms_full_path();
    if export.exists() {
        fs::remove_file(&export)?;
        tracing::info!("Deleted: {:?}", export);
    }

    if blog.public_dir.is_dir() && fs::read_dir(&blog.public_dir)?.next().is_none() {
        fs::remove_dir(&blog.public_dir)?;
        tracing::info!("Deleted: {:?}", blog.public_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_export_only() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        fs::create_dir_all(&blog.public_dir).unwrap();
        fs::write(blog.public_dir.join("llms-full.txt"), "x").unwrap();
        fs::write(blog.public_dir.join("index.html"), "x").unwrap();

        run(&blog).unwrap();
        assert!(!blog.public_dir.join("llms-full.txt").exists());
        assert!(blog.public_dir.join("index.html").exists());
    }

    #[test]
    fn test_clean_removes_empty_public_dir() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        fs::create_dir_all(&blog.public_dir).unwrap();
        fs::write(blog.public_dir.join("llms-full.txt"), "x").unwrap();

        run(&blog).unwrap();
        assert!(!blog.public_dir.exists());
        // Nothing to do the second time
        run(&blog).unwrap();
    }
}
