//! Build the content index and write generated files

use anyhow::Result;

use crate::generator::Generator;
use crate::i18n::Language;
use crate::Blog;

/// Generate the content export
pub fn run(blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    let index = blog.build_index();
    for lang in Language::ALL {
        tracing::info!(
            "{}: {} posts, {} categories",
            lang,
            index.sorted_posts(lang).len(),
            index.category_infos(lang).len()
        );
    }

    let generator = Generator::new(blog);
    let path = generator.generate(&index)?;
    tracing::debug!("Wrote {:?}", path);

    let duration = start.elapsed();
    tracing::info!("Completed in {:.2}s", duration.as_secs_f64());

    Ok(())
}
