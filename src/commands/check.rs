//! Report content inconsistencies

use anyhow::Result;

use crate::content::audit::{audit, Issue};
use crate::Blog;

/// Print every issue; fails when any was found
pub fn run(blog: &Blog, json: bool) -> Result<()> {
    let index = blog.build_index();
    let issues = audit(&index);

    if json {
        println!("{}", serde_json::to_string_pretty(&issues)?);
    } else {
        for issue in &issues {
            println!("{}", issue);
        }
    }

    report(&issues)
}

fn report(issues: &[Issue]) -> Result<()> {
    if issues.is_empty() {
        tracing::info!("No issues found");
        Ok(())
    } else {
        anyhow::bail!("{} issue(s) found", issues.len())
    }
}
