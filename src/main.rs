//! CLI entry point for duolog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use duolog::commands::list::PostFilter;
use duolog::commands::new::NewPost;
use duolog::i18n::Language;
use duolog::Blog;

#[derive(Parser)]
#[command(name = "duolog")]
#[command(version)]
#[command(about = "Content indexer for a bilingual (Korean/English) markdown blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index the content and write llms-full.txt
    #[command(alias = "g")]
    Generate,

    /// List site content
    List {
        /// Type of content to list (post, tag, category, section)
        #[arg(default_value = "post")]
        r#type: String,

        /// Language (ko, en); unknown values fall back to the default
        #[arg(short, long)]
        lang: Option<String>,

        /// Only posts with this tag
        #[arg(long)]
        tag: Option<String>,

        /// Only posts in this section
        #[arg(long)]
        section: Option<String>,

        /// Only posts in this category
        #[arg(long)]
        category: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show one post with its translation and FAQ
    Show {
        /// Post id (file name without .md)
        id: String,

        #[arg(short, long)]
        lang: Option<String>,

        /// Include the markdown body
        #[arg(long)]
        body: bool,

        #[arg(long)]
        json: bool,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        #[arg(short, long)]
        lang: Option<String>,

        /// Category directory to create the post in
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// File name without extension (defaults to the slugified title)
        #[arg(short, long)]
        slug: Option<String>,

        /// Id of the same post in the other language
        #[arg(short, long)]
        translation: Option<String>,
    },

    /// Report dates, translation links and categories that need fixing
    Check {
        #[arg(long)]
        json: bool,
    },

    /// Remove generated files
    Clean,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "duolog=debug,info"
    } else {
        "duolog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Generate => {
            let blog = Blog::new(&base_dir)?;
            tracing::info!("Generating content export...");
            blog.generate()?;
            println!("Generated successfully!");
        }

        Commands::List {
            r#type,
            lang,
            tag,
            section,
            category,
            json,
        } => {
            let blog = Blog::new(&base_dir)?;
            let lang = resolve_lang(&blog, lang.as_deref());
            let filter = PostFilter {
                tag,
                section,
                category,
            };
            duolog::commands::list::run(&blog, &r#type, lang, &filter, json)?;
        }

        Commands::Show {
            id,
            lang,
            body,
            json,
        } => {
            let blog = Blog::new(&base_dir)?;
            let lang = resolve_lang(&blog, lang.as_deref());
            duolog::commands::show::run(&blog, lang, &id, body, json)?;
        }

        Commands::New {
            title,
            lang,
            category,
            slug,
            translation,
        } => {
            let blog = Blog::new(&base_dir)?;
            let lang = resolve_lang(&blog, lang.as_deref());
            tracing::info!("Creating new {} post with title: {}", lang, title);
            let path = duolog::commands::new::create_post(
                &blog,
                &NewPost {
                    title: &title,
                    lang,
                    category: category.as_deref(),
                    slug: slug.as_deref(),
                    translation: translation.as_deref(),
                },
            )?;
            println!("Created: {:?}", path);
        }

        Commands::Check { json } => {
            let blog = Blog::new(&base_dir)?;
            duolog::commands::check::run(&blog, json)?;
        }

        Commands::Clean => {
            let blog = Blog::new(&base_dir)?;
            tracing::info!("Cleaning generated files...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("duolog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Language from the command line, or the configured default
fn resolve_lang(blog: &Blog, code: Option<&str>) -> Language {
    Language::from_code_or(code.unwrap_or(""), blog.config.default_language)
}
