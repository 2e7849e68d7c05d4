use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use folio::category_filter::CategoryFilter;
use folio::collection::{by_tag, distinct_categories, latest, tag_counts};
use folio::post::Post;
use folio::post_render::render_post;
use folio::post_store::PostStore;
use folio::search::search;

#[derive(Parser, Debug)]
#[command(version, about = "Query the posts of a folio blog", long_about = None)]
struct Args {
    /// Directory holding the post files
    #[arg(short, long, default_value = "app/_posts")]
    posts_dir: PathBuf,

    /// Extension of the post files
    #[arg(short, long, default_value = "md")]
    extension: String,

    /// Print JSON instead of text
    #[arg(short, long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lists posts, newest first
    List {
        /// Only posts in one of these categories
        #[arg(short, long)]
        category: Vec<String>,
        /// Only posts with this tag
        #[arg(short, long)]
        tag: Option<String>,
    },
    /// Shows a single post
    Show {
        slug: String,
        /// Render the body to HTML
        #[arg(long)]
        html: bool,
    },
    /// Searches titles, descriptions and tags
    Search {
        query: String,
    },
    /// Lists categories in first-seen order
    Categories,
    /// Lists tags, most used first
    Tags,
    /// Lists the most recent posts
    Latest {
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,
        /// Leave this post out
        #[arg(short = 'x', long)]
        exclude: Option<String>,
    },
    /// Lists every slug
    Slugs,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_posts(posts: &[&Post], json: bool) -> Result<()> {
    if json {
        return print_json(&posts);
    }
    for post in posts {
        let (tags, hidden) = post.tag_preview(3);
        let more = if hidden > 0 { format!(" +{}", hidden) } else { String::new() };
        println!("{:<12} {:<30} [{}] {}{}", post.date, post.slug, post.category, tags.join(", "), more);
    }
    Ok(())
}

fn print_strings(values: &[String], json: bool) -> Result<()> {
    if json {
        return print_json(&values);
    }
    for value in values {
        println!("{}", value);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let store = PostStore::with_extension(&args.posts_dir, &args.extension);

    match args.command {
        Command::Show { slug, html } => {
            let Some(post) = store.load_one(&slug) else {
                bail!("Post not found: {}", slug);
            };
            if args.json {
                return print_json(&post);
            }
            print!("{}", post);
            println!("date: {}", post.display_date());
            println!();
            if html {
                println!("{}", render_post(&post)?);
            } else {
                println!("{}", post.content);
            }
        }
        Command::List { category, tag } => {
            let posts = store.load_all()?;
            let filter: CategoryFilter = category.iter().collect();
            let mut shown = match tag {
                Some(ref tag) => by_tag(&posts, tag),
                None => posts.iter().collect(),
            };
            shown.retain(|post| filter.accepts(post));
            print_posts(&shown, args.json)?;
        }
        Command::Search { query } => {
            if query.trim().is_empty() {
                bail!("Search query is empty");
            }
            let posts = store.load_all()?;
            print_posts(&search(&posts, &query), args.json)?;
        }
        Command::Categories => {
            let posts = store.load_all()?;
            print_strings(&distinct_categories(&posts), args.json)?;
        }
        Command::Tags => {
            let counts = tag_counts(&store.load_all()?);
            if args.json {
                return print_json(&counts);
            }
            for (tag, count) in counts {
                println!("{:>4} {}", count, tag);
            }
        }
        Command::Latest { count, exclude } => {
            let posts = store.load_all()?;
            print_posts(&latest(&posts, count, exclude.as_deref()), args.json)?;
        }
        Command::Slugs => print_strings(&store.slugs()?, args.json)?,
    }

    Ok(())
}
