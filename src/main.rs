use clap::{Parser, Subcommand};
use mdpager::{config, generate, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdpager")]
#[command(about = "Paginated JSON post indexes for a static markdown blog")]
#[command(long_about = "\
Paginated JSON post indexes for a static markdown blog

Your filesystem is the data source: a flat directory of markdown files is
the post corpus, and filenames carry the publication order.

Content structure:

  posts/
  ├── 001-first-post.md            # Oldest post (zero-padded prefix = sort key)
  ├── 013-new-post.md              # Newest post (highest filename sorts first)
  └── about.md                     # Unnumbered posts are fine too

Each post contributes one list entry:
  Title:    first '# heading', or derived from the filename (013-new-post.md → \"13 New post\")
  Excerpt:  first text paragraph, truncated; a lone YouTube URL becomes a
            video preview instead
  Preview:  first image reference anywhere in the post

Output (fetched by the client app at runtime):

  public/pages/
  ├── meta.json                    # { totalPages, postsPerPage }
  ├── 1.json                       # { page, posts: [...] } — newest posts
  └── 2.json ...

Every run regenerates everything; point your build or file watcher at
'mdpager build'.")]
#[command(version)]
struct Cli {
    /// Posts directory (flat, *.md files)
    #[arg(long, default_value = "posts", global = true)]
    posts: PathBuf,

    /// Output directory for meta.json and page files
    #[arg(long, default_value = "public/pages", global = true)]
    output: PathBuf,

    /// Config file (optional; stock defaults when missing or malformed)
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan posts and write meta.json plus one JSON file per page
    Build,
    /// Scan posts and print the inventory without writing anything
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let blog_config = config::load_config(&cli.config);

    match cli.command {
        Command::Build => {
            let summary = generate::generate(&cli.posts, &cli.output, &blog_config)?;
            output::print_post_inventory(&summary.posts);
            output::print_run_summary(&summary, &cli.output);
        }
        Command::Check => {
            if !cli.posts.exists() {
                println!(
                    "Posts directory {} does not exist — build would write an empty manifest",
                    cli.posts.display()
                );
                return Ok(());
            }
            let posts = scan::scan_posts(&cli.posts, &blog_config)?;
            output::print_post_inventory(&posts);
            println!("{} posts, nothing written", posts.len());
        }
    }

    Ok(())
}
