use clap::{Parser, Subcommand};
use copydesk::output::{CheckEntry, CheckSection};
use copydesk::types::ContentType;
use copydesk::{config, output, resolve, store};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "copydesk")]
#[command(about = "Content repository inspector for a markdown-driven site")]
#[command(long_about = "\
Content repository inspector for a markdown-driven site

Your filesystem is the data source. Each content type is a directory of
markdown documents with YAML frontmatter; slugs come from file and
directory names, never from metadata.

Content structure (three coexisting layout generations, newest preferred):

  content/
  ├── config.toml                        # Site config (optional)
  ├── blog/
  │   ├── hello-world/markdown/post.md   # Current layout
  │   ├── old-post.md                    # Legacy: flat
  │   └── mid-era/post.md                # Legacy: nested
  ├── portfolio/
  ├── case-studies/
  ├── videos/
  └── podcasts/

Both .md and .mdx are recognized everywhere.

Run 'copydesk check' to inventory every collection and see which layout
generation backs each document.")]
#[command(version)]
struct Cli {
    /// Content directory (default: content_root from ./config.toml)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all items of a content type, newest first
    List {
        content_type: ContentType,
        /// Emit the full items as pretty-printed JSON
        #[arg(long)]
        json: bool,
    },
    /// Fetch a single item by slug
    Get {
        content_type: ContentType,
        slug: String,
        /// Emit the full item as pretty-printed JSON
        #[arg(long)]
        json: bool,
    },
    /// Inventory every collection and the layout generation behind each document
    Check,
    /// Print the known content types
    Types,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let root = resolve_content_root(cli.source.as_deref())?;

    match cli.command {
        Command::List { content_type, json } => {
            let items = store::list_content(&root, content_type)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                output::print_list_output(content_type, &items);
            }
        }
        Command::Get {
            content_type,
            slug,
            json,
        } => match store::get_content(&root, content_type, &slug)? {
            Some(item) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&item)?);
                } else {
                    output::print_item_output(&item);
                }
            }
            None => {
                return Err(format!("no {content_type} item with slug '{slug}'").into());
            }
        },
        Command::Check => {
            let mut sections = Vec::new();
            for ty in ContentType::ALL {
                sections.push(check_section(&root, *ty)?);
            }
            output::print_check_output(&sections);
        }
        Command::Types => {
            for ty in ContentType::ALL {
                println!("{ty}");
            }
        }
    }

    Ok(())
}

/// Content root from `--source`, or `content_root` in `./config.toml`.
fn resolve_content_root(cli_source: Option<&Path>) -> Result<PathBuf, config::ConfigError> {
    match cli_source {
        Some(source) => Ok(source.to_path_buf()),
        None => {
            let config = config::load_config(Path::new("."))?;
            Ok(PathBuf::from(config.content_root))
        }
    }
}

/// Build one check section: validated items joined with layout provenance.
fn check_section(root: &Path, ty: ContentType) -> Result<CheckSection, store::StoreError> {
    let located: BTreeMap<String, resolve::Located> = resolve::resolve_all(root, ty)?
        .into_iter()
        .map(|l| (l.slug.clone(), l))
        .collect();

    let mut entries = Vec::new();
    for item in store::list_content(root, ty)? {
        // A document can vanish between the two passes; skip it then.
        let Some(found) = located.get(&item.slug) else {
            continue;
        };
        let source = found
            .path
            .strip_prefix(root)
            .unwrap_or(&found.path)
            .display()
            .to_string();
        entries.push(CheckEntry {
            item,
            source,
            layout: found.layout,
        });
    }

    Ok(CheckSection { ty, entries })
}
