mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use marquee_config::{ConfigLoad, ConfigLoader, ConfigWarnings};
use marquee_core::{ContentClient, DashboardLoader, HomeFeed};
use marquee_model::{
    ImageSize, ListCategory, MediaKind, TimeWindow, TrendingKind,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(about = "Browse TMDB trending, popular and curated catalog rows")]
struct Cli {
    /// Path to a marquee.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to a .env file to load before reading the environment
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the home dashboard: hero banner plus every configured row
    Home(HomeArgs),
    /// Trending titles
    Trending {
        #[arg(long, default_value = "all")]
        kind: TrendingKind,
        #[arg(long, default_value = "week")]
        window: TimeWindow,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Popular titles
    Popular {
        #[arg(long, default_value = "movie")]
        kind: MediaKind,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// A curated list such as top_rated, now_playing or airing_today
    List {
        category: ListCategory,
        #[arg(long, default_value = "movie")]
        kind: MediaKind,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// One title with videos, cast, similar titles and recommendations
    Details { kind: MediaKind, id: u64 },
    /// Genre names for movies or TV
    Genres {
        #[arg(long, default_value = "movie")]
        kind: MediaKind,
    },
    /// Search movies, TV and people
    Search {
        query: String,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Compose a full image URL from a relative image path
    ImageUrl {
        path: String,
        #[arg(long, default_value = "w500")]
        size: ImageSize,
    },
}

#[derive(Args, Debug, Default, Clone)]
struct HomeArgs {
    /// Print the loaded dashboard as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone, Copy)]
struct PageArgs {
    /// Result page, starting at 1
    #[arg(long, default_value_t = 1)]
    page: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let ConfigLoad { config, warnings } = load_config(&cli)?;
    log_warnings(&warnings);

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "configuration file loaded");
    }

    let client = Arc::new(ContentClient::new(config.tmdb.clone()));

    match cli.command.unwrap_or(Command::Home(HomeArgs::default())) {
        Command::Home(args) => {
            let feed = HomeFeed::new(client.clone(), config.home.rows.clone());
            let mut mount = DashboardLoader::mount(Arc::new(feed));
            let state = mount.settled().await;

            if let Some(message) = state.error_message() {
                bail!("{message}");
            }
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&state)
                        .context("failed to encode dashboard")?
                );
            } else if let Some(dashboard) = state.dashboard() {
                print!("{}", render::dashboard(dashboard, &client));
            }
        }
        Command::Trending {
            kind,
            window,
            paging,
        } => {
            let page = client
                .trending(kind, window, paging.page)
                .await
                .context("failed to fetch trending titles")?;
            print!("{}", render::results(&page));
        }
        Command::Popular { kind, paging } => {
            let page = client
                .popular(kind, paging.page)
                .await
                .context("failed to fetch popular titles")?;
            print!("{}", render::results(&page));
        }
        Command::List {
            category,
            kind,
            paging,
        } => {
            let page = client
                .list_by_category(kind, category, paging.page)
                .await
                .with_context(|| format!("failed to fetch {kind} {category}"))?;
            print!("{}", render::results(&page));
        }
        Command::Details { kind, id } => {
            let details = client
                .details_with_related(kind, id)
                .await
                .with_context(|| format!("failed to fetch {kind} {id}"))?;
            print!("{}", render::details(&details));
        }
        Command::Genres { kind } => {
            let genres = client
                .genres(kind)
                .await
                .context("failed to fetch genres")?;
            for genre in genres {
                println!("{:>6}  {}", genre.id, genre.name);
            }
        }
        Command::Search { query, paging } => {
            let page = client
                .search_multi(&query, paging.page)
                .await
                .context("search failed")?;
            print!("{}", render::results(&page));
        }
        Command::ImageUrl { path, size } => {
            if let Some(url) = client.image_url(Some(&path), size) {
                println!("{url}");
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<ConfigLoad> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &cli.env_file {
        loader = loader.with_env_file(path);
    }
    loader.load().context("failed to load configuration")
}

fn log_warnings(warnings: &ConfigWarnings) {
    for warning in warnings.iter() {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }
}
