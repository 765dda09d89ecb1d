use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::sync::RwLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brawl_draft::api::state::AppState;
use brawl_draft::calculate::{RankedBrawler, RankedView, RankingQuery, SortMode, TypeFilter};
use brawl_draft::config::AppConfig;
use brawl_draft::draft::{reduce, DraftEvent, DraftState};
use brawl_draft::format_rate;
use brawl_draft::loader::{BrawlerTables, DataLoader, DataSource, LoadState};
use brawl_draft::models::Team;

#[derive(Parser)]
#[command(name = "brawl-draft")]
#[command(about = "Per-map brawler statistics and draft simulator")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Statistics source (file path or URL), overrides the config
    #[arg(long)]
    stats: Option<DataSource>,

    /// Brawler type source (file path or URL), overrides the config
    #[arg(long)]
    types: Option<DataSource>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Port number
        #[arg(long)]
        port: Option<u16>,

        /// Directory of static assets served for non-API paths
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// List maps in mode order
    Maps,

    /// List brawler types
    Types,

    /// Rank brawlers on a map
    Rank {
        /// Map to rank (default: first map in mode order)
        #[arg(long)]
        map: Option<String>,

        /// Only list remaining brawlers of this type ("all" for no filter)
        #[arg(long = "type", default_value = "all")]
        filter_type: String,

        /// Order of the remaining brawlers: "pick" or "alpha"
        #[arg(long, default_value = "pick")]
        sort: SortMode,

        /// Size of the top set (default: from config)
        #[arg(long)]
        top: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Simulate a draft by picking brawlers in order
    Draft {
        /// Map to draft on (default: first map in mode order)
        #[arg(long)]
        map: Option<String>,

        /// Brawlers to pick; team A fills first, picking again removes
        #[arg(long = "pick")]
        picks: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(stats) = cli.stats {
        config.data.stats_source = stats;
    }
    if let Some(types) = cli.types {
        config.data.types_source = types;
    }
    let log_level = cli.log_level.unwrap_or_else(|| config.log_level.clone());

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(cli.json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!cli.json_logs).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!("Starting brawl-draft v{}", env!("CARGO_PKG_VERSION"));

    let loader = DataLoader::from_config(&config.data)?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            static_dir,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if static_dir.is_some() {
                config.server.static_dir = static_dir;
            }
            config.validate()?;

            let data = Arc::new(RwLock::new(LoadState::Loading));
            let load_target = Arc::clone(&data);
            tokio::spawn(async move {
                loader.load_into(&load_target).await;
            });

            let state = AppState {
                data,
                top_size: config.ranking.top_size,
                static_dir: config.server.static_dir.clone(),
                cors_origin: config.server.cors_origin.clone(),
            };
            let app = brawl_draft::api::build_router(state);
            let addr = format!("{}:{}", config.server.host, config.server.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Dashboard: http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Maps => {
            let tables = loader.load().await?;
            for (i, map) in tables.maps.maps().iter().enumerate() {
                println!("{:>3}. {:<12} {}", i + 1, map.mode, map.name);
            }
            if !tables.maps.unmatched().is_empty() {
                println!(
                    "\n{} maps match no game mode: {}",
                    tables.maps.unmatched().len(),
                    tables.maps.unmatched().join(", ")
                );
            }
        }
        Commands::Types => {
            let tables = loader.load().await?;
            for t in tables.types.all_types() {
                println!("{}", t);
            }
        }
        Commands::Rank {
            map,
            filter_type,
            sort,
            top,
            json,
        } => {
            let tables = loader.load().await?;
            let map = resolve_map(&tables, map)?;
            let query = RankingQuery::new(map)
                .with_filter(TypeFilter::from(filter_type.as_str()))
                .with_sort(sort)
                .with_top_size(top.unwrap_or(config.ranking.top_size));
            let view = tables.rank(&query);

            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print_view(&view, &query);
            }
        }
        Commands::Draft { map, picks } => {
            let tables = loader.load().await?;
            let map = resolve_map(&tables, map)?;

            let state = picks.into_iter().fold(
                reduce(DraftState::default(), DraftEvent::SelectMap { map }),
                |state, brawler| reduce(state, DraftEvent::Pick { brawler }),
            );

            println!("Map: {}", state.selected_map.as_deref().unwrap_or("-"));
            print_team("Team A", &state.teams.a);
            print_team("Team B", &state.teams.b);
        }
    }

    Ok(())
}

/// Use the requested map, or the catalog's default.
fn resolve_map(tables: &BrawlerTables, map: Option<String>) -> Result<String> {
    match map {
        Some(map) if tables.has_map(&map) => Ok(map),
        Some(map) => anyhow::bail!("No statistics for map {}", map),
        None => tables
            .maps
            .default_map()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("No maps in the statistics")),
    }
}

fn print_brawler(rank: usize, b: &RankedBrawler) {
    println!(
        "{:>3}. {:<16} pick {:>7}  win {:>7}  {}",
        rank,
        b.brawler,
        format_rate(b.pick_rate),
        format_rate(b.win_rate),
        b.brawler_type.as_ref().map(|t| t.as_str()).unwrap_or("")
    );
}

fn print_view(view: &RankedView, query: &RankingQuery) {
    println!("Top {} picks on {}", query.top_size, view.map);
    for (i, b) in view.top.iter().enumerate() {
        print_brawler(i + 1, b);
    }

    println!(
        "\nAvailable brawlers (type: {}, sort: {})",
        query.filter, query.sort
    );
    for (i, b) in view.remaining.iter().enumerate() {
        print_brawler(i + 1, b);
    }
}

fn print_team(label: &str, team: &Team) {
    let slots: Vec<&str> = team.slots().iter().map(|s| s.unwrap_or("-")).collect();
    println!("{}: [{}]", label, slots.join(", "));
}
