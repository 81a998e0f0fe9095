use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use manhwaweb_api::{CatalogSource, ManhwaWebClient, ManhwaWebError};
use manhwaweb_core::chapters::ChapterPolicy;
use manhwaweb_core::config::AppConfig;
use manhwaweb_core::error::CoreError;
use manhwaweb_core::filters::{
    ContentType, Demography, Erotic, FilterSelection, PublishingState, SortProperty,
    SortSelection, GENRES,
};
use manhwaweb_core::models::Chapter;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error(transparent)]
    Api(#[from] ManhwaWebError),

    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Browse the ManhwaWeb catalog from the command line. Results are printed as JSON.
#[derive(Debug, Parser)]
#[command(name = "manhwaweb", version)]
pub struct Cli {
    /// Config file to use instead of the per-user one.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Most viewed titles.
    Popular,
    /// Most recently updated titles.
    Latest,
    /// Search the library.
    Search(SearchArgs),
    /// Details of a title.
    Details { slug: String },
    /// Chapter list of a title, newest first.
    Chapters {
        slug: String,
        /// Keep raw chapters that already have a Spanish release.
        #[arg(long)]
        all_raws: bool,
    },
    /// Page images of a chapter.
    Pages {
        /// Chapter URL as returned by `chapters`.
        chapter_url: String,
    },
    /// List every filter value accepted by `search`.
    Filters,
    /// Print the per-user config file location.
    ConfigPath,
}

#[derive(Debug, clap::Args)]
pub struct SearchArgs {
    #[arg(default_value = "")]
    pub query: String,

    #[arg(long = "type", value_parser = parse_value::<ContentType>)]
    pub content_type: Option<ContentType>,

    #[arg(long, value_parser = parse_value::<Demography>)]
    pub demography: Option<Demography>,

    #[arg(long, value_parser = parse_value::<PublishingState>)]
    pub status: Option<PublishingState>,

    #[arg(long, value_parser = parse_value::<Erotic>)]
    pub erotic: Option<Erotic>,

    /// Genre id; repeat for several.
    #[arg(long = "genre")]
    pub genres: Vec<u32>,

    #[arg(long, value_parser = parse_value::<SortProperty>)]
    pub sort: Option<SortProperty>,

    #[arg(long, requires = "sort")]
    pub ascending: bool,

    /// 1-based result page.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

impl SearchArgs {
    pub fn filters(&self) -> Vec<FilterSelection> {
        vec![
            FilterSelection::Type {
                value: self.content_type.unwrap_or_default(),
            },
            FilterSelection::Demography {
                value: self.demography.unwrap_or_default(),
            },
            FilterSelection::Status {
                value: self.status.unwrap_or_default(),
            },
            FilterSelection::Erotic {
                value: self.erotic.unwrap_or_default(),
            },
            FilterSelection::genres(self.genres.iter().copied()),
            FilterSelection::Sort(SortSelection {
                property: self.sort,
                ascending: self.ascending,
            }),
        ]
    }
}

/// Parse a filter value by its serialized name, e.g. `one_shot`.
fn parse_value<T: DeserializeOwned>(s: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|_| format!("unknown value `{s}`, see `manhwaweb filters`"))
}

/// Chapter as printed by `chapters`, with the upload time as RFC 3339.
#[derive(Debug, Serialize)]
struct ChapterRow<'a> {
    #[serde(flatten)]
    chapter: &'a Chapter,
    uploaded: Option<String>,
}

impl<'a> From<&'a Chapter> for ChapterRow<'a> {
    fn from(chapter: &'a Chapter) -> Self {
        Self {
            chapter,
            uploaded: chapter.uploaded_at_utc().map(|at| at.to_rfc3339()),
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn filter_listing() -> serde_json::Value {
    fn choices<T: Serialize + Copy>(
        all: &[T],
        label: fn(T) -> &'static str,
    ) -> Vec<serde_json::Value> {
        all.iter()
            .map(|v| serde_json::json!({ "value": v, "label": label(*v) }))
            .collect()
    }

    serde_json::json!({
        "type": choices(ContentType::ALL, ContentType::label),
        "demography": choices(Demography::ALL, Demography::label),
        "status": choices(PublishingState::ALL, PublishingState::label),
        "erotic": choices(Erotic::ALL, Erotic::label),
        "sort": choices(SortProperty::ALL, SortProperty::label),
        "genre": GENRES
            .iter()
            .map(|g| serde_json::json!({ "value": g.id, "label": g.name }))
            .collect::<Vec<_>>(),
    })
}

pub async fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    let client = ManhwaWebClient::from_config(&config);

    match cli.command {
        Command::Popular => print_json(&client.popular(1).await?),
        Command::Latest => print_json(&client.latest(1).await?),
        Command::Search(args) => {
            let filters = args.filters();
            tracing::info!(query = %args.query, page = args.page, "Searching");
            print_json(&client.search(&args.query, &filters, args.page).await?)
        }
        Command::Details { slug } => print_json(&client.details(&slug).await?),
        Command::Chapters { slug, all_raws } => {
            let policy = if all_raws {
                ChapterPolicy::IncludeAllRaw
            } else {
                config.chapter_policy()
            };
            let chapters = client.chapters(&slug, policy).await?;
            tracing::info!(count = chapters.len(), ?policy, "Fetched chapters");
            let rows: Vec<ChapterRow> = chapters.iter().map(ChapterRow::from).collect();
            print_json(&rows)
        }
        Command::Pages { chapter_url } => print_json(&client.pages(&chapter_url).await?),
        Command::Filters => print_json(&filter_listing()),
        Command::ConfigPath => {
            println!("{}", AppConfig::config_path().display());
            Ok(())
        }
    }
}
