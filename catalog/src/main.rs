use anyhow::Context;
use catalog::models::{FilterStatus, SortBy, ViewMode};
use catalog::report::{render_detail, render_projection, render_stats};
use catalog::services::CatalogService;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use common::config::Settings;
use std::process;
use tracing::info;

fn cli() -> Command {
    Command::new("Data Product Catalog")
        .version("1.0")
        .about("Browses the data-product catalog from the command line")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .global(true)
                .help("Sets a custom config file"),
        )
        .arg(
            Arg::new("now")
                .long("now")
                .value_name("DATE")
                .global(true)
                .help("Reference date for health and age (YYYY-MM-DD or RFC 3339)"),
        )
        .subcommand(Command::new("stats").about("Print the catalog summary strip"))
        .subcommand(
            Command::new("list")
                .about("Print the products for a view mode")
                .arg(
                    Arg::new("search")
                        .short('s')
                        .long("search")
                        .value_name("TEXT")
                        .help("Case-insensitive match on name, owner and description"),
                )
                .arg(
                    Arg::new("filter")
                        .short('f')
                        .long("filter")
                        .value_parser(["all", "certified", "published", "draft"]),
                )
                .arg(
                    Arg::new("sort")
                        .long("sort")
                        .value_parser(["name", "updated", "owner"]),
                )
                .arg(
                    Arg::new("view")
                        .short('v')
                        .long("view")
                        .value_parser(["grid", "expansion", "table"]),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit the projection as JSON"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Print the detail view of one product")
                .arg(
                    Arg::new("id")
                        .required(true)
                        .value_parser(value_parser!(i64)),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit the detail as JSON"),
                ),
        )
}

fn load_service(matches: &ArgMatches) -> anyhow::Result<CatalogService> {
    let config_path = matches
        .get_one::<String>("config")
        .map(|s| s.as_str())
        .unwrap_or("config/catalog.toml");

    let mut settings = Settings::new(config_path)
        .with_context(|| format!("failed to load config from {}", config_path))?;
    if let Some(now) = matches.get_one::<String>("now") {
        settings.clock.now = Some(now.clone());
    }

    catalog::init_tracing(&settings.logging);
    settings.log_loaded(config_path);
    info!(config = config_path, "Starting catalog");

    CatalogService::from_settings(&settings).context("failed to build catalog")
}

fn run(matches: ArgMatches) -> anyhow::Result<()> {
    let service = load_service(&matches)?;

    match matches.subcommand() {
        Some(("stats", _)) => {
            print!("{}", render_stats(&service.stats()));
        }
        Some(("list", list_matches)) => {
            if let Some(query) = list_matches.get_one::<String>("search") {
                service.set_search_query(query.as_str());
            }
            if let Some(filter) = list_matches.get_one::<String>("filter") {
                service.set_filter_status(filter.parse::<FilterStatus>()?);
            }
            if let Some(sort) = list_matches.get_one::<String>("sort") {
                service.set_sort_by(sort.parse::<SortBy>()?);
            }
            if let Some(view) = list_matches.get_one::<String>("view") {
                service.set_view_mode(view.parse::<ViewMode>()?);
            }

            let projection = service.projection();
            if list_matches.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(projection.as_ref())?);
            } else {
                print!("{}", render_projection(&projection));
            }
        }
        Some(("show", show_matches)) => {
            let id = *show_matches
                .get_one::<i64>("id")
                .context("missing product id")?;
            let detail = service.select(id)?;
            if show_matches.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&detail)?);
            } else {
                print!("{}", render_detail(&detail));
            }
        }
        _ => {
            anyhow::bail!("No subcommand specified. Use --help for usage information.");
        }
    }

    Ok(())
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = run(matches) {
        eprintln!("Catalog error: {:#}", e);
        process::exit(1);
    }
}
