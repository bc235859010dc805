use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use geojson_sql::{
    BoundStatement, Feature, GeoJsonHelper, HelperConfig, register_geometry_functions,
};
use rusqlite::Connection;
use serde_json::{Value as JsonValue, json};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "geojson-sql")]
#[command(about = "Insert, update or delete geometry table rows from GeoJSON features")]
struct Cli {
    /// Helper configuration: table mapping and date formats, as JSON
    #[arg(long)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Insert(WriteArgs),
    Update(WriteArgs),
    Delete(WriteArgs),
}

#[derive(Args)]
struct WriteArgs {
    /// Feature or FeatureCollection file
    #[arg(long)]
    input: PathBuf,

    /// SQLite database to write to
    #[arg(long, required_unless_present = "dry_run", conflicts_with = "dry_run")]
    database: Option<PathBuf>,

    /// Print the statements and parameters as JSON lines instead of executing
    #[arg(long)]
    dry_run: bool,

    /// Define ST_GeomFromText as an EWKT text constructor (plain SQLite without SpatiaLite)
    #[arg(long)]
    ewkt_fallback: bool,
}

#[derive(Clone, Copy)]
enum Operation {
    Insert,
    Update,
    Delete,
}

impl Operation {
    fn name(self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let cli = Cli::parse();
    let config = HelperConfig::from_file(&cli.config)
        .with_context(|| format!("Failed to load config '{}'", cli.config.display()))?;

    let (operation, args) = match cli.command {
        Command::Insert(args) => (Operation::Insert, args),
        Command::Update(args) => (Operation::Update, args),
        Command::Delete(args) => (Operation::Delete, args),
    };

    let features = read_features(&args.input)?;

    match args.database {
        Some(path) if !args.dry_run => {
            run(config, operation, &features, &path, args.ewkt_fallback)
        }
        _ => dry_run(config, operation, &features),
    }
}

fn read_features(path: &Path) -> Result<Vec<Feature>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    let document: JsonValue = serde_json::from_str(&text)
        .with_context(|| format!("'{}' is not valid JSON", path.display()))?;
    Ok(Feature::collection_from_value(&document)?)
}

fn prepare(
    helper: &GeoJsonHelper<Connection>,
    operation: Operation,
    feature: &Feature,
) -> geojson_sql::Result<BoundStatement> {
    match operation {
        Operation::Insert => helper.prepare_insert(feature),
        Operation::Update => helper.prepare_update(feature),
        Operation::Delete => helper.prepare_delete(feature),
    }
}

fn dry_run(config: HelperConfig, operation: Operation, features: &[Feature]) -> Result<()> {
    let helper = GeoJsonHelper::<Connection>::new(config);

    for (index, feature) in features.iter().enumerate() {
        let statement = prepare(&helper, operation, feature)
            .with_context(|| format!("Feature #{} cannot be translated", index))?;
        let params: Vec<JsonValue> = statement.params().iter().map(|p| p.to_json()).collect();
        println!("{}", json!({ "sql": statement.sql(), "params": params }));
    }

    Ok(())
}

fn run(
    config: HelperConfig,
    operation: Operation,
    features: &[Feature],
    database: &Path,
    ewkt_fallback: bool,
) -> Result<()> {
    let conn = Connection::open(database)
        .with_context(|| format!("Failed to open database '{}'", database.display()))?;
    if ewkt_fallback {
        register_geometry_functions(&conn).context("Failed to register ST_GeomFromText")?;
    }

    let mut helper = GeoJsonHelper::with_connection(config, conn);
    let mut affected = 0;

    for (index, feature) in features.iter().enumerate() {
        let rows = match operation {
            Operation::Insert => helper.insert(feature),
            Operation::Update => helper.update(feature),
            Operation::Delete => helper.delete(feature),
        }
        .with_context(|| format!("Failed to {} feature #{}", operation.name(), index))?;
        affected += rows;
    }

    info!(
        operation = operation.name(),
        table = helper.mapping().table(),
        features = features.len(),
        affected,
        "done"
    );
    println!("{} feature(s), {} row(s) affected", features.len(), affected);

    Ok(())
}
