use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use runtime::{AppConfig, CliArgs, DatabaseConfig};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use api_ingress::{ApiIngress, ApiIngressConfig};
use perks::Perks;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const MEMORY_DSN: &str = "sqlite::memory:";

/// Expand a sqlite DSN into an absolute-path DSN using a base directory.
/// - Keeps "sqlite::memory:" as-is.
/// - Normalizes backslashes into forward slashes (important on Windows).
/// - Adds `mode=rwc` when no query is given so the file is created on first run.
fn absolutize_sqlite_dsn(dsn: &str, base_dir: &Path, create_dirs: bool) -> Result<String> {
    if dsn.eq_ignore_ascii_case(MEMORY_DSN) || dsn.eq_ignore_ascii_case("sqlite://:memory:") {
        return Ok(MEMORY_DSN.to_string());
    }
    let db_path = dsn
        .strip_prefix("sqlite://")
        .ok_or_else(|| anyhow!("DSN must start with sqlite:// (got: {})", dsn))?;

    let (path_str, query) = match db_path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (db_path, None),
    };

    let mut p = PathBuf::from(path_str);
    if p.as_os_str().is_empty() {
        return Err(anyhow!("Empty SQLite path in DSN"));
    }
    if p.is_relative() {
        p = base_dir.join(p);
    }

    if let Some(dir) = p.parent() {
        if create_dirs {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create database dir {}", dir.display()))?;
        }
    }

    let mut out = String::from("sqlite://");
    out.push_str(&p.to_string_lossy().replace('\\', "/"));
    out.push('?');
    out.push_str(query.unwrap_or("mode=rwc"));
    Ok(out)
}

/// Perks Server - merchant perks catalogue over HTTP
#[derive(Parser)]
#[command(name = "perks-server")]
#[command(about = "Perks Server - merchant perks catalogue over HTTP")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use an in-memory SQLite database
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI args passed down to config/app
    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
        mock: cli.mock,
    };

    // Load configuration (normalized home_dir is applied inside)
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    let logging_config = config.logging.clone().unwrap_or_default();
    runtime::logging::init_logging_from_config(&logging_config, Path::new(&config.server.home_dir));
    tracing::info!("Perks Server starting");

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config, args).await,
        Commands::Check => check_config(config, args),
    }
}

/// Detect DB backend from URL scheme (sqlite/postgres).
fn detect_from_dsn(cfg: &DatabaseConfig) -> Result<&'static str> {
    let raw = cfg.url.trim().to_owned();
    if raw.is_empty() {
        return Err(anyhow!("Database URL not configured"));
    }

    let url = Url::parse(&raw).map_err(|e| anyhow!("Invalid database DSN '{}': {}", raw, e))?;

    match url.scheme() {
        "sqlite" | "sqlite3" => Ok("sqlite"),
        "postgres" | "postgresql" => Ok("postgres"),
        other => Err(anyhow!("Unsupported database type: {}", other)),
    }
}

fn database_config(config: &AppConfig) -> DatabaseConfig {
    config.database.clone().unwrap_or_else(|| DatabaseConfig {
        url: "sqlite://database/perks.db".to_string(),
        max_conns: Some(10),
        busy_timeout_ms: Some(5000),
    })
}

/// `modules.api_ingress`, falling back to `server.host:server.port` when no
/// `bind_addr` is configured. `--port` always wins.
fn ingress_config(config: &AppConfig, args: &CliArgs) -> Result<ApiIngressConfig> {
    let mut cfg: ApiIngressConfig = config.module_config("api_ingress")?;

    let has_bind_addr = config
        .modules
        .get("api_ingress")
        .and_then(|v| v.get("bind_addr"))
        .is_some();
    if !has_bind_addr {
        cfg.bind_addr = format!("{}:{}", config.server.host, config.server.port);
    }

    if let Some(port) = args.port {
        let mut addr: SocketAddr = cfg
            .bind_addr
            .parse()
            .map_err(|e| anyhow!("Invalid bind address '{}': {}", cfg.bind_addr, e))?;
        addr.set_port(port);
        cfg.bind_addr = addr.to_string();
    }

    Ok(cfg)
}

async fn connect_database(
    db_config: &DatabaseConfig,
    base_dir: &Path,
    mock: bool,
) -> Result<DatabaseConnection> {
    let dsn = if mock {
        MEMORY_DSN.to_string()
    } else {
        let backend = detect_from_dsn(db_config)?;
        tracing::info!("Database backend: {}", backend);
        let raw = db_config.url.trim().to_owned();
        if backend == "sqlite" {
            absolutize_sqlite_dsn(&raw, base_dir, true)?
        } else {
            raw
        }
    };

    let mut opts = ConnectOptions::new(dsn.clone());
    opts.acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    if dsn == MEMORY_DSN {
        // Every pooled connection would otherwise get its own empty database
        opts.max_connections(1).min_connections(1);
    } else {
        opts.max_connections(db_config.max_conns.unwrap_or(10));
    }

    let busy_timeout =
        Duration::from_millis(u64::from(db_config.busy_timeout_ms.unwrap_or(5000)));
    opts.map_sqlx_sqlite_opts(move |o| o.busy_timeout(busy_timeout));

    tracing::info!("Connecting to database: {}", dsn);
    Database::connect(opts)
        .await
        .with_context(|| format!("connect to database '{dsn}'"))
}

async fn run_server(config: AppConfig, args: CliArgs) -> Result<()> {
    tracing::info!("Initializing modules...");

    // Fail on a bad bind address before touching the database
    let ingress_cfg = ingress_config(&config, &args)?;
    let _: SocketAddr = ingress_cfg
        .bind_addr
        .parse()
        .map_err(|e| anyhow!("Invalid bind address '{}': {}", ingress_cfg.bind_addr, e))?;

    let base_dir = PathBuf::from(&config.server.home_dir);
    let db = connect_database(&database_config(&config), &base_dir, args.mock).await?;
    let perks = Perks::init(db).await?;

    let mut ingress = ApiIngress::new(ingress_cfg);
    if config.server.timeout_sec > 0 {
        ingress = ingress.with_request_timeout(Duration::from_secs(config.server.timeout_sec));
    }
    let router = ingress.build_router(perks.router(), Some(perks.openapi()))?;

    let shutdown = async {
        if let Err(e) = runtime::shutdown::wait_for_shutdown().await {
            tracing::warn!("Signal handling failed: {}", e);
        }
    };

    tracing::info!("Serving on {}", ingress.config().bind_addr);
    ingress.serve(router, shutdown).await
}

fn check_config(config: AppConfig, args: CliArgs) -> Result<()> {
    tracing::info!("Checking configuration...");

    let ingress_cfg = ingress_config(&config, &args)?;
    if !args.mock {
        detect_from_dsn(&database_config(&config))?;
    }

    tracing::info!("Configuration is valid");
    println!("Configuration check passed");
    println!("Bind address: {}", ingress_cfg.bind_addr);
    println!("{}", config.to_yaml()?);

    Ok(())
}
