use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use staybook_core::usecases;
use staybook_db_sqlite::Connections;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Register a new user
    CreateUser {
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
    },
}

pub async fn run() -> Result<()> {
    let args = Args::parse();

    let mut cfg = Config::try_load_from_file_or_default(args.config.as_deref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }

    info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db.conn_sqlite, cfg.db.conn_pool_size
    );
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;
    staybook_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let web_cfg = staybook_webserver::Cfg {
                identity_header: cfg.webserver.identity_header,
                page_limits: cfg.spots.page_limits,
            };
            staybook_webserver::run(
                connections,
                cfg.webserver.enable_cors,
                web_cfg,
                env!("CARGO_PKG_VERSION"),
            )
            .await?;
        }
        Command::CreateUser {
            email,
            username,
            first_name,
            last_name,
        } => {
            let params = usecases::UserParams {
                email,
                username,
                first_name,
                last_name,
            };
            let user = usecases::create_user(&connections.exclusive()?, params).map_err(
                |err| match err {
                    usecases::Error::Validation(errors) => anyhow!("Invalid user: {errors}"),
                    err => anyhow!(err),
                },
            )?;
            info!("Created user {} with id {}", user.username, user.id);
        }
    }
    Ok(())
}
