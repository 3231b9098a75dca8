use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};

use ocdb_application::prelude as flows;
use ocdb_core::{entities::*, usecases};
use ocdb_db_sqlite::Connections;

use crate::{config::Config, gateways};

#[derive(Debug, Parser)]
#[command(version, about = "Administration tool for an OpenCivicDB instance")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply pending database migrations and exit
    RunMigrations,
    /// Provision an administrator account and print the one-time token
    /// for choosing a password
    CreateAdminUser {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        /// "community_admin" or "ssg_admin"
        #[arg(long)]
        role: String,
        /// Public id of the admin's city
        #[arg(long)]
        city: Option<String>,
    },
    /// Store a city together with its map viewport
    CreateCity {
        #[arg(long)]
        name: String,
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lng: f64,
        /// Zoom level, defaults to the configured city zoom
        #[arg(long)]
        zoom: Option<u8>,
    },
    /// Import cities, categories, users and issues from a JSON file
    Seed {
        #[arg(long, value_name = "FILE")]
        file: PathBuf,
    },
    /// Print entity counts
    Stats,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::try_load_from_file_or_default(cli.config.as_deref())?;

    let connections = Connections::init(&config.db.conn_sqlite, config.db.conn_pool_size.into())
        .with_context(|| format!("Failed to open database '{}'", config.db.conn_sqlite))?;
    // Pending migrations are applied before any subcommand touches the
    // database.
    ocdb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    match cli.command {
        Command::RunMigrations => Ok(()),
        Command::CreateAdminUser {
            username,
            email,
            role,
            city,
        } => create_admin_user(&connections, username, email, &role, city),
        Command::CreateCity {
            name,
            lat,
            lng,
            zoom,
        } => create_city(
            &connections,
            name,
            lat,
            lng,
            zoom.unwrap_or(config.map.city_zoom),
        ),
        Command::Seed { file } => seed(&connections, &file),
        Command::Stats => stats(&connections),
    }
}

fn create_admin_user(
    connections: &Connections,
    username: String,
    email: String,
    role: &str,
    city: Option<String>,
) -> Result<()> {
    let role = role
        .parse::<Role>()
        .map_err(|_| anyhow!("Unknown role '{role}'"))?;
    if !matches!(role, Role::CommunityAdmin | Role::SsgAdmin) {
        bail!("Only admin accounts can be provisioned here (role '{role}')");
    }
    let email = email
        .parse::<EmailAddress>()
        .context("Invalid e-mail address")?;

    let (user, reset_token) = flows::create_admin_user(
        connections,
        &gateways::notification_gateway(),
        usecases::NewAdminUser {
            username,
            email,
            role,
            city_id: city.map(Id::from),
            first_name: None,
            last_name: None,
        },
    )?;
    println!("Created {} account '{}' <{}>", user.role, user.username, user.email);
    println!(
        "One-time token for choosing a password: {}",
        reset_token.encode_to_string()
    );
    Ok(())
}

fn create_city(
    connections: &Connections,
    name: String,
    lat: f64,
    lng: f64,
    zoom: u8,
) -> Result<()> {
    let city = flows::create_city(
        connections,
        usecases::NewCity {
            name,
            lat,
            lng,
            zoom,
        },
    )?;
    println!("Created city '{}' with id {}", city.name, city.id);
    Ok(())
}

fn seed(connections: &Connections, file: &Path) -> Result<()> {
    let reader = File::open(file)
        .map(BufReader::new)
        .with_context(|| format!("Failed to open seed file '{}'", file.display()))?;
    let seed_file: flows::SeedFile =
        serde_json::from_reader(reader).context("Failed to parse seed file")?;
    let summary = flows::seed(connections, seed_file)?;
    println!(
        "Imported {} cities, {} categories, {} users and {} issues",
        summary.cities, summary.categories, summary.users, summary.issues
    );
    Ok(())
}

fn stats(connections: &Connections) -> Result<()> {
    let stats = flows::gather_stats(connections)?;
    println!("Issues:     {}", stats.issue_count);
    println!("Users:      {}", stats.user_count);
    println!("Cities:     {}", stats.city_count);
    println!("Categories: {}", stats.category_count);
    Ok(())
}
