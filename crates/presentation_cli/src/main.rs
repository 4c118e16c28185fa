//! EPD dashboards CLI
//!
//! Transport emission estimates, catalog browsing, product comparison and
//! an interactive bill of materials.

#![allow(clippy::print_stdout)]

mod render;
mod shell;

use std::{io::BufRead, path::PathBuf, sync::Arc};

use anyhow::Context;
use application::{
    AuthService, CatalogService, Origin, Session, TransportEmissionService, TransportRequest,
};
use clap::{Args, Parser, Subcommand};
use domain::value_objects::{Facility, PipeKind, VehicleClass};
use infrastructure::{
    AppConfig, ConfigCredentialVerifier, GeocodingAdapter, GreatCircleSeaRouter, PasswordHasher,
    RoadRoutingAdapter, XlsxCatalogAdapter, init_logging,
};
use secrecy::{ExposeSecret, SecretString};
use tracing::info;

/// EPD dashboards CLI
#[derive(Parser)]
#[command(name = "epd-cli")]
#[command(author, version, about = "EPD dashboards: transport CO2 and product emissions", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "EPD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a login password using Argon2 for storage in configuration
    ///
    /// Example: epd-cli hash-password --username admin
    HashPassword {
        /// Login name shown in the config snippet
        #[arg(short, long, default_value = "admin")]
        username: String,

        /// Verify the hash by checking the password against it
        #[arg(long)]
        verify: bool,
    },

    /// List road vehicle classes and their emission factors
    Vehicles,

    /// List production facilities usable as a start point
    Facilities,

    /// Estimate the CO2 of a delivery, optionally with a sea leg
    ///
    /// Example: epd-cli transport --facility "Powerpipe AB" --to "Berlin"
    ///     --departure-port "Gothenburg" --arrival-port "Rostock"
    Transport(TransportArgs),

    /// Browse the project catalog: types, series of a type, DNs of a series
    Catalog {
        /// Product type to list series for
        #[arg(long = "type")]
        product_type: Option<String>,

        /// Series to list DN values for (requires --type)
        #[arg(long, requires = "product_type")]
        series: Option<String>,
    },

    /// Compare the EPD figures of two pipe kinds
    ///
    /// Without --series the common series are listed; without --dn the
    /// common DN values of the series.
    Compare {
        /// First pipe kind (single, twin, single-recase, twin-recase)
        #[arg(long, default_value = "single")]
        left: PipeKind,

        /// Second pipe kind
        #[arg(long, default_value = "single-recase")]
        right: PipeKind,

        #[arg(long)]
        series: Option<String>,

        #[arg(long, requires = "series")]
        dn: Option<String>,

        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a username and password
    Login {
        #[arg(short, long)]
        username: String,
    },

    /// Log in and edit a project bill of materials interactively
    Project {
        #[arg(short, long)]
        username: String,
    },
}

#[derive(Args)]
struct TransportArgs {
    /// Start address or place name
    #[arg(long, required_unless_present = "facility", conflicts_with = "facility")]
    from: Option<String>,

    /// Start at a known production facility (see `facilities`)
    #[arg(long)]
    facility: Option<String>,

    /// Destination address or place name
    #[arg(long)]
    to: String,

    /// Road vehicle class (see `vehicles`)
    #[arg(long, default_value = "truck-over-32")]
    vehicle: VehicleClass,

    /// Cargo weight in tonnes (0.1 - 100)
    #[arg(long, default_value_t = 20.0)]
    cargo: f64,

    /// Port where the cargo is loaded on a ship
    #[arg(long, requires = "arrival_port")]
    departure_port: Option<String>,

    /// Port where the cargo leaves the ship
    #[arg(long, requires = "departure_port")]
    arrival_port: Option<String>,

    /// Print the estimate as JSON
    #[arg(long)]
    json: bool,
}

impl TransportArgs {
    fn into_request(self) -> anyhow::Result<TransportRequest> {
        let origin = match (self.facility, self.from) {
            (Some(name), _) => Origin::Facility(Facility::find(&name)?),
            (None, Some(place)) => Origin::Place(place),
            (None, None) => anyhow::bail!("either --from or --facility is required"),
        };

        let request = TransportRequest::new(origin, self.to, self.vehicle, self.cargo);
        Ok(match (self.departure_port, self.arrival_port) {
            (Some(departure), Some(arrival)) => request.with_sea_leg(departure, arrival),
            _ => request,
        })
    }
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => AppConfig::load().context("failed to load configuration"),
    }
}

fn transport_service(config: &AppConfig) -> anyhow::Result<TransportEmissionService> {
    let geocoder = GeocodingAdapter::nominatim(&config.geocoding)?;
    let road = RoadRoutingAdapter::osrm(&config.routing)?;
    Ok(TransportEmissionService::new(
        Arc::new(geocoder),
        Arc::new(road),
        Arc::new(GreatCircleSeaRouter::new()),
    ))
}

fn catalog_service(config: &AppConfig) -> CatalogService {
    CatalogService::new(Arc::new(XlsxCatalogAdapter::new(config.catalogs.clone())))
}

fn auth_service(config: &AppConfig) -> AuthService {
    AuthService::new(Arc::new(ConfigCredentialVerifier::new(&config.auth)))
}

/// Read one line from stdin as a secret
fn read_password(prompt: &str) -> anyhow::Result<SecretString> {
    if let Ok(password) = std::env::var("EPD_PASSWORD") {
        return Ok(SecretString::from(password));
    }
    println!("{prompt}");
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password")?;
    Ok(SecretString::from(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn login(config: &AppConfig, username: &str) -> anyhow::Result<Session> {
    let password = read_password("🔑 Password:")?;
    Ok(auth_service(config).login(username, password.expose_secret())?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    // -v flags override the configured level; RUST_LOG still wins
    let logging = if cli.verbose > 0 {
        config
            .logging
            .clone()
            .with_level(log_filter_from_verbosity(cli.verbose))
    } else {
        config.logging.clone()
    };
    init_logging(&logging)?;

    match cli.command {
        Commands::HashPassword { username, verify } => {
            let password = read_password("🔑 Password to hash:")?;
            let hasher = PasswordHasher::new();

            match hasher.hash(password.expose_secret()) {
                Ok(hash) => {
                    println!("🔐 Password Hash (Argon2id):");
                    println!();
                    println!("{hash}");
                    println!();
                    println!("📋 Add to config.toml:");
                    println!("   [[auth.users]]");
                    println!("   username = \"{username}\"");
                    println!("   password_hash = \"{hash}\"");

                    if verify {
                        println!();
                        match hasher.verify(password.expose_secret(), &hash) {
                            Ok(true) => println!("✅ Verification: Hash verified successfully"),
                            Ok(false) => {
                                println!("❌ Verification: Hash does NOT match (unexpected)");
                            },
                            Err(e) => println!("❌ Verification error: {e}"),
                        }
                    }
                },
                Err(e) => {
                    println!("❌ Failed to hash password: {e}");
                    std::process::exit(1);
                },
            }
        },

        Commands::Vehicles => print!("{}", render::vehicles()),

        Commands::Facilities => print!("{}", render::facilities()),

        Commands::Transport(args) => {
            let json = args.json;
            let request = args.into_request()?;
            println!("🚚 Calculating route for {} → {}", request.origin, request.destination);

            let estimate = transport_service(&config)?.estimate(&request).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                println!("{}", render::estimate(&estimate));
            }
        },

        Commands::Catalog {
            product_type,
            series,
        } => {
            let calc = catalog_service(&config).project_calculator().await?;
            let catalog = calc.catalog();
            let text = match (product_type, series) {
                (Some(product_type), Some(series)) => {
                    render::listing("DN", &catalog.dn_values(&product_type, &series))
                },
                (Some(product_type), None) => {
                    render::listing("Series", &catalog.series_for_type(&product_type))
                },
                _ => render::listing("Types", &catalog.product_types()),
            };
            println!("{text}");
        },

        Commands::Compare {
            left,
            right,
            series,
            dn,
            json,
        } => {
            let service = catalog_service(&config);
            match (series, dn) {
                (Some(series), Some(dn)) => {
                    let comparison = service.compare(left, right, &series, &dn).await?;
                    if json {
                        println!("{}", serde_json::to_string_pretty(&comparison.chart)?);
                    } else {
                        println!("📊 {left} vs {right}, series {series}, DN{dn}");
                        println!("{}", render::comparison(&comparison));
                    }
                },
                (Some(series), None) => {
                    let dns = service.common_dimensions(left, right, &series).await?;
                    println!("{}", render::listing("Common DN values", &dns));
                },
                _ => {
                    let all = service.common_series(left, right).await?;
                    println!("{}", render::listing("Common series", &all));
                },
            }
        },

        Commands::Login { username } => match login(&config, &username) {
            Ok(session) => println!("✅ Logged in as {}", session.username()),
            Err(e) => {
                println!("❌ {e}");
                std::process::exit(1);
            },
        },

        Commands::Project { username } => {
            let session = login(&config, &username)?;
            let mut calc = catalog_service(&config).project_calculator().await?;
            info!(user = %session.username(), "Project session started");

            println!("✅ Logged in as {}. Type 'help' for commands.", session.username());
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            shell::run(&mut calc, stdin.lock(), &mut stdout)?;
        },
    }

    Ok(())
}
