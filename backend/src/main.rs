//! tailor CLI
//!
//! Command-line front end over the same store and services the browser
//! pages use, backed by a data directory of JSON files.

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use log::{info, warn};
use shared::{CatalogView, CreateBookingRequest, CreateDesignRequest};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use master_tailor_backend::backend::domain::{
    BookingError, LoginOutcome, PageInitializer, PageRouter,
};
use master_tailor_backend::backend::storage::{FileStore, MemoryStore};
use master_tailor_backend::{resolve_data_directory, Backend, BackendDependencies, TailorConfig};

#[derive(Parser)]
#[command(name = "tailor")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Design catalog and fitting-slot booking for a tailoring shop")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (default: $MASTER_TAILOR_DATA_DIR or the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the design catalog
    Designs,

    /// Show fitting slots for a date
    Slots {
        /// Date as YYYY-MM-DD
        date: String,
    },

    /// Book a fitting slot
    Book {
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Slot label, e.g. "10:00 AM"
        #[arg(long)]
        time: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        mobile: String,
        /// Design id (omit for a consultation)
        #[arg(long)]
        design: Option<String>,
    },

    /// Admin actions (requires the configured credentials)
    Admin {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[command(subcommand)]
        action: AdminAction,
    },

    /// Show which page initializer a path would run
    Route {
        path: String,
    },
}

#[derive(Subcommand)]
pub enum AdminAction {
    /// Add a design to the catalog
    DesignsAdd {
        #[arg(long)]
        title: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        days: String,
        #[arg(long, default_value = "")]
        category: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        image_url: Option<String>,
        /// suit, dress or fabric; picks the default image
        #[arg(long, default_value = "suit")]
        image_type: String,
    },

    /// Delete a design by id
    DesignsDelete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show all bookings and the dashboard counters
    Bookings,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Route { path } => {
            print_route(&path);
            Ok(())
        }
        command => {
            let backend = open_backend(cli.data_dir)?;
            run(&backend, command)
        }
    }
}

fn open_backend(data_dir: Option<PathBuf>) -> Result<Backend> {
    let data_dir = resolve_data_directory(data_dir);
    info!("Using data directory {:?}", data_dir);

    let config = TailorConfig::load_or_create(&data_dir)?;
    let store = FileStore::new(&data_dir)?;

    Backend::new(BackendDependencies {
        local_store: Arc::new(store),
        // Each invocation is its own session
        session_store: Arc::new(MemoryStore::new()),
        sink: config.sink(&data_dir),
        verifier: config.credential_verifier(),
        default_completion_days: config.default_completion_days,
    })
}

fn run(backend: &Backend, command: Commands) -> Result<()> {
    match command {
        Commands::Designs => print_catalog(backend),
        Commands::Slots { date } => {
            for slot in backend.booking_service.list_available_slots(&date) {
                println!("{}", slot.display);
            }
        }
        Commands::Book {
            date,
            time,
            name,
            mobile,
            design,
        } => book(backend, date, time, name, mobile, design)?,
        Commands::Admin {
            username,
            password,
            action,
        } => {
            match backend.session_gate.login(&username, &password)? {
                LoginOutcome::Authenticated { .. } => {}
                LoginOutcome::Rejected { message } => bail!(message),
            }
            let result = run_admin(backend, action);
            backend.session_gate.logout()?;
            result?;
        }
        Commands::Route { path } => print_route(&path),
    }
    Ok(())
}

fn print_catalog(backend: &Backend) {
    match backend.catalog_service.catalog_view() {
        CatalogView::Empty { message } => println!("{}", message),
        CatalogView::Cards(cards) => {
            for card in cards {
                println!("[{}] {} {}", card.id, card.title, card.formatted_price);
                println!("    {}", card.wait_time);
                println!("    {}", card.description);
            }
        }
    }
}

fn book(
    backend: &Backend,
    date: String,
    time: String,
    name: String,
    mobile: String,
    design: Option<String>,
) -> Result<()> {
    if let Some(hint) = backend
        .booking_service
        .completion_estimate(design.as_deref().and_then(|id| id.trim().parse().ok()))
    {
        println!("{}", hint);
    }

    let request = CreateBookingRequest {
        design_id: design,
        customer_name: name,
        customer_mobile: mobile,
        booking_date: date,
        booking_time: time,
    };

    match backend.booking_service.submit_booking(request) {
        Ok(confirmation) => {
            println!(
                "Booking Confirmed! See you on {} at {}.",
                confirmation.booking_date, confirmation.booking_time
            );
            if let Some(delivery) = confirmation.delivery_date {
                println!("Estimated delivery: {}", delivery);
            }
            Ok(())
        }
        Err(e) => {
            if let BookingError::SlotTaken { refreshed_slots, .. } = &e {
                let open: Vec<&str> = refreshed_slots
                    .iter()
                    .filter(|s| s.available)
                    .map(|s| s.display.as_str())
                    .collect();
                eprintln!("Still open that day: {}", open.join(", "));
            }
            Err(e.into())
        }
    }
}

fn run_admin(backend: &Backend, action: AdminAction) -> Result<()> {
    match action {
        AdminAction::DesignsAdd {
            title,
            price,
            days,
            category,
            description,
            image_url,
            image_type,
        } => {
            let design = backend.catalog_service.submit_design(CreateDesignRequest {
                title,
                price,
                days_to_complete: days,
                category,
                description,
                image_url,
                image_type,
            })?;
            println!("Design Added Successfully! (id {})", design.id);
        }
        AdminAction::DesignsDelete { id, yes } => {
            if !yes && !confirm(&format!("Are you sure you want to delete design {}?", id))? {
                println!("Cancelled");
                return Ok(());
            }
            if backend.catalog_service.delete_design(id)? {
                println!("Deleted design {}", id);
            } else {
                warn!("No design with id {}", id);
            }
        }
        AdminAction::Bookings => {
            let rows = backend.dashboard_service.bookings_table();
            if rows.is_empty() {
                println!("No bookings yet.");
            }
            for row in &rows {
                println!(
                    "#{}  {} {}  {} ({})  {}  {}",
                    row.booking_id,
                    row.booking_date,
                    row.booking_time,
                    row.customer_name,
                    row.customer_mobile,
                    row.design_name,
                    row.status
                );
            }
            let stats = backend.dashboard_service.stats(Local::now().date_naive());
            println!(
                "Total bookings: {}  Upcoming: {}",
                stats.total_bookings, stats.upcoming_bookings
            );
        }
    }
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

/// Records which initializer the router picked
struct RouteProbe(Option<&'static str>);

impl PageInitializer for RouteProbe {
    fn init_designs(&mut self) {
        self.0 = Some("designs");
    }
    fn init_booking(&mut self) {
        self.0 = Some("booking");
    }
    fn init_login(&mut self) {
        self.0 = Some("tailor login");
    }
    fn init_dashboard(&mut self) {
        self.0 = Some("tailor dashboard");
    }
}

fn print_route(path: &str) {
    let mut probe = RouteProbe(None);
    match PageRouter::route(path, &mut probe) {
        Some(page) => println!(
            "{} -> {} initializer ({})",
            path,
            probe.0.unwrap_or("no"),
            page.path()
        ),
        None => println!("{} -> no initializer", path),
    }
}
