use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "walkies")]
#[command(about = "Walkies - dog-walking marketplace client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and persist the session
    Login {
        email: String,
        password: String,
    },
    /// Sign out and clear the persisted session
    Logout,
    /// Show the current session
    Whoami,
    /// Create a new account
    Register {
        /// Account role: owner or walker
        #[arg(long)]
        role: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// National id, at least 8 characters
        #[arg(long)]
        dni: String,
        #[arg(long)]
        phone: String,
    },
    /// Manage your pets
    Pets {
        #[command(subcommand)]
        action: PetsAction,
    },
    /// Find walkers and manage walker profiles
    Walkers {
        #[command(subcommand)]
        action: WalkersAction,
    },
    /// Manage bookings
    Bookings {
        #[command(subcommand)]
        action: BookingsAction,
    },
    /// Open the chat for a booking
    Chat {
        booking_id: String,
    },
}

#[derive(Subcommand)]
enum PetsAction {
    /// List your registered pets
    List,
    /// Register a new pet
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        breed: String,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        notes: Option<String>,
    },
}

#[derive(Subcommand)]
enum WalkersAction {
    /// List walkers near a location
    Near {
        #[arg(long)]
        lat: f64,
        #[arg(long)]
        lng: f64,
    },
    /// Show a walker's profile
    Show {
        walker_id: String,
    },
    /// Update your walker profile
    Update {
        walker_id: String,
        #[arg(long)]
        bio: Option<String>,
        #[arg(long)]
        hourly_rate: Option<f64>,
        #[arg(long)]
        available: Option<bool>,
        #[arg(long)]
        lat: Option<f64>,
        #[arg(long)]
        lng: Option<f64>,
    },
}

#[derive(Subcommand)]
enum BookingsAction {
    /// Show your bookings grouped by status
    List,
    /// Request a walk
    Create {
        #[arg(long)]
        walker_id: String,
        /// Defaults to your first registered pet
        #[arg(long)]
        pet_id: Option<String>,
        /// Start time, RFC 3339 (e.g. 2025-06-01T10:00:00Z)
        #[arg(long)]
        start: String,
        #[arg(long)]
        hours: f64,
    },
    /// Accept a pending request (walkers only)
    Accept {
        booking_id: String,
    },
    /// Reject a pending request (walkers only)
    Reject {
        booking_id: String,
    },
    /// Mark a walk as completed (owners only)
    Complete {
        booking_id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let ctx = commands::AppContext::bootstrap().await?;

    match cli.command {
        Commands::Login { email, password } => {
            commands::session::login(&ctx, &email, &password).await?
        }
        Commands::Logout => commands::session::logout(&ctx).await,
        Commands::Whoami => commands::session::whoami(&ctx).await,
        Commands::Register {
            role,
            name,
            email,
            password,
            dni,
            phone,
        } => {
            commands::session::register(&ctx, &role, name, email, password, dni, phone).await?
        }
        Commands::Pets { action } => match action {
            PetsAction::List => commands::pets::list(&ctx).await?,
            PetsAction::Add {
                name,
                breed,
                age,
                notes,
            } => commands::pets::add(&ctx, name, breed, age, notes).await?,
        },
        Commands::Walkers { action } => match action {
            WalkersAction::Near { lat, lng } => commands::walkers::near(&ctx, lat, lng).await?,
            WalkersAction::Show { walker_id } => {
                commands::walkers::show(&ctx, &walker_id).await?
            }
            WalkersAction::Update {
                walker_id,
                bio,
                hourly_rate,
                available,
                lat,
                lng,
            } => {
                commands::walkers::update(&ctx, &walker_id, bio, hourly_rate, available, lat, lng)
                    .await?
            }
        },
        Commands::Bookings { action } => match action {
            BookingsAction::List => commands::bookings::list(&ctx).await?,
            BookingsAction::Create {
                walker_id,
                pet_id,
                start,
                hours,
            } => commands::bookings::create(&ctx, walker_id, pet_id, &start, hours).await?,
            BookingsAction::Accept { booking_id } => {
                commands::bookings::accept(&ctx, &booking_id).await?
            }
            BookingsAction::Reject { booking_id } => {
                commands::bookings::reject(&ctx, &booking_id).await?
            }
            BookingsAction::Complete { booking_id, yes } => {
                commands::bookings::complete(&ctx, &booking_id, yes).await?
            }
        },
        Commands::Chat { booking_id } => commands::chat::open(&ctx, booking_id).await?,
    }

    Ok(())
}
