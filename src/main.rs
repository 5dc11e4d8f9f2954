use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pair_market::alerts::{AlertInbox, AlertKind};
use pair_market::config::Config;
use pair_market::format::{format_currency, truncate_text};
use pair_market::forms::{AlertRequest, ContactRequest, ListingDraft};
use pair_market::uploads::{upload_batch, HttpUploader};
use pair_market::{Catalog, FilterForm, Listing, ListingFilter, MarketError};

#[derive(Parser)]
#[command(name = "pair-market")]
#[command(about = "Browse, search and list items on the pair marketplace")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog
    Search {
        /// Text to look for in item names
        #[arg(short, long, default_value = "")]
        query: String,

        /// Also search descriptions
        #[arg(long)]
        in_description: bool,

        #[arg(short, long, default_value = "")]
        category: String,

        #[arg(short, long, default_value = "")]
        location: String,

        #[arg(long, default_value = "")]
        condition: String,

        #[arg(long)]
        min_price: Option<u64>,

        #[arg(long)]
        max_price: Option<u64>,

        /// newest, price-asc, price-desc or most-viewed
        #[arg(short, long, default_value = "")]
        sort: String,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one listing
    Show { id: String },

    /// Upload images and publish a new listing
    Sell {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        category: String,

        /// Whole naira, empty for free
        #[arg(long, default_value = "")]
        price: String,

        #[arg(long)]
        location: String,

        #[arg(long)]
        condition: String,

        /// sell, trade, donate or repair
        #[arg(long)]
        purpose: String,

        /// Image files
        images: Vec<PathBuf>,
    },

    /// List dashboard alerts
    Alerts {
        /// match, message, sale, offer, warning or system
        #[arg(short, long)]
        kind: Option<AlertKind>,
    },

    /// Send a message to a listing's seller
    Contact {
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },

    /// Ask to be notified when an item appears
    Watch {
        #[arg(long)]
        email: String,

        #[arg(long)]
        item: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("Failed to load configuration")?;

    let mut catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path)
            .await
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::seeded(),
    };

    match cli.command {
        Commands::Search {
            query,
            in_description,
            category,
            location,
            condition,
            min_price,
            max_price,
            sort,
            json,
        } => {
            let form = FilterForm {
                search: query,
                category,
                location,
                condition,
                min_price,
                max_price,
                sort,
                in_description,
            };
            let filter = ListingFilter::try_from(form).context("Invalid filter")?;
            let results = catalog.search(&filter);

            if json {
                println!("{}", serde_json::to_string_pretty(results.items())?);
            } else {
                println!("{results}\n");
                for (i, listing) in results.iter().enumerate() {
                    print_card(i + 1, listing);
                }
            }
        }

        Commands::Show { id } => match catalog.get(&id) {
            Ok(listing) => {
                print_card(1, listing);
                println!("   {}", listing.description);
                println!("   {} • {} views • {}", listing.purpose, listing.views, listing.status);
                for image in &listing.images {
                    println!("   🖼  {image}");
                }
            }
            Err(MarketError::ListingNotFound(_)) => println!("Item not found"),
            Err(e) => return Err(e.into()),
        },

        Commands::Sell {
            name,
            description,
            category,
            price,
            location,
            condition,
            purpose,
            images,
        } => {
            let draft = ListingDraft {
                name,
                description,
                category,
                price,
                location,
                condition,
                purpose,
                images,
            };
            let validated = draft.validate()?;

            let uploader = HttpUploader::with_endpoint(&config.upload_url, config.upload_timeout)?;
            let report = upload_batch(&uploader, &validated.images).await;

            if !report.is_complete() {
                warn!("{}", report);
                for failure in &report.failed {
                    println!("❌ {}: {}", failure.file.display(), failure.reason);
                }
                anyhow::bail!("{report}");
            }

            let listing = catalog.publish(validated, report.uploaded)?;
            info!("Item uploaded successfully!");
            print_card(1, listing);
        }

        Commands::Alerts { kind } => {
            let inbox = AlertInbox::seeded(Utc::now());
            let now = Utc::now();

            println!("🔔 {} unread\n", inbox.unread_count());
            for alert in inbox.filtered(kind) {
                println!("[{}] {} ({})", alert.kind, alert.title, alert.age(now));
                if !alert.description.is_empty() {
                    println!("   {}", alert.description);
                }
            }
        }

        Commands::Contact {
            id,
            name,
            email,
            message,
        } => {
            let listing = catalog.get(&id)?;
            let request = ContactRequest {
                listing_id: listing.id.clone(),
                name,
                email,
                message,
            };
            println!("{}", request.submit()?);
        }

        Commands::Watch { email, item } => {
            let request = AlertRequest { email, item };
            println!("{}", request.submit()?);
        }
    }

    Ok(())
}

fn print_card(position: usize, listing: &Listing) {
    println!(
        "{}. {} ({})",
        position,
        truncate_text(&listing.name, 40),
        format_currency(listing.price)
    );
    println!("   📍 {} • {} • {}", listing.location, listing.condition, listing.category);
    println!("   ID: {}", listing.id);
    println!();
}
