//! Donation CLI
//!
//! Command-line interface for the donation relay API. Useful for poking a
//! sandbox deployment without the web page.

use anyhow::Result;
use clap::{Parser, Subcommand};

use donation_client::DonationClient;
use donation_types::CurrencyCode;

#[derive(Parser)]
#[command(name = "donation")]
#[command(author, version, about = "Donation relay CLI client", long_about = None)]
struct Cli {
    /// Base URL of the donation relay
    #[arg(
        long,
        env = "DONATION_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check relay health
    Health,
    /// Create an order on the international network
    CreateOrder {
        /// Donation amount as a decimal string, e.g. 5.00
        #[arg(long)]
        amount: String,
        /// Currency code (USD or INR); defaults to USD
        #[arg(long)]
        currency: Option<String>,
    },
    /// Create an order on the domestic gateway
    CreateRazorpayOrder {
        /// Donation amount in INR
        #[arg(long)]
        amount: String,
    },
    /// Capture a previously created order
    CaptureOrder {
        /// Identifier returned by a create-order call
        #[arg(long)]
        order_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = DonationClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            println!("{}", if healthy { "healthy" } else { "unhealthy" });
        }
        Commands::CreateOrder { amount, currency } => {
            let currency = currency
                .map(|c| c.parse::<CurrencyCode>())
                .transpose()?;
            let order_id = client.create_paypal_order(&amount, currency).await?;
            println!("{order_id}");
        }
        Commands::CreateRazorpayOrder { amount } => {
            let order = client.create_razorpay_order(&amount).await?;
            println!("{}", serde_json::to_string_pretty(&order)?);
        }
        Commands::CaptureOrder { order_id } => {
            let captured = client.capture_order(&order_id).await?;
            println!("{}", serde_json::to_string_pretty(&captured)?);
        }
    }

    Ok(())
}
