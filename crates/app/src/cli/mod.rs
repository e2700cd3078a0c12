use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use thali::{
    cart::{Cart, storage::FileSlot},
    pricing::Pricing,
};
use thali_app::client::{ApiClient, ApiConfig};

mod cart;
mod checkout;
mod login;
mod menu;
mod orders;

#[derive(Debug, Parser)]
#[command(name = "thali", about = "Thali ordering CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse the catalog
    Menu(menu::MenuArgs),
    /// Sign in and print a session token
    Login(login::LoginArgs),
    /// Manage the local cart
    Cart(cart::CartCommand),
    /// Place the cart as an order
    Checkout(checkout::CheckoutArgs),
    /// List your orders
    Orders(orders::OrdersArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Menu(args) => menu::run(args).await,
            Commands::Login(args) => login::run(args).await,
            Commands::Cart(command) => cart::run(command).await,
            Commands::Checkout(args) => checkout::run(args).await,
            Commands::Orders(args) => orders::run(args).await,
        }
    }
}

/// Connection to the JSON API.
#[derive(Debug, Args)]
pub(crate) struct ApiArgs {
    /// JSON API address
    #[arg(long, env = "THALI_API_URL", default_value = "http://localhost:8698")]
    api_url: String,

    /// Session token printed by `login`
    #[arg(long, env = "THALI_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

impl ApiArgs {
    pub(crate) fn client(&self) -> ApiClient {
        ApiClient::new(ApiConfig {
            base_url: self.api_url.clone(),
            token: self.token.clone(),
        })
    }

    pub(crate) fn require_token(&self) -> Result<(), String> {
        match self.token.as_deref() {
            Some(token) if !token.trim().is_empty() => Ok(()),
            _ => Err("not signed in: run `thali login` and set THALI_TOKEN".to_string()),
        }
    }
}

/// Where the cart is kept between runs.
#[derive(Debug, Args)]
pub(crate) struct CartDirArgs {
    /// Directory holding the saved cart
    #[arg(long, env = "THALI_CART_DIR", default_value = ".thali")]
    cart_dir: String,
}

impl CartDirArgs {
    pub(crate) fn open(&self) -> Cart<FileSlot> {
        Cart::new(FileSlot::new(&self.cart_dir))
    }
}

/// Delivery fee, tax rate, and display currency.
#[derive(Debug, Args)]
pub(crate) struct PricingArgs {
    /// Flat delivery fee
    #[arg(long, env = "DELIVERY_FEE", default_value = "40")]
    delivery_fee: Decimal,

    /// Tax rate as a fraction of the subtotal
    #[arg(long, env = "TAX_RATE", default_value = "0.05")]
    tax_rate: Decimal,

    /// ISO 4217 currency code
    #[arg(long, env = "CURRENCY", default_value = "INR")]
    currency: String,
}

impl PricingArgs {
    pub(crate) fn pricing(&self) -> Result<Pricing, String> {
        let currency = Pricing::currency_from_code(&self.currency).map_err(|error| error.to_string())?;

        Pricing::new(self.delivery_fee, self.tax_rate, currency).map_err(|error| error.to_string())
    }
}
