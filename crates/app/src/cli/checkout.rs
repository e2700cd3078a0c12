use clap::Args;
use thali::{
    checkout::{CheckoutForm, place_order},
    orders::PaymentMethod,
};

use super::{ApiArgs, CartDirArgs, PricingArgs};

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Delivery address
    #[arg(long)]
    address: String,

    /// Contact number for the rider
    #[arg(long)]
    phone: String,

    /// cash, card, or upi
    #[arg(long, default_value = "cash")]
    payment: PaymentMethod,

    /// Notes for the kitchen or rider
    #[arg(long)]
    notes: Option<String>,

    #[command(flatten)]
    api: ApiArgs,

    #[command(flatten)]
    store: CartDirArgs,

    #[command(flatten)]
    pricing: PricingArgs,
}

pub(crate) async fn run(args: CheckoutArgs) -> Result<(), String> {
    args.api.require_token()?;

    let pricing = args.pricing.pricing()?;
    let mut cart = args.store.open();
    let form = CheckoutForm {
        delivery_address: args.address,
        contact_phone: args.phone,
        payment_method: args.payment,
        special_instructions: args.notes,
    };

    let order = place_order(&mut cart, &form, &pricing, &args.api.client())
        .await
        .map_err(|error| format!("failed to place order: {error}"))?;

    println!("order_id: {}", order.id);
    println!("status: {}", order.status);
    println!("total: {}", pricing.money(order.total_amount));

    Ok(())
}
