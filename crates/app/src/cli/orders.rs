use clap::Args;

use super::{ApiArgs, PricingArgs};

#[derive(Debug, Args)]
pub(crate) struct OrdersArgs {
    #[command(flatten)]
    api: ApiArgs,

    #[command(flatten)]
    pricing: PricingArgs,
}

pub(crate) async fn run(args: OrdersArgs) -> Result<(), String> {
    args.api.require_token()?;

    let pricing = args.pricing.pricing()?;
    let orders = args
        .api
        .client()
        .list_my_orders()
        .await
        .map_err(|error| format!("failed to load orders: {error}"))?;

    if orders.is_empty() {
        println!("No orders yet.");
    }

    for order in orders {
        println!(
            "#{:<5} {}  {:<10} {:>10}  {} line(s)",
            order.id,
            order.order_date.strftime("%Y-%m-%d %H:%M"),
            order.status,
            pricing.money(order.total_amount).to_string(),
            order.items.len(),
        );
    }

    Ok(())
}
