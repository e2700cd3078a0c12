use clap::Args;

use super::{ApiArgs, PricingArgs};

#[derive(Debug, Args)]
pub(crate) struct MenuArgs {
    /// Only show this category
    #[arg(long)]
    category: Option<String>,

    /// Include dishes that are currently unavailable
    #[arg(long)]
    all: bool,

    #[command(flatten)]
    api: ApiArgs,

    #[command(flatten)]
    pricing: PricingArgs,
}

pub(crate) async fn run(args: MenuArgs) -> Result<(), String> {
    let pricing = args.pricing.pricing()?;

    let foods = args
        .api
        .client()
        .list_foods()
        .await
        .map_err(|error| format!("failed to load menu: {error}"))?;

    for item in foods.iter().filter(|item| {
        (args.all || item.is_available)
            && args
                .category
                .as_deref()
                .is_none_or(|category| item.category == category)
    }) {
        let veg = if item.is_vegetarian { "veg" } else { "non-veg" };

        println!(
            "{:>4}  {:<28} {:>10}  {:<12} {veg}",
            item.id,
            item.name,
            pricing.money(item.price).to_string(),
            item.category,
        );
    }

    Ok(())
}
