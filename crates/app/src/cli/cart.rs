use std::io;

use clap::{Args, Subcommand};
use thali::{catalog::FoodItemId, receipt::CartSummary};

use super::{ApiArgs, CartDirArgs, PricingArgs};

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(flatten)]
    store: CartDirArgs,

    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Add one portion of a dish
    Add(AddArgs),
    /// Drop a dish from the cart
    Remove {
        /// Dish id
        id: FoodItemId,
    },
    /// Set the number of portions of a dish
    Set {
        /// Dish id
        id: FoodItemId,

        /// Portions; values below 1 are ignored
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
    /// Print the cart with its totals
    Show(PricingArgs),
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Dish id
    id: FoodItemId,

    #[command(flatten)]
    api: ApiArgs,
}

pub(crate) async fn run(command: CartCommand) -> Result<(), String> {
    let mut cart = command.store.open();

    match command.command {
        CartSubcommand::Add(args) => {
            let item = args
                .api
                .client()
                .get_food(args.id)
                .await
                .map_err(|error| format!("failed to load dish {}: {error}", args.id))?;

            if !item.is_available {
                return Err(format!("{} is not available right now", item.name));
            }

            cart.add_item(&item);

            println!("{} has been added to your cart.", item.name);
        }
        CartSubcommand::Remove { id } => cart.remove_item(id),
        CartSubcommand::Set { id, quantity } => cart.update_quantity(id, quantity),
        CartSubcommand::Clear => cart.clear(),
        CartSubcommand::Show(pricing) => {
            if cart.state().is_empty() {
                println!("Your cart is empty.");
                return Ok(());
            }

            CartSummary::new(cart.state(), &pricing.pricing()?)
                .write_to(io::stdout().lock())
                .map_err(|error| error.to_string())?;

            return Ok(());
        }
    }

    println!(
        "{} item(s) in cart, subtotal {}",
        cart.state().total_items(),
        cart.state().total_amount()
    );

    Ok(())
}
