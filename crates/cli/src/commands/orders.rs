//! History commands: orders, adoptions, recommendations.

use clap::Subcommand;

use pawsome_core::OrderId;
use pawsome_client::models::Order;
use pawsome_client::state::AppState;

#[derive(Subcommand)]
pub enum OrdersAction {
    /// List the signed-in user's orders
    Mine,
    /// Show one order in detail
    Show {
        /// Order ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum AdoptionsAction {
    /// List the signed-in user's adoption requests
    Mine,
}

pub async fn run_orders(
    state: &AppState,
    action: OrdersAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        OrdersAction::Mine => {
            let orders = state.api().orders().my_orders().await?;
            if orders.is_empty() {
                println!("No orders yet");
                return Ok(());
            }
            for order in orders {
                print_order_line(&order);
            }
        }
        OrdersAction::Show { id } => {
            let order = state.api().orders().get(&OrderId::new(id)).await?;
            print_order_line(&order);
            for item in &order.items {
                println!(
                    "  {} x{} @ RM{:.2}",
                    item.name, item.quantity, item.price
                );
            }
            let addr = &order.shipping_address;
            println!(
                "  ship to: {}, {}, {} {} {}, {}",
                addr.full_name, addr.address, addr.city, addr.state, addr.zip_code, addr.country
            );
        }
    }
    Ok(())
}

pub async fn run_adoptions(
    state: &AppState,
    action: AdoptionsAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AdoptionsAction::Mine => {
            let requests = state.api().adoptions().my_requests().await?;
            if requests.is_empty() {
                println!("No adoptions yet");
                return Ok(());
            }
            for request in requests {
                let fee = request
                    .adoption_fee
                    .map_or_else(|| "-".to_string(), |fee| format!("RM{fee:.2}"));
                println!(
                    "{}  {} ({}) fee={} status={} on {}",
                    request.id,
                    request.cat.name,
                    request.cat.breed,
                    fee,
                    request.status,
                    request.created_at.format("%Y-%m-%d")
                );
            }
        }
    }
    Ok(())
}

pub async fn run_recommendations(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    let recommendations = state.api().recommendations().list().await?;
    if recommendations.is_empty() {
        println!("No recommendations yet - take the survey first (`paws account survey`)");
        return Ok(());
    }
    for rec in recommendations {
        println!(
            "{:>3}% match  {}  {} ({}, {}y)",
            rec.compatibility_score, rec.cat.id, rec.cat.name, rec.cat.breed, rec.cat.age
        );
    }
    Ok(())
}

fn print_order_line(order: &Order) {
    println!(
        "{}  {} items, RM{:.2}, status={}, placed {}",
        order.id,
        order.items.len(),
        order.total_amount,
        order.status,
        order.created_at.format("%Y-%m-%d")
    );
}
