//! Catalog browsing commands: cats and products.

use clap::Subcommand;

use pawsome_core::{CatId, ProductId};
use pawsome_client::api::ProductQuery;
use pawsome_client::models::Cat;
use pawsome_client::state::AppState;

#[derive(Subcommand)]
pub enum CatsAction {
    /// List adoptable cats
    List {
        /// Filter by breed (case-insensitive)
        #[arg(long)]
        breed: Option<String>,

        /// Filter by gender
        #[arg(long)]
        gender: Option<String>,

        /// Filter by energy level
        #[arg(long)]
        energy: Option<String>,

        /// Only cats that are good with kids
        #[arg(long)]
        good_with_kids: bool,
    },
    /// Show one cat in detail
    Show {
        /// Cat ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ProductsAction {
    /// List shop products
    List {
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one product in detail
    Show {
        /// Product ID
        id: String,
    },
}

pub async fn run_cats(
    state: &AppState,
    action: CatsAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CatsAction::List {
            breed,
            gender,
            energy,
            good_with_kids,
        } => {
            let cats = state.api().cats().list().await?;
            // Filtering happens client-side over the cached listing
            let matching: Vec<&Cat> = cats
                .iter()
                .filter(|cat| matches_filters(cat, breed.as_deref(), gender.as_deref(), energy.as_deref(), good_with_kids))
                .collect();

            if matching.is_empty() {
                println!("No cats match the filters");
                return Ok(());
            }
            for cat in matching {
                let fee = cat
                    .adoption_fee
                    .map_or_else(|| "-".to_string(), |fee| format!("RM{fee:.2}"));
                let adopted = if cat.is_adopted { " [adopted]" } else { "" };
                println!(
                    "{}  {} ({}, {}y, {}) energy={} personality={} fee={}{}",
                    cat.id,
                    cat.name,
                    cat.breed,
                    cat.age,
                    cat.gender,
                    cat.traits.energy_level,
                    cat.traits.personality,
                    fee,
                    adopted
                );
            }
        }
        CatsAction::Show { id } => {
            let cat = state.api().cats().get(&CatId::new(id)).await?;
            println!("{} - {} ({})", cat.name, cat.breed, cat.gender);
            println!("age: {} years", cat.age);
            println!(
                "traits: energy={} maintenance={} personality={} kids={}",
                cat.traits.energy_level,
                cat.traits.maintenance_level,
                cat.traits.personality,
                if cat.traits.good_with_kids { "yes" } else { "no" }
            );
            if let Some(fee) = cat.adoption_fee {
                println!("adoption fee: RM{fee:.2}");
            }
            println!();
            println!("{}", cat.description);
        }
    }
    Ok(())
}

pub async fn run_products(
    state: &AppState,
    action: ProductsAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProductsAction::List { category } => {
            let products = state
                .api()
                .products()
                .list(&ProductQuery { category })
                .await?;

            if products.is_empty() {
                println!("No products found");
                return Ok(());
            }
            for product in products {
                let inactive = if product.is_active { "" } else { " [inactive]" };
                println!(
                    "{}  {} ({}) RM{:.2} stock={}{}",
                    product.id, product.name, product.category, product.price, product.stock, inactive
                );
            }
        }
        ProductsAction::Show { id } => {
            let product = state.api().products().get(&ProductId::new(id)).await?;
            println!("{} ({})", product.name, product.category);
            println!("price: RM{:.2}", product.price);
            println!("stock: {}", product.stock);
            println!();
            println!("{}", product.description);
        }
    }
    Ok(())
}

/// Mirror the browse page's filter rules.
fn matches_filters(
    cat: &Cat,
    breed: Option<&str>,
    gender: Option<&str>,
    energy: Option<&str>,
    good_with_kids: bool,
) -> bool {
    if let Some(breed) = breed
        && !cat.breed.eq_ignore_ascii_case(breed)
    {
        return false;
    }
    if let Some(gender) = gender
        && cat.gender != gender
    {
        return false;
    }
    if let Some(energy) = energy
        && cat.traits.energy_level != energy
    {
        return false;
    }
    if good_with_kids && !cat.traits.good_with_kids {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    use pawsome_client::models::CatTraits;

    fn cat(breed: &str, gender: &str, energy: &str, kids: bool) -> Cat {
        Cat {
            id: CatId::new("c1"),
            name: "Miso".to_string(),
            breed: breed.to_string(),
            age: 3,
            gender: gender.to_string(),
            description: String::new(),
            image: None,
            adoption_fee: None,
            is_adopted: false,
            traits: CatTraits {
                energy_level: energy.to_string(),
                maintenance_level: "low".to_string(),
                personality: "calm".to_string(),
                good_with_kids: kids,
            },
        }
    }

    #[test]
    fn test_breed_filter_is_case_insensitive() {
        let c = cat("Maine Coon", "female", "low", true);
        assert!(matches_filters(&c, Some("maine coon"), None, None, false));
        assert!(!matches_filters(&c, Some("bombay"), None, None, false));
    }

    #[test]
    fn test_kids_filter_only_restricts_when_set() {
        let c = cat("Bombay", "male", "high", false);
        assert!(matches_filters(&c, None, None, None, false));
        assert!(!matches_filters(&c, None, None, None, true));
    }

    #[test]
    fn test_filters_combine() {
        let c = cat("Bombay", "male", "high", true);
        assert!(matches_filters(&c, Some("Bombay"), Some("male"), Some("high"), true));
        assert!(!matches_filters(&c, Some("Bombay"), Some("female"), Some("high"), true));
    }
}
