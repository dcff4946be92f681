//! The fixed initial catalog a fresh store is seeded with.

use sugarrush_core::ProductId;

use crate::Product;

/// The fixed category set offered by the shop.
///
/// Presentation-level only; the data layer accepts any category string.
pub const CATEGORIES: [&str; 5] = [
    "Chocolates",
    "Gummies",
    "Hard Candies",
    "Baked Goods",
    "Sugar Free",
];

fn product(
    id: &str,
    name: &str,
    category: &str,
    price: u64,
    quantity: u32,
    description: &str,
    image_url: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        price,
        quantity,
        description: description.to_string(),
        image_url: Some(image_url.to_string()),
    }
}

/// Build the seed catalog, in its fixed storage order.
pub fn initial_catalog() -> Vec<Product> {
    vec![
        product(
            "1",
            "Rainbow Gummy Bears",
            "Gummies",
            399,
            50,
            "Classic chewy gummy bears in a variety of fruit flavors.",
            "https://images.unsplash.com/photo-1582058091505-f87a2e55a40f?auto=format&fit=crop&w=800&q=80",
        ),
        product(
            "2",
            "Dark Chocolate Truffles",
            "Chocolates",
            999,
            20,
            "Rich dark chocolate truffles dusted with cocoa powder.",
            "https://images.unsplash.com/photo-1548907040-4baa42d10919?auto=format&fit=crop&w=800&q=80",
        ),
        product(
            "3",
            "Sour Worms",
            "Gummies",
            299,
            100,
            "Tangy and sweet sour worms that pack a punch.",
            "https://images.unsplash.com/photo-1499195333224-3ce974eecb47?auto=format&fit=crop&w=800&q=80",
        ),
        product(
            "4",
            "Peppermint Swirls",
            "Hard Candies",
            199,
            150,
            "Refreshing peppermint hard candies, perfect for after dinner.",
            "https://images.unsplash.com/photo-1575224300306-1b8da36134ec?auto=format&fit=crop&w=800&q=80",
        ),
        product(
            "5",
            "Salted Caramel Fudge",
            "Baked Goods",
            699,
            10,
            "Handmade fudge with a perfect balance of sweet and salty.",
            "https://images.unsplash.com/photo-1514517220017-8ce97a34a7b6?auto=format&fit=crop&w=800&q=80",
        ),
        product(
            "6",
            "Sugar-Free Lollipops",
            "Sugar Free",
            449,
            45,
            "Delicious fruit flavored lollipops without the guilt.",
            "https://images.unsplash.com/photo-1505252585461-04db1eb84625?auto=format&fit=crop&w=800&q=80",
        ),
        product(
            "7",
            "Artisan Sourdough Loaf",
            "Baked Goods",
            249,
            15,
            "Freshly baked sourdough bread with a crispy crust and soft interior.",
            "https://images.unsplash.com/photo-1585478479383-c59ce877c8e0?auto=format&fit=crop&w=800&q=80",
        ),
        product(
            "8",
            "Decadent Chocolate Cake",
            "Baked Goods",
            899,
            8,
            "Rich, moist chocolate cake layered with creamy chocolate ganache.",
            "https://images.unsplash.com/photo-1578985545062-69928b1d9587?auto=format&fit=crop&w=800&q=80",
        ),
        product(
            "9",
            "Butter Croissants (Pack of 4)",
            "Baked Goods",
            349,
            12,
            "Flaky, golden-brown croissants made with real French butter.",
            "https://images.unsplash.com/photo-1555507036-ab1f4038808a?auto=format&fit=crop&w=800&q=80",
        ),
        product(
            "10",
            "Blueberry Muffins",
            "Baked Goods",
            149,
            20,
            "Soft muffins bursting with fresh blueberries and topped with sugar crumble.",
            "https://images.unsplash.com/photo-1563729768239-509f7a77b8b2?auto=format&fit=crop&w=800&q=80",
        ),
        product(
            "11",
            "Glazed Cinnamon Rolls",
            "Baked Goods",
            199,
            18,
            "Warm, gooey cinnamon rolls topped with sweet vanilla glaze.",
            "https://images.unsplash.com/photo-1509365465985-25d11c17e812?auto=format&fit=crop&w=800&q=80",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_has_unique_ids() {
        let catalog = initial_catalog();
        let mut ids: Vec<_> = catalog.iter().map(|p| p.id.clone()).collect();
        ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn seed_catalog_uses_known_categories() {
        for product in initial_catalog() {
            assert!(
                CATEGORIES.contains(&product.category.as_str()),
                "unexpected category {}",
                product.category
            );
        }
    }

    #[test]
    fn seed_catalog_starts_with_the_gummy_bears() {
        let catalog = initial_catalog();
        assert_eq!(catalog[0].id.as_str(), "1");
        assert_eq!(catalog[0].quantity, 50);
    }
}
