//! # Seed Catalog
//!
//! The six sweets a fresh demo store starts with. Two of them are out of
//! stock so both card states show up immediately.

use sweets_core::Sweet;

/// Builds the demo catalog, ids `"1"` to `"6"`.
pub fn demo_catalog() -> Vec<Sweet> {
    [
        ("1", "Chocolate Truffles", "Chocolate", 1299, 45, "Rich dark chocolate truffles"),
        ("2", "Strawberry Gummies", "Gummies", 599, 0, "Fresh strawberry flavored gummies"),
        ("3", "Caramel Fudge", "Fudge", 899, 23, "Creamy caramel fudge squares"),
        ("4", "Mint Hard Candy", "Hard Candy", 499, 120, "Refreshing mint hard candies"),
        ("5", "Lollipops Assorted", "Lollipops", 399, 78, "Colorful assorted lollipops"),
        ("6", "Sour Worms", "Gummies", 699, 0, "Tangy sour gummy worms"),
    ]
    .into_iter()
    .map(|(id, name, category, price_cents, quantity, description)| Sweet {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price_cents,
        quantity,
        description: Some(description.to_string()),
        image: None,
    })
    .collect()
}
