//! Static product catalog: categories of (name, description, price range)
//! items that every record is drawn from.

use rand::Rng;
use rand::rngs::StdRng;

/// One sellable product and its declared price range (inclusive, USD).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogItem {
    pub name: &'static str,
    pub description: &'static str,
    pub min_price: f64,
    pub max_price: f64,
}

impl CatalogItem {
    const fn new(
        name: &'static str,
        description: &'static str,
        min_price: f64,
        max_price: f64,
    ) -> Self {
        Self {
            name,
            description,
            min_price,
            max_price,
        }
    }

    /// Whether `price` lies inside `[min_price, max_price]`.
    pub fn contains_price(&self, price: f64) -> bool {
        price >= self.min_price && price <= self.max_price
    }
}

/// A named group of items. Item order is stable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Category {
    pub name: &'static str,
    pub items: &'static [CatalogItem],
}

pub const CATALOG: &[Category] = &[
    Category {
        name: "Electronics",
        items: &[
            CatalogItem::new("Wireless Bluetooth Headphones", "High-quality wireless headphones with noise cancellation", 150.0, 250.0),
            CatalogItem::new("Smartphone", "Latest generation smartphone with advanced camera", 800.0, 1200.0),
            CatalogItem::new("Laptop", "Professional laptop for work and gaming", 1000.0, 2500.0),
            CatalogItem::new("Smart Watch", "Fitness tracking smartwatch with health monitoring", 200.0, 400.0),
            CatalogItem::new("Tablet", "High-resolution tablet for productivity and entertainment", 300.0, 800.0),
            CatalogItem::new("Gaming Console", "Next-gen gaming console with 4K support", 500.0, 600.0),
            CatalogItem::new("Wireless Speaker", "Portable Bluetooth speaker with premium sound", 80.0, 200.0),
            CatalogItem::new("Camera", "Digital camera with professional features", 600.0, 1500.0),
        ],
    },
    Category {
        name: "Clothing",
        items: &[
            CatalogItem::new("Cotton T-Shirt", "Comfortable 100% cotton t-shirt in various colors", 15.0, 35.0),
            CatalogItem::new("Denim Jeans", "Classic fit denim jeans with premium quality", 50.0, 120.0),
            CatalogItem::new("Sneakers", "Comfortable athletic sneakers for daily wear", 80.0, 180.0),
            CatalogItem::new("Winter Jacket", "Insulated winter jacket for cold weather", 100.0, 300.0),
            CatalogItem::new("Dress Shirt", "Professional dress shirt for office wear", 40.0, 90.0),
            CatalogItem::new("Running Shoes", "Performance running shoes with advanced cushioning", 120.0, 250.0),
            CatalogItem::new("Hoodie", "Cozy pullover hoodie for casual wear", 45.0, 85.0),
            CatalogItem::new("Formal Suit", "Professional business suit for formal occasions", 300.0, 800.0),
        ],
    },
    Category {
        name: "Home & Garden",
        items: &[
            CatalogItem::new("Coffee Maker", "Programmable coffee maker with thermal carafe", 80.0, 200.0),
            CatalogItem::new("Vacuum Cleaner", "Powerful vacuum cleaner for all floor types", 150.0, 400.0),
            CatalogItem::new("Air Purifier", "HEPA air purifier for clean indoor air", 200.0, 500.0),
            CatalogItem::new("Garden Tool Set", "Complete gardening tools for outdoor maintenance", 60.0, 150.0),
            CatalogItem::new("Kitchen Knife Set", "Professional chef knife set with storage block", 100.0, 300.0),
            CatalogItem::new("Bed Sheets", "Luxury cotton bed sheets for comfortable sleep", 50.0, 150.0),
            CatalogItem::new("Dining Table", "Elegant dining table for family gatherings", 400.0, 1200.0),
            CatalogItem::new("Outdoor Grill", "Gas grill for backyard barbecue cooking", 300.0, 800.0),
        ],
    },
    Category {
        name: "Books",
        items: &[
            CatalogItem::new("Programming Guide", "Comprehensive guide to modern programming", 30.0, 60.0),
            CatalogItem::new("Fiction Novel", "Best-selling fiction novel by renowned author", 15.0, 25.0),
            CatalogItem::new("Cookbook", "Collection of gourmet recipes for home cooking", 25.0, 45.0),
            CatalogItem::new("Self-Help Book", "Personal development and motivation guide", 20.0, 35.0),
            CatalogItem::new("History Book", "Detailed historical account of significant events", 35.0, 55.0),
            CatalogItem::new("Science Textbook", "Educational textbook for advanced science topics", 80.0, 150.0),
            CatalogItem::new("Art Book", "Beautiful collection of artistic works and techniques", 40.0, 80.0),
            CatalogItem::new("Travel Guide", "Comprehensive travel guide with insider tips", 25.0, 40.0),
        ],
    },
];

/// Pick a category uniformly, then an item uniformly within it.
///
/// Items in small categories are therefore more likely than items in large
/// ones; with the built-in catalog every category has eight items.
pub fn pick_category_and_item(
    rng: &mut StdRng,
) -> (&'static Category, &'static CatalogItem) {
    let category = &CATALOG[rng.random_range(0..CATALOG.len())];
    let item = &category.items[rng.random_range(0..category.items.len())];
    (category, item)
}

/// Look up a category by exact name.
#[cfg(test)]
fn category(name: &str) -> Option<&'static Category> {
    CATALOG.iter().find(|c| c.name == name)
}

/// Reverse lookup from a product name to its catalog entry.
pub fn find_item(product_name: &str) -> Option<&'static CatalogItem> {
    CATALOG
        .iter()
        .flat_map(|c| c.items.iter())
        .find(|item| item.name == product_name)
}
