//! Fixed shop catalog shown on the home page.

use derive_more::Display;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    #[display("equipment")]
    Equipment,
    #[display("fish")]
    Fish,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 2] = [Self::Fish, Self::Equipment];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Equipment => "Peralatan",
            Self::Fish => "Ikan Koi",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.to_string() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    /// Rupiah
    pub price: u64,
    pub image: &'static str,
    pub category: ProductCategory,
}

pub const PRODUCTS: &[Product] = &[
    Product {
        id: 1,
        name: "Kohaku Tosai 15cm",
        price: 750_000,
        image: "/images/products/kohaku-tosai.jpg",
        category: ProductCategory::Fish,
    },
    Product {
        id: 2,
        name: "Showa Nisai 30cm",
        price: 2_500_000,
        image: "/images/products/showa-nisai.jpg",
        category: ProductCategory::Fish,
    },
    Product {
        id: 3,
        name: "Taisho Sanke Tosai 18cm",
        price: 900_000,
        image: "/images/products/sanke-tosai.jpg",
        category: ProductCategory::Fish,
    },
    Product {
        id: 4,
        name: "Shiro Utsuri Sansai 40cm",
        price: 4_200_000,
        image: "/images/products/shiro-utsuri.jpg",
        category: ProductCategory::Fish,
    },
    Product {
        id: 5,
        name: "Pakan Koi Growth 5kg",
        price: 385_000,
        image: "/images/products/pakan-growth.jpg",
        category: ProductCategory::Equipment,
    },
    Product {
        id: 6,
        name: "Pompa Air 6000 L/jam",
        price: 1_150_000,
        image: "/images/products/pompa-air.jpg",
        category: ProductCategory::Equipment,
    },
    Product {
        id: 7,
        name: "Filter Kolam Bio Drum",
        price: 3_750_000,
        image: "/images/products/filter-drum.jpg",
        category: ProductCategory::Equipment,
    },
    Product {
        id: 8,
        name: "Jaring Koi Diameter 60cm",
        price: 175_000,
        image: "/images/products/jaring.jpg",
        category: ProductCategory::Equipment,
    },
];

/// Catalog entries, optionally restricted to one category.
pub fn products(category: Option<ProductCategory>) -> Vec<&'static Product> {
    PRODUCTS
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .collect()
}

/// Formats rupiah with dot thousands separators, e.g. `Rp 1.150.000`.
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {grouped}")
}

/// Like [`format_rupiah`] for backend amounts. Negative amounts show as 0.
pub fn format_price(amount: Decimal) -> String {
    format_rupiah(amount.round().to_u64().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_category_is_equipment_or_fish() {
        for product in PRODUCTS {
            let value = serde_json::to_value(product.category).unwrap();
            assert!(
                value == "equipment" || value == "fish",
                "{} has category {value}",
                product.name
            );
        }
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = PRODUCTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PRODUCTS.len());
    }

    #[test]
    fn filter_by_category() {
        let fish = products(Some(ProductCategory::Fish));
        assert!(!fish.is_empty());
        assert!(fish.iter().all(|p| p.category == ProductCategory::Fish));
        let equipment = products(Some(ProductCategory::Equipment));
        assert_eq!(fish.len() + equipment.len(), products(None).len());
        assert_eq!(ProductCategory::parse("fish"), Some(ProductCategory::Fish));
        assert_eq!(ProductCategory::parse("koi"), None);
    }

    #[test]
    fn rupiah_formatting() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(999), "Rp 999");
        assert_eq!(format_rupiah(1_000), "Rp 1.000");
        assert_eq!(format_rupiah(1_150_000), "Rp 1.150.000");
        assert_eq!(format_price(Decimal::new(2_500_000_49, 2)), "Rp 2.500.000");
    }
}
