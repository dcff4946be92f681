use serde::{Deserialize, Serialize};

use sugarrush_core::{DomainError, ProductId};

/// A single sellable item in the catalog.
///
/// # Invariants
/// - `id` is assigned at creation and never reassigned.
/// - `quantity` is a stock count; every mutation must leave it meaningful
///   (the decrement path goes through [`Product::take_stock`], which refuses
///   to underflow).
///
/// Field names serialize in the catalog's wire casing (`imageUrl`), so a
/// persisted catalog written by an earlier build of the demo parses as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Unit price in the smallest currency unit.
    pub price: u64,
    /// Stock count.
    pub quantity: u32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    /// Remove `amount` units from stock.
    ///
    /// Check-then-decrement is a single step here so callers can treat it as
    /// one logical mutation; on error the product is untouched.
    pub fn take_stock(&mut self, amount: u32) -> Result<(), DomainError> {
        if amount == 0 {
            return Err(DomainError::validation("purchase amount cannot be zero"));
        }
        if amount > self.quantity {
            return Err(DomainError::insufficient_stock(amount, self.quantity));
        }
        self.quantity -= amount;
        Ok(())
    }
}

/// Create payload: every product field except the id, which the store
/// assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: u64,
    pub quantity: u32,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl NewProduct {
    /// Validate the payload before a product is created from it.
    ///
    /// Category is intentionally *not* checked against [`crate::CATEGORIES`]:
    /// the fixed set is a presentation affordance, not a data-layer rule.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(())
    }

    /// Materialize the product under the given id.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            price: self.price,
            quantity: self.quantity,
            description: self.description,
            image_url: self.image_url,
        }
    }
}

/// Partial update: each supplied field replaces the existing one wholesale
/// (shallow field replacement, not a deep merge).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ProductPatch {
    /// Merge this patch over `product`. The id is never touched.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(image_url) = self.image_url {
            product.image_url = Some(image_url);
        }
    }

    /// Convenience for the common restock/stock-correction update.
    pub fn quantity(quantity: u32) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::default()
        }
    }
}
