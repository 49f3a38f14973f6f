use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, ContactDetails};
use crate::values::{ProductId, SellerId};

/// A product document as held by the store
///
/// `id` and `created_at` are store-assigned; `seller_id` is fixed at
/// creation and never changes afterwards. `updated_at` is stamped by
/// the client on each edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub image_url: String,
    pub category: Category,
    pub seller_id: SellerId,
    #[serde(flatten)]
    pub contact: ContactDetails,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Rebuild the write payload for this product, e.g. to resubmit it
    /// as a full-overwrite update
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            price: self.price,
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            category: self.category,
            seller_id: self.seller_id.clone(),
            contact: self.contact.clone(),
        }
    }
}

/// Validated write payload for a product
///
/// Everything the client supplies on create/update; the store fills in
/// the id and creation timestamp. Constructed only through
/// `ProductForm::validate`, so holding one implies the required-field
/// and contact-presence checks already passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub image_url: String,
    pub category: Category,
    pub seller_id: SellerId,
    #[serde(flatten)]
    pub contact: ContactDetails,
}

impl ProductDraft {
    /// Materialize this draft into a full product record with the
    /// given store-assigned identity
    pub fn into_product(self, id: ProductId, created_at: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            image_url: self.image_url,
            category: self.category,
            seller_id: self.seller_id,
            contact: self.contact,
            created_at,
            updated_at: None,
        }
    }
}
