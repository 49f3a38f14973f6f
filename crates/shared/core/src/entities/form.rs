use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, ContactDetails, Product, ProductDraft};
use crate::values::SellerId;

/// Raw listing form state, one field per input
///
/// Holds text exactly as typed; `validate` is the only path from here
/// to a `ProductDraft`. A flat struct (rather than a keyed map) so the
/// required-field checks cover every field at compile time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub phone_no: String,
    pub whatsapp_no: String,
    pub email: String,
}

/// A single reason a form failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    MissingName,
    MissingPrice,
    /// Price present but not a number, or below the minimum of 1
    InvalidPrice(String),
    MissingDescription,
    MissingImageUrl,
    MissingCategory,
    /// Category text does not name a known category
    UnknownCategory(String),
    /// Phone, WhatsApp and email are all blank
    NoContactDetails,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::MissingName => write!(f, "Product name is required"),
            ValidationIssue::MissingPrice => write!(f, "Price is required"),
            ValidationIssue::InvalidPrice(raw) => {
                write!(f, "Price must be a number of at least 1, got '{raw}'")
            }
            ValidationIssue::MissingDescription => write!(f, "Description is required"),
            ValidationIssue::MissingImageUrl => write!(f, "Image link is required"),
            ValidationIssue::MissingCategory => write!(f, "Category is required"),
            ValidationIssue::UnknownCategory(raw) => write!(f, "Unknown category '{raw}'"),
            ValidationIssue::NoContactDetails => write!(
                f,
                "At least one contact detail (Phone, WhatsApp, or Email) is mandatory"
            ),
        }
    }
}

impl ProductForm {
    /// Pre-fill the form from an existing product, for editing
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            category: product.category.as_str().to_string(),
            phone_no: product.contact.phone_no.clone().unwrap_or_default(),
            whatsapp_no: product.contact.whatsapp_no.clone().unwrap_or_default(),
            email: product.contact.email.clone().unwrap_or_default(),
        }
    }

    /// Validate the form and produce a write payload for the given seller
    ///
    /// Collects every issue rather than stopping at the first, so the
    /// caller can surface them all at once. Whitespace-only input counts
    /// as missing.
    pub fn validate(&self, seller_id: &SellerId) -> Result<ProductDraft, Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            issues.push(ValidationIssue::MissingName);
        }

        let price_raw = self.price.trim();
        let mut price = None;
        if price_raw.is_empty() {
            issues.push(ValidationIssue::MissingPrice);
        } else {
            match price_raw.parse::<Decimal>() {
                Ok(value) if value >= Decimal::ONE => price = Some(value),
                _ => issues.push(ValidationIssue::InvalidPrice(price_raw.to_string())),
            }
        }

        if self.description.trim().is_empty() {
            issues.push(ValidationIssue::MissingDescription);
        }

        if self.image_url.trim().is_empty() {
            issues.push(ValidationIssue::MissingImageUrl);
        }

        let category_raw = self.category.trim();
        let mut category = None;
        if category_raw.is_empty() {
            issues.push(ValidationIssue::MissingCategory);
        } else {
            match Category::parse(category_raw) {
                Some(cat) => category = Some(cat),
                None => issues.push(ValidationIssue::UnknownCategory(category_raw.to_string())),
            }
        }

        let contact = ContactDetails::from_fields(&self.phone_no, &self.whatsapp_no, &self.email);
        if !contact.has_any() {
            issues.push(ValidationIssue::NoContactDetails);
        }

        if !issues.is_empty() {
            return Err(issues);
        }

        // issues is empty here, so price and category are both Some
        match (price, category) {
            (Some(price), Some(category)) => Ok(ProductDraft {
                name: name.to_string(),
                price,
                description: self.description.trim().to_string(),
                image_url: self.image_url.trim().to_string(),
                category,
                seller_id: seller_id.clone(),
                contact,
            }),
            _ => Err(vec![ValidationIssue::MissingPrice]),
        }
    }
}
