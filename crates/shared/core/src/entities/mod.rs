mod category;
mod contact;
mod form;
mod product;

pub use category::{Category, CategoryFilter};
pub use contact::ContactDetails;
pub use form::{ProductForm, ValidationIssue};
pub use product::{Product, ProductDraft};
