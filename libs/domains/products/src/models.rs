use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// A zero price means the field was left out.
fn validate_price_present(price: i64) -> Result<(), ValidationError> {
    if price == 0 {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Product as stored in the products collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub product_name: String,
    pub price: i64,
    pub currency: String,
    #[serde(default)]
    pub discount: i64,
    pub vendor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessories: Option<Vec<String>>,
    #[serde(default)]
    pub is_essential: bool,
}

impl Product {
    pub fn from_draft(id: ObjectId, draft: ProductDraft) -> Self {
        Self {
            id,
            product_name: draft.product_name,
            price: draft.price,
            currency: draft.currency,
            discount: draft.discount,
            vendor: draft.vendor,
            accessories: draft.accessories,
            is_essential: draft.is_essential,
        }
    }

    /// Client-editable fields, used as the base for updates
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            product_name: self.product_name.clone(),
            price: self.price,
            currency: self.currency.clone(),
            discount: self.discount,
            vendor: self.vendor.clone(),
            accessories: self.accessories.clone(),
            is_essential: self.is_essential,
        }
    }
}

/// Client-supplied product fields.
///
/// Absent fields take their zero value so that a missing required field is
/// reported by validation rather than by deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct ProductDraft {
    #[validate(length(min = 1, max = 10))]
    #[schema(example = "googletalk")]
    pub product_name: String,

    #[validate(range(max = 1000), custom(function = "validate_price_present"))]
    #[schema(example = 250)]
    pub price: i64,

    /// ISO 4217 style code
    #[validate(length(equal = 3))]
    #[schema(example = "INR")]
    pub currency: String,

    pub discount: i64,

    #[validate(length(min = 1))]
    #[schema(example = "google")]
    pub vendor: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessories: Option<Vec<String>>,

    pub is_essential: bool,
}

/// Product as returned by the API, with `_id` as a hex string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    #[serde(rename = "_id")]
    #[schema(example = "65f1c0d2a4b3e2f1a0c9d8e7")]
    pub id: String,
    pub product_name: String,
    pub price: i64,
    pub currency: String,
    pub discount: i64,
    pub vendor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessories: Option<Vec<String>>,
    pub is_essential: bool,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_hex(),
            product_name: product.product_name,
            price: product.price,
            currency: product.currency,
            discount: product.discount,
            vendor: product.vendor,
            accessories: product.accessories,
            is_essential: product.is_essential,
        }
    }
}
