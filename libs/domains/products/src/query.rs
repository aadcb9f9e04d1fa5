//! Filter and update documents for the products collection.

use mongodb::bson::{Document, doc, oid::ObjectId};

use crate::error::{ProductError, ProductResult};
use crate::models::ProductDraft;

pub fn parse_object_id(raw: &str) -> ProductResult<ObjectId> {
    ObjectId::parse_str(raw).map_err(|_| ProductError::InvalidId(raw.to_string()))
}

pub fn id_filter(id: ObjectId) -> Document {
    doc! { "_id": id }
}

/// Query parameters that may narrow a listing.
pub const FILTERABLE_FIELDS: [&str; 8] = [
    "_id",
    "product_name",
    "price",
    "currency",
    "discount",
    "vendor",
    "accessories",
    "is_essential",
];

/// Equality filter from query parameters.
///
/// Only product fields are used; any other parameter, operators such as
/// `$where` included, is dropped. Values are matched as strings except
/// `_id`, which must parse as an object id. A repeated parameter keeps its
/// first value.
pub fn filter_from_query(params: &[(String, String)]) -> ProductResult<Document> {
    let mut filter = Document::new();

    for (key, value) in params {
        if !FILTERABLE_FIELDS.contains(&key.as_str()) {
            tracing::debug!(parameter = %key, "Ignoring non-product query parameter");
            continue;
        }
        if filter.contains_key(key) {
            continue;
        }
        if key == "_id" {
            filter.insert(key.as_str(), parse_object_id(value)?);
        } else {
            filter.insert(key.as_str(), value.as_str());
        }
    }

    Ok(filter)
}

/// `$set` of every draft field; absent accessories are removed from the
/// stored document.
pub fn update_document(draft: &ProductDraft) -> ProductResult<Document> {
    let fields = mongodb::bson::to_document(draft)?;

    let mut update = doc! { "$set": fields };
    if draft.accessories.is_none() {
        update.insert("$unset", doc! { "accessories": "" });
    }
    Ok(update)
}
