use models::{category, product};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::ServiceError;

pub const PRODUCT_UNAVAILABLE: &str = "Product not found or inactive";
pub const CATEGORY_UNAVAILABLE: &str = "Category not found or inactive";

/// Full set of mutable product fields; create and update both take the whole
/// thing (update is a full replace, not a patch).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub category_id: i32,
}

impl ProductInput {
    pub fn validate(&self) -> Result<(), ServiceError> {
        product::validate_name(&self.name)?;
        product::validate_price(self.price)?;
        product::validate_stock(self.stock)?;
        Ok(())
    }
}

/// Two-step integrity check.
/// 1. The product must exist and be active, else `NotFound`.
/// 2. Its parent category must exist and be active, else `CategoryUnavailable`
///    (the product exists but is in an unusable state — categories can be
///    deactivated independently of their products, and nothing cascades).
async fn find_checked<C: ConnectionTrait>(db: &C, product_id: i32) -> Result<product::Model, ServiceError> {
    let Some(existing) = product::find_active(db, product_id).await? else {
        return Err(ServiceError::NotFound(PRODUCT_UNAVAILABLE.into()));
    };
    if category::find_active(db, existing.category_id).await?.is_none() {
        return Err(ServiceError::CategoryUnavailable(CATEGORY_UNAVAILABLE.into()));
    }
    Ok(existing)
}

/// All active products. No ordering guarantee.
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>, ServiceError> {
    Ok(product::list_active(db).await?)
}

/// Active products in one category; the category itself must be active.
/// Here the category is the request target, so a bad one is `NotFound`.
pub async fn list_products_by_category(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<Vec<product::Model>, ServiceError> {
    if category::find_active(db, category_id).await?.is_none() {
        return Err(ServiceError::NotFound(CATEGORY_UNAVAILABLE.into()));
    }
    Ok(product::list_active_by_category(db, category_id).await?)
}

pub async fn get_product(db: &DatabaseConnection, product_id: i32) -> Result<product::Model, ServiceError> {
    find_checked(db, product_id).await
}

/// Create a product after confirming its target category is active.
/// Validate-then-write runs inside one transaction.
pub async fn create_product(
    db: &DatabaseConnection,
    input: ProductInput,
) -> Result<product::Model, ServiceError> {
    input.validate()?;
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    if category::find_active(&txn, input.category_id).await?.is_none() {
        return Err(ServiceError::CategoryUnavailable(CATEGORY_UNAVAILABLE.into()));
    }
    let created = product::create(
        &txn,
        input.category_id,
        &input.name,
        input.description.as_deref(),
        input.price,
        input.stock,
    )
    .await?;

    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(product_id = created.id, category_id = created.category_id, "product created");
    Ok(created)
}

/// Full-field replace after the integrity check. A changed `category_id` is
/// re-validated against the active-category rule before the write.
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i32,
    input: ProductInput,
) -> Result<product::Model, ServiceError> {
    input.validate()?;
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    let existing = find_checked(&txn, product_id).await?;
    if input.category_id != existing.category_id
        && category::find_active(&txn, input.category_id).await?.is_none()
    {
        return Err(ServiceError::CategoryUnavailable(CATEGORY_UNAVAILABLE.into()));
    }
    let updated = product::replace(
        &txn,
        existing,
        input.category_id,
        &input.name,
        input.description.as_deref(),
        input.price,
        input.stock,
    )
    .await?;

    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(product_id = updated.id, "product updated");
    Ok(updated)
}

/// Soft delete after the integrity check. Not idempotent: the second call
/// misses the active-row filter and reports `NotFound`.
pub async fn delete_product(db: &DatabaseConnection, product_id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    let existing = find_checked(&txn, product_id).await?;
    product::deactivate(&txn, existing).await?;

    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(product_id, "product marked inactive");
    Ok(())
}
