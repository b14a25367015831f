use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{category, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Category,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::CategoryId)
                .to(category::Column::Id)
                .into(),
        }
    }
}

impl Related<category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    if name.len() > 256 {
        return Err(errors::ModelError::Validation("name too long (max 256)".into()));
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), errors::ModelError> {
    if !price.is_finite() || price < 0.0 {
        return Err(errors::ModelError::Validation("price must be >= 0".into()));
    }
    Ok(())
}

pub fn validate_stock(stock: i32) -> Result<(), errors::ModelError> {
    if stock < 0 {
        return Err(errors::ModelError::Validation("stock must be >= 0".into()));
    }
    Ok(())
}

/// Insert a new product; new rows always start active.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    category_id: i32,
    name: &str,
    description: Option<&str>,
    price: f64,
    stock: i32,
) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    validate_price(price)?;
    validate_stock(stock)?;

    let now = Utc::now().into();
    let am = ActiveModel {
        id: NotSet,
        category_id: Set(category_id),
        name: Set(name.to_string()),
        description: Set(description.map(|d| d.to_string())),
        price: Set(price),
        stock: Set(stock),
        is_active: Set(true),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Fetch a product only if it exists and is active.
pub async fn find_active<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Id.eq(id))
        .filter(Column::IsActive.eq(true))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// All active products. No ordering guarantee.
pub async fn list_active<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::IsActive.eq(true))
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Active products within one category. No ordering guarantee.
pub async fn list_active_by_category<C: ConnectionTrait>(
    db: &C,
    category_id: i32,
) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::CategoryId.eq(category_id))
        .filter(Column::IsActive.eq(true))
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Full-field replace of the mutable columns; `is_active` is untouched.
pub async fn replace<C: ConnectionTrait>(
    db: &C,
    existing: Model,
    category_id: i32,
    name: &str,
    description: Option<&str>,
    price: f64,
    stock: i32,
) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    validate_price(price)?;
    validate_stock(stock)?;

    let mut am: ActiveModel = existing.into();
    am.category_id = Set(category_id);
    am.name = Set(name.to_string());
    am.description = Set(description.map(|d| d.to_string()));
    am.price = Set(price);
    am.stock = Set(stock);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Soft delete: flip `is_active` to false, keep the row.
pub async fn deactivate<C: ConnectionTrait>(db: &C, existing: Model) -> Result<(), errors::ModelError> {
    let mut am: ActiveModel = existing.into();
    am.is_active = Set(false);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}
