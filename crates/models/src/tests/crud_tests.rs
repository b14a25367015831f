use crate::db::connect;
use crate::{category, product};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{DatabaseConnection, EntityTrait};
use uuid::Uuid;

/// Setup test database with migrations; None means "skip this test".
async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("migrations notice: {}", e);
    }
    Some(db)
}

#[tokio::test]
async fn test_category_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let name = format!("test_category_{}", Uuid::new_v4());
    let created = category::create(&db, &name).await?;
    assert!(created.id > 0);
    assert_eq!(created.name, name);
    assert!(created.is_active);

    // Active lookup sees it
    let found = category::find_active(&db, created.id).await?;
    assert_eq!(found.as_ref().map(|c| c.id), Some(created.id));

    // Deactivate, then the active lookup must miss it
    category::set_active(&db, created.id, false).await?;
    assert!(category::find_active(&db, created.id).await?.is_none());

    // Reactivation brings it back
    category::set_active(&db, created.id, true).await?;
    assert!(category::find_active(&db, created.id).await?.is_some());

    Ok(())
}

#[tokio::test]
async fn test_product_crud() -> Result<()> {
    let Some(db) = setup_test_db().await else { return Ok(()) };

    let cat = category::create(&db, &format!("prod_test_cat_{}", Uuid::new_v4())).await?;

    let created = product::create(&db, cat.id, "Laptop", Some("14 inch"), 999.5, 3).await?;
    assert!(created.id > 0);
    assert_eq!(created.category_id, cat.id);
    assert_eq!(created.name, "Laptop");
    assert_eq!(created.description.as_deref(), Some("14 inch"));
    assert_eq!(created.price, 999.5);
    assert_eq!(created.stock, 3);
    assert!(created.is_active);

    // Fresh ids per row
    let second = product::create(&db, cat.id, "Mouse", None, 19.9, 50).await?;
    assert_ne!(second.id, created.id);

    let found = product::find_active(&db, created.id).await?.expect("active product");
    assert_eq!(found.name, "Laptop");

    let all = product::list_active(&db).await?;
    assert!(all.iter().any(|p| p.id == created.id));
    let by_cat = product::list_active_by_category(&db, cat.id).await?;
    assert!(by_cat.iter().any(|p| p.id == created.id));
    assert!(by_cat.iter().all(|p| p.category_id == cat.id && p.is_active));

    // Full-field replace keeps the id and the active flag
    let replaced = product::replace(&db, found, cat.id, "Laptop Pro", None, 1299.0, 1).await?;
    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.name, "Laptop Pro");
    assert!(replaced.description.is_none());
    assert_eq!(replaced.price, 1299.0);
    assert!(replaced.is_active);

    // Soft delete removes it from every active read, but the row remains
    product::deactivate(&db, replaced).await?;
    assert!(product::find_active(&db, created.id).await?.is_none());
    let all = product::list_active(&db).await?;
    assert!(all.iter().all(|p| p.id != created.id));
    let by_cat = product::list_active_by_category(&db, cat.id).await?;
    assert!(by_cat.iter().all(|p| p.id != created.id));
    let raw = product::Entity::find_by_id(created.id).one(&db).await?;
    assert!(matches!(raw, Some(ref m) if !m.is_active));

    Ok(())
}
