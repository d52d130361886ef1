// Catalog store: seeded defaults and user-added entries

#[path = "../helpers/mod.rs"]
#[macro_use]
mod helpers;

use helpers::create_test_pool;
use jewelbill::catalog::{CatalogItem, CatalogRepository, SqliteCatalogRepository};
use jewelbill::core::{AppError, MetalType};

fn names(items: &[CatalogItem]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}

#[tokio::test]
async fn test_defaults_are_seeded() {
    let repo = SqliteCatalogRepository::new(create_test_pool().await);

    let gold = repo.list_by_metal(MetalType::Gold).await.unwrap();
    let silver = repo.list_by_metal(MetalType::Silver).await.unwrap();

    assert_eq!(
        names(&gold),
        vec!["Bangle", "Chain", "Earrings", "Necklace", "Ring"]
    );
    assert_eq!(names(&silver), vec!["Anklet", "Bracelet", "Idol", "Toe Ring"]);
    assert!(gold.iter().chain(silver.iter()).all(|i| i.is_default));
}

#[tokio::test]
async fn test_user_items_listed_after_defaults() {
    let repo = SqliteCatalogRepository::new(create_test_pool().await);

    let created = repo
        .insert(&CatalogItem::new("Armlet", MetalType::Gold).unwrap())
        .await
        .unwrap();
    assert!(created.id.is_some());
    assert!(!created.is_default);

    let gold = repo.list_by_metal(MetalType::Gold).await.unwrap();
    assert_eq!(gold.len(), 6);
    assert_eq!(gold.last().unwrap().name, "Armlet");

    // Other metal is unaffected
    let silver = repo.list_by_metal(MetalType::Silver).await.unwrap();
    assert_eq!(silver.len(), 4);
}

#[tokio::test]
async fn test_duplicate_name_rejected_case_insensitively() {
    let repo = SqliteCatalogRepository::new(create_test_pool().await);

    let result = repo
        .insert(&CatalogItem::new("ring", MetalType::Gold).unwrap())
        .await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));

    // The same name is fine under the other metal
    let result = repo
        .insert(&CatalogItem::new("Ring", MetalType::Silver).unwrap())
        .await;
    assert!(result.is_ok());
}
