// Billing flow against the SQLite store
//
// Exercises BillService end to end with the real repository: rates,
// adding, listing, removing, summarizing and clearing a bill.

#[path = "../helpers/mod.rs"]
#[macro_use]
mod helpers;

use std::sync::Arc;

use helpers::{count_rows, create_test_pool, TestDataFactory};
use jewelbill::billing::{
    BillService, LineItemRepository, MetalRates, SqliteLineItemRepository,
};
use jewelbill::core::{AppError, MetalType};
use jewelbill::pricing::PriceCalculator;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sqlx::SqlitePool;

async fn service_with_pool() -> (BillService, SqlitePool) {
    let pool = create_test_pool().await;
    let repo = Arc::new(SqliteLineItemRepository::new(pool.clone()));
    (BillService::new(repo, PriceCalculator::new()), pool)
}

async fn started_bill() -> (BillService, SqlitePool) {
    let (service, pool) = service_with_pool().await;
    service.set_rates(TestDataFactory::rates()).await.unwrap();
    (service, pool)
}

#[tokio::test]
async fn test_full_bill_matches_worked_examples() {
    let (service, _pool) = started_bill().await;

    for item in TestDataFactory::worked_examples() {
        service.add(item).await.unwrap();
    }

    let summary = service.summarize().await.unwrap();
    assert_eq!(summary.subtotal(MetalType::Silver), dec!(14262));
    assert_eq!(summary.subtotal(MetalType::Gold), dec!(151650));
    assert_eq!(summary.grand_total, dec!(165912));
}

#[tokio::test]
async fn test_added_item_is_persisted_exactly() {
    let (service, pool) = started_bill().await;

    let added = service
        .add(TestDataFactory::new_item(
            "Toe Ring",
            MetalType::Silver,
            dec!(2.345),
            2,
            dec!(80.5),
        ))
        .await
        .unwrap();

    let id = added.id.expect("store assigns an id");
    let repo = SqliteLineItemRepository::new(pool.clone());
    let stored = repo.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(stored.name, "Toe Ring");
    assert_eq!(stored.weight, dec!(2.345));
    assert_eq!(stored.final_weight, dec!(5.159));
    assert_eq!(stored.total_price, added.total_price);
    assert_eq!(count_rows(&pool, "line_items").await, 1);
}

#[tokio::test]
async fn test_items_listed_in_insertion_order() {
    let (service, _pool) = started_bill().await;

    for item in TestDataFactory::worked_examples() {
        service.add(item).await.unwrap();
    }

    let names: Vec<_> = service
        .items()
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(names, vec!["Anklet", "Bracelet", "Necklace"]);
}

#[tokio::test]
async fn test_remove_item() {
    let (service, _pool) = started_bill().await;

    let first = service
        .add(TestDataFactory::worked_examples().remove(0))
        .await
        .unwrap();
    service
        .add(TestDataFactory::worked_examples().remove(2))
        .await
        .unwrap();

    service.remove(first.id.unwrap()).await.unwrap();

    let items = service.items().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].metal_type, MetalType::Gold);

    // Removing it again reports the miss
    let err = service.remove(first.id.unwrap()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_get_missing_item_is_not_found() {
    let (service, _pool) = started_bill().await;
    assert!(matches!(service.get(99).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_empty_bill_summary() {
    let (service, _pool) = started_bill().await;

    let summary = service.summarize().await.unwrap();
    assert!(summary.is_empty());
    assert_eq!(summary.grand_total, Decimal::ZERO);
}

#[tokio::test]
async fn test_summary_requires_rates() {
    let (service, _pool) = service_with_pool().await;
    assert!(matches!(
        service.summarize().await,
        Err(AppError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_invalid_item_is_not_stored() {
    let (service, pool) = started_bill().await;

    let result = service
        .add(TestDataFactory::new_item(
            "Ring",
            MetalType::Gold,
            Decimal::ZERO,
            1,
            dec!(100),
        ))
        .await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert_eq!(count_rows(&pool, "line_items").await, 0);
}

#[tokio::test]
async fn test_invalid_rates_rejected() {
    let (service, _pool) = service_with_pool().await;

    let result = service
        .set_rates(MetalRates {
            gold_rate: Decimal::ZERO,
            silver_rate: dec!(108),
        })
        .await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert!(service.rates().await.is_none());
}

#[tokio::test]
async fn test_clear_starts_fresh_bill() {
    let (service, pool) = started_bill().await;

    for item in TestDataFactory::worked_examples() {
        service.add(item).await.unwrap();
    }

    assert_eq!(service.clear().await.unwrap(), 3);
    assert_eq!(count_rows(&pool, "line_items").await, 0);
    assert!(service.rates().await.is_none());

    // A new bill needs fresh rates
    let result = service
        .add(TestDataFactory::worked_examples().remove(0))
        .await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn test_rates_apply_to_items_added_after_change() {
    let (service, _pool) = started_bill().await;

    let before = service
        .add(TestDataFactory::worked_examples().remove(0))
        .await
        .unwrap();

    service
        .set_rates(MetalRates {
            gold_rate: dec!(9100),
            silver_rate: dec!(110),
        })
        .await
        .unwrap();

    let after = service
        .add(TestDataFactory::worked_examples().remove(0))
        .await
        .unwrap();

    // Stored prices are never recomputed
    assert_eq!(before.total_price, dec!(5002));
    assert_eq!(after.total_price, dec!(5090));
    assert_eq!(
        service.items().await.unwrap()[0].total_price,
        dec!(5002)
    );
}
