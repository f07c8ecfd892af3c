//! MongoDB repository tests against a real server (testcontainers).
//!
//! Run with `cargo test -p domain_servicios -- --ignored` on a host with Docker.

use domain_servicios::*;
use test_utils::{TestDataBuilder, TestMongo};

fn input(code: &str, name: &str) -> CreateService {
    CreateService {
        code: code.to_string(),
        application: Application::Hands,
        service_name: name.to_string(),
        price: "10".to_string(),
    }
}

async fn repository(mongo: &TestMongo, test_name: &str) -> MongoServiceRepository {
    let builder = TestDataBuilder::from_test_name(test_name);
    let repo = MongoServiceRepository::new(mongo.database(&builder.database_name()));
    repo.init_indexes().await.unwrap();
    repo
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_crud_round_trip() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "mongo_crud").await;

    assert!(repo.list().await.unwrap().is_empty());

    let created = repo.insert(Service::new(input("S1", "Manicure"))).await.unwrap();
    let found = repo.find_by_code("S1").await.unwrap().unwrap();
    assert_eq!(found, created);

    let fields = ServiceFields {
        application: Application::Eyelashes,
        service_name: "Lifting".to_string(),
        price: "25".to_string(),
    };
    assert!(repo.update_fields("S1", &fields).await.unwrap());
    assert!(!repo.update_fields("S9", &fields).await.unwrap());
    assert_eq!(repo.find_by_code("S1").await.unwrap().unwrap().fields(), fields);

    assert!(repo.delete_by_code("S1").await.unwrap());
    assert!(!repo.delete_by_code("S1").await.unwrap());
    assert!(repo.find_by_code("S1").await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_unique_index_turns_duplicate_insert_into_already_exists() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "mongo_unique").await;

    repo.insert(Service::new(input("S1", "Manicure"))).await.unwrap();

    // straight to the repository, skipping the catalog's lookup
    let err = repo
        .insert(Service::new(input("S1", "Other")))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::AlreadyExists(code) if code == "S1"));

    let kept = repo.find_by_code("S1").await.unwrap().unwrap();
    assert_eq!(kept.service_name, "Manicure");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_init_indexes_is_idempotent() {
    let mongo = TestMongo::new().await;
    let repo = repository(&mongo, "mongo_indexes").await;

    repo.init_indexes().await.unwrap();
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_concurrent_creates_store_one_record() {
    let mongo = TestMongo::new().await;
    let catalog = ServiceCatalog::new(repository(&mongo, "mongo_race").await);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let catalog = catalog.clone();
            tokio::spawn(async move { catalog.create(input("S1", &format!("n{i}"))).await })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(e) => assert!(matches!(e, ServiceError::AlreadyExists(_))),
        }
    }

    assert_eq!(created, 1);
    assert_eq!(catalog.list().await.unwrap().len(), 1);
}
