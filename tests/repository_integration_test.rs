// ==========================================
// 楼盘装修选材系统 - 仓储层集成测试
// ==========================================
// 覆盖: 大小写不敏感查找 / 唯一约束冲突归类 /
//       NULL 型号匹配语义 / 覆写与 NotFound
// ==========================================

mod test_helpers;

use catalog_import::domain::CatalogItemFields;
use catalog_import::repository::{CatalogRepository, RepositoryError};
use test_helpers::create_test_repo;

const TENANT: &str = "tenant-001";

#[tokio::test]
async fn test_find_category_case_insensitive() {
    let (_tmp, _db_path, repo) = create_test_repo().expect("创建测试数据库失败");

    repo.create_category(TENANT, "Plumbing", 0)
        .await
        .expect("创建分类失败");

    let found = repo.find_category(TENANT, "pLuMbInG").await.unwrap();
    assert!(found.is_some());
    // 回读的是存储视图的原始名称
    assert_eq!(found.unwrap().name, "Plumbing");
}

#[tokio::test]
async fn test_duplicate_category_maps_to_unique_violation() {
    let (_tmp, _db_path, repo) = create_test_repo().expect("创建测试数据库失败");

    repo.create_category(TENANT, "Plumbing", 0)
        .await
        .expect("创建分类失败");

    // 仅大小写不同也算重复（NOCASE 唯一索引）
    let err = repo.create_category(TENANT, "PLUMBING", 1).await.unwrap_err();
    assert!(
        matches!(err, RepositoryError::UniqueConstraintViolation(_)),
        "期望 UniqueConstraintViolation,实际 {:?}",
        err
    );

    // 不同租户同名不冲突
    assert!(repo.create_category("tenant-002", "Plumbing", 0).await.is_ok());
}

#[tokio::test]
async fn test_component_unique_within_category_only() {
    let (_tmp, _db_path, repo) = create_test_repo().expect("创建测试数据库失败");

    let plumbing = repo.create_category(TENANT, "Plumbing", 0).await.unwrap();
    let kitchen = repo.create_category(TENANT, "Kitchen", 1).await.unwrap();

    repo.create_component(TENANT, &plumbing.id, "Hardware", 0)
        .await
        .expect("创建部件失败");

    // 同分类重名冲突
    let err = repo
        .create_component(TENANT, &plumbing.id, "hardware", 1)
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::UniqueConstraintViolation(_)));

    // 跨分类同名合法
    assert!(repo
        .create_component(TENANT, &kitchen.id, "Hardware", 0)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_catalog_item_null_model_matching() {
    let (_tmp, _db_path, repo) = create_test_repo().expect("创建测试数据库失败");

    let category = repo.create_category(TENANT, "Plumbing", 0).await.unwrap();
    let component = repo
        .create_component(TENANT, &category.id, "Faucet", 0)
        .await
        .unwrap();

    let no_model = CatalogItemFields {
        description: Some("generic".to_string()),
        ..Default::default()
    };
    repo.create_catalog_item(TENANT, &category.id, &component.id, &no_model)
        .await
        .expect("创建无型号条目失败");

    // NULL 只与 NULL 匹配
    let hit = repo
        .find_catalog_item(TENANT, &category.id, &component.id, None)
        .await
        .unwrap();
    assert!(hit.is_some());

    let miss = repo
        .find_catalog_item(TENANT, &category.id, &component.id, Some("A100"))
        .await
        .unwrap();
    assert!(miss.is_none());
}

#[tokio::test]
async fn test_update_replaces_all_fields() {
    let (_tmp, _db_path, repo) = create_test_repo().expect("创建测试数据库失败");

    let category = repo.create_category(TENANT, "Plumbing", 0).await.unwrap();
    let component = repo
        .create_component(TENANT, &category.id, "Faucet", 0)
        .await
        .unwrap();

    let original = CatalogItemFields {
        description: Some("Basin mixer".to_string()),
        model_number: Some("A100".to_string()),
        manufacturer: Some("Acme".to_string()),
        finish: Some("Chrome".to_string()),
        color: Some("Silver".to_string()),
        image_url: Some("http://img/a100.png".to_string()),
    };
    let item = repo
        .create_catalog_item(TENANT, &category.id, &component.id, &original)
        .await
        .unwrap();

    let replacement = CatalogItemFields {
        model_number: Some("A100".to_string()),
        manufacturer: Some("NewCo".to_string()),
        ..Default::default()
    };
    repo.update_catalog_item(&item.id, &replacement)
        .await
        .expect("覆写失败");

    let stored = repo
        .find_catalog_item(TENANT, &category.id, &component.id, Some("A100"))
        .await
        .unwrap()
        .expect("覆写后条目应保留");

    assert_eq!(stored.id, item.id);
    assert_eq!(stored.manufacturer.as_deref(), Some("NewCo"));
    assert_eq!(stored.description, None);
    assert_eq!(stored.finish, None);
    assert_eq!(stored.color, None);
    assert_eq!(stored.image_url, None);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let (_tmp, _db_path, repo) = create_test_repo().expect("创建测试数据库失败");

    let err = repo
        .update_catalog_item("no-such-id", &CatalogItemFields::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_listing_orders_by_sort_order() {
    let (_tmp, _db_path, repo) = create_test_repo().expect("创建测试数据库失败");

    repo.create_category(TENANT, "Zeta", 2).await.unwrap();
    repo.create_category(TENANT, "Alpha", 0).await.unwrap();
    repo.create_category(TENANT, "Mid", 1).await.unwrap();

    let categories = repo.list_categories(TENANT).await.unwrap();
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
}
