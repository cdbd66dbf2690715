// ==========================================
// 楼盘装修选材系统 - 目录 Repository 实现
// ==========================================
// 存储: SQLite (rusqlite)
// 并发: Arc<Mutex<Connection>> 串行化访问,与导入引擎的顺序模型一致
// ==========================================

use crate::db::{init_schema, open_sqlite_connection};
use crate::domain::{CatalogItem, CatalogItemFields, Category, Component};
use crate::repository::catalog_repo::CatalogRepository;
use crate::repository::error::{RepoResult, RepositoryError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

// ==========================================
// CatalogRepositoryImpl
// ==========================================
pub struct CatalogRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl CatalogRepositoryImpl {
    /// 创建新的 Repository 实例并初始化 schema
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepoResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        init_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建（测试用,连接需已应用统一 PRAGMA）
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepoResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            init_schema(&guard)?;
        }

        Ok(Self { conn })
    }

    fn lock(&self) -> RepoResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }
}

// ===== 行映射 =====

fn map_category(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get("id")?,
        tenant_id: row.get("tenant_id")?,
        name: row.get("name")?,
        sort_order: row.get("sort_order")?,
        is_default: row.get("is_default")?,
        created_at: row.get::<_, DateTime<Utc>>("created_at")?,
        updated_at: row.get::<_, DateTime<Utc>>("updated_at")?,
    })
}

fn map_component(row: &Row<'_>) -> rusqlite::Result<Component> {
    Ok(Component {
        id: row.get("id")?,
        tenant_id: row.get("tenant_id")?,
        category_id: row.get("category_id")?,
        name: row.get("name")?,
        sort_order: row.get("sort_order")?,
        is_default: row.get("is_default")?,
        created_at: row.get::<_, DateTime<Utc>>("created_at")?,
        updated_at: row.get::<_, DateTime<Utc>>("updated_at")?,
    })
}

fn map_catalog_item(row: &Row<'_>) -> rusqlite::Result<CatalogItem> {
    Ok(CatalogItem {
        id: row.get("id")?,
        tenant_id: row.get("tenant_id")?,
        category_id: row.get("category_id")?,
        component_id: row.get("component_id")?,
        description: row.get("description")?,
        model_number: row.get("model_number")?,
        manufacturer: row.get("manufacturer")?,
        finish: row.get("finish")?,
        color: row.get("color")?,
        image_url: row.get("image_url")?,
        created_at: row.get::<_, DateTime<Utc>>("created_at")?,
        updated_at: row.get::<_, DateTime<Utc>>("updated_at")?,
    })
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryImpl {
    async fn list_categories(&self, tenant_id: &str) -> RepoResult<Vec<Category>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, tenant_id, name, sort_order, is_default, created_at, updated_at
            FROM categories
            WHERE tenant_id = ?1
            ORDER BY sort_order
            "#,
        )?;

        let rows = stmt.query_map(params![tenant_id], map_category)?;
        let mut categories = Vec::new();
        for row in rows {
            categories.push(row?);
        }

        Ok(categories)
    }

    async fn list_components(
        &self,
        tenant_id: &str,
        category_id: &str,
    ) -> RepoResult<Vec<Component>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, tenant_id, category_id, name, sort_order, is_default,
                   created_at, updated_at
            FROM components
            WHERE tenant_id = ?1 AND category_id = ?2
            ORDER BY sort_order
            "#,
        )?;

        let rows = stmt.query_map(params![tenant_id, category_id], map_component)?;
        let mut components = Vec::new();
        for row in rows {
            components.push(row?);
        }

        Ok(components)
    }

    async fn find_category(&self, tenant_id: &str, name: &str) -> RepoResult<Option<Category>> {
        let conn = self.lock()?;
        let category = conn
            .query_row(
                r#"
                SELECT id, tenant_id, name, sort_order, is_default, created_at, updated_at
                FROM categories
                WHERE tenant_id = ?1 AND name = ?2 COLLATE NOCASE
                "#,
                params![tenant_id, name],
                map_category,
            )
            .optional()?;

        Ok(category)
    }

    async fn find_component(
        &self,
        tenant_id: &str,
        category_id: &str,
        name: &str,
    ) -> RepoResult<Option<Component>> {
        let conn = self.lock()?;
        let component = conn
            .query_row(
                r#"
                SELECT id, tenant_id, category_id, name, sort_order, is_default,
                       created_at, updated_at
                FROM components
                WHERE tenant_id = ?1 AND category_id = ?2 AND name = ?3 COLLATE NOCASE
                "#,
                params![tenant_id, category_id, name],
                map_component,
            )
            .optional()?;

        Ok(component)
    }

    async fn create_category(
        &self,
        tenant_id: &str,
        name: &str,
        sort_order: i64,
    ) -> RepoResult<Category> {
        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4().to_string(),
            tenant_id: tenant_id.to_string(),
            name: name.to_string(),
            sort_order,
            is_default: false,
            created_at: now,
            updated_at: now,
        };

        let conn = self.lock()?;
        conn.execute(
            r#"
            INSERT INTO categories (id, tenant_id, name, sort_order, is_default,
                                    created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                category.id,
                category.tenant_id,
                category.name,
                category.sort_order,
                category.is_default,
                category.created_at,
                category.updated_at,
            ],
        )?;

        Ok(category)
    }

    async fn create_component(
        &self,
        tenant_id: &str,
        category_id: &str,
        name: &str,
        sort_order: i64,
    ) -> RepoResult<Component> {
        let now = Utc::now();
        let component = Component {
            id: Uuid::new_v4().to_string(),
            tenant_id: tenant_id.to_string(),
            category_id: category_id.to_string(),
            name: name.to_string(),
            sort_order,
            is_default: false,
            created_at: now,
            updated_at: now,
        };

        let conn = self.lock()?;
        conn.execute(
            r#"
            INSERT INTO components (id, tenant_id, category_id, name, sort_order,
                                    is_default, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                component.id,
                component.tenant_id,
                component.category_id,
                component.name,
                component.sort_order,
                component.is_default,
                component.created_at,
                component.updated_at,
            ],
        )?;

        Ok(component)
    }

    async fn find_catalog_item(
        &self,
        tenant_id: &str,
        category_id: &str,
        component_id: &str,
        model_number: Option<&str>,
    ) -> RepoResult<Option<CatalogItem>> {
        let conn = self.lock()?;
        // 型号为 NULL 只与 NULL 匹配: 无型号条目与有型号条目是两条独立记录
        let item = conn
            .query_row(
                r#"
                SELECT id, tenant_id, category_id, component_id, description,
                       model_number, manufacturer, finish, color, image_url,
                       created_at, updated_at
                FROM catalog_items
                WHERE tenant_id = ?1 AND category_id = ?2 AND component_id = ?3
                  AND ((?4 IS NULL AND model_number IS NULL) OR model_number = ?4)
                "#,
                params![tenant_id, category_id, component_id, model_number],
                map_catalog_item,
            )
            .optional()?;

        Ok(item)
    }

    async fn create_catalog_item(
        &self,
        tenant_id: &str,
        category_id: &str,
        component_id: &str,
        fields: &CatalogItemFields,
    ) -> RepoResult<CatalogItem> {
        let now = Utc::now();
        let item = CatalogItem {
            id: Uuid::new_v4().to_string(),
            tenant_id: tenant_id.to_string(),
            category_id: category_id.to_string(),
            component_id: component_id.to_string(),
            description: fields.description.clone(),
            model_number: fields.model_number.clone(),
            manufacturer: fields.manufacturer.clone(),
            finish: fields.finish.clone(),
            color: fields.color.clone(),
            image_url: fields.image_url.clone(),
            created_at: now,
            updated_at: now,
        };

        let conn = self.lock()?;
        conn.execute(
            r#"
            INSERT INTO catalog_items (id, tenant_id, category_id, component_id,
                                       description, model_number, manufacturer,
                                       finish, color, image_url, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
            params![
                item.id,
                item.tenant_id,
                item.category_id,
                item.component_id,
                item.description,
                item.model_number,
                item.manufacturer,
                item.finish,
                item.color,
                item.image_url,
                item.created_at,
                item.updated_at,
            ],
        )?;

        Ok(item)
    }

    async fn update_catalog_item(&self, id: &str, fields: &CatalogItemFields) -> RepoResult<()> {
        let conn = self.lock()?;
        let updated = conn.execute(
            r#"
            UPDATE catalog_items
            SET description = ?2, model_number = ?3, manufacturer = ?4,
                finish = ?5, color = ?6, image_url = ?7, updated_at = ?8
            WHERE id = ?1
            "#,
            params![
                id,
                fields.description,
                fields.model_number,
                fields.manufacturer,
                fields.finish,
                fields.color,
                fields.image_url,
                Utc::now(),
            ],
        )?;

        if updated == 0 {
            return Err(RepositoryError::NotFound {
                entity: "catalog_item".to_string(),
                key: id.to_string(),
            });
        }

        Ok(())
    }
}
