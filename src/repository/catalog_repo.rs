// ==========================================
// 楼盘装修选材系统 - 目录 Repository Trait
// ==========================================
// 职责: 定义导入引擎消费的数据访问接口
// 约定: 所有操作按租户隔离,单次调用独立原子
// ==========================================

use crate::domain::{CatalogItem, CatalogItemFields, Category, Component};
use crate::repository::error::RepoResult;
use async_trait::async_trait;

// ==========================================
// CatalogRepository Trait
// ==========================================
// 实现者: CatalogRepositoryImpl（rusqlite）; 测试可用内存 Mock
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    // ===== 参照数据读取 =====

    /// 列出租户全部分类（用于解析器缓存播种）
    async fn list_categories(&self, tenant_id: &str) -> RepoResult<Vec<Category>>;

    /// 列出分类下全部部件（用于解析器缓存播种）
    async fn list_components(
        &self,
        tenant_id: &str,
        category_id: &str,
    ) -> RepoResult<Vec<Component>>;

    /// 按名称查找分类（大小写不敏感）
    async fn find_category(&self, tenant_id: &str, name: &str) -> RepoResult<Option<Category>>;

    /// 按名称查找部件（分类范围内,大小写不敏感）
    async fn find_component(
        &self,
        tenant_id: &str,
        category_id: &str,
        name: &str,
    ) -> RepoResult<Option<Component>>;

    // ===== 参照数据创建 =====

    /// 创建分类（is_default 恒为 false,sort_order 由调用方计算）
    async fn create_category(
        &self,
        tenant_id: &str,
        name: &str,
        sort_order: i64,
    ) -> RepoResult<Category>;

    /// 创建部件（is_default 恒为 false,sort_order 由调用方计算）
    async fn create_component(
        &self,
        tenant_id: &str,
        category_id: &str,
        name: &str,
        sort_order: i64,
    ) -> RepoResult<Component>;

    // ===== 目录条目 =====

    /// 按复合匹配键查找目录条目
    ///
    /// # 参数
    /// - model_number: None 仅匹配型号为空的记录（空与缺失不互相匹配）
    async fn find_catalog_item(
        &self,
        tenant_id: &str,
        category_id: &str,
        component_id: &str,
        model_number: Option<&str>,
    ) -> RepoResult<Option<CatalogItem>>;

    /// 创建目录条目
    async fn create_catalog_item(
        &self,
        tenant_id: &str,
        category_id: &str,
        component_id: &str,
        fields: &CatalogItemFields,
    ) -> RepoResult<CatalogItem>;

    /// 整组覆写目录条目的六个描述字段（全量替换,非合并）
    async fn update_catalog_item(&self, id: &str, fields: &CatalogItemFields) -> RepoResult<()>;
}
