// ==========================================
// 楼盘装修选材系统 - 参照数据解析器
// ==========================================
// 职责: 分类/部件的 get-or-create,租户级内存缓存
// 模式: 读穿/回写缓存 —— 创建后从存储层回读,
//       不单独信任本地变更（存储层可能规范化名称等）
// 生命周期: 恰好一次导入调用,不做全局状态
// ==========================================

use crate::domain::{Category, Component};
use crate::repository::{CatalogRepository, RepositoryError};
use std::collections::HashMap;
use tracing::debug;

// ===== 缓存条目 =====

struct ComponentEntry {
    id: String,
    sort_order: i64,
}

struct CategoryEntry {
    id: String,
    sort_order: i64,
    components: HashMap<String, ComponentEntry>,
}

/// resolve_category 的返回句柄,供 resolve_component 定位缓存条目
#[derive(Debug, Clone)]
pub struct ResolvedCategory {
    pub id: String,
    key: String,
}

// ==========================================
// ReferenceResolver
// ==========================================
// 缓存形态: {分类名小写 → {id, sort_order, 部件名小写 → 部件条目}}
// 顺序分配: 同级 max(sort_order) + 1,空集从 0 起;绝不重排既有记录
pub struct ReferenceResolver<'a, R: CatalogRepository> {
    repo: &'a R,
    tenant_id: String,
    categories: HashMap<String, CategoryEntry>,
}

impl<'a, R: CatalogRepository> ReferenceResolver<'a, R> {
    /// 播种缓存: 每次导入运行读取一次当前持久化全集
    pub async fn seed(repo: &'a R, tenant_id: &str) -> Result<Self, RepositoryError> {
        let mut categories = HashMap::new();

        for category in repo.list_categories(tenant_id).await? {
            let mut components = HashMap::new();
            for component in repo.list_components(tenant_id, &category.id).await? {
                components.insert(
                    normalize_key(&component.name),
                    ComponentEntry {
                        id: component.id,
                        sort_order: component.sort_order,
                    },
                );
            }

            categories.insert(
                normalize_key(&category.name),
                CategoryEntry {
                    id: category.id,
                    sort_order: category.sort_order,
                    components,
                },
            );
        }

        debug!(
            tenant_id = %tenant_id,
            categories = categories.len(),
            "参照数据缓存播种完成"
        );

        Ok(Self {
            repo,
            tenant_id: tenant_id.to_string(),
            categories,
        })
    }

    /// 解析分类: 命中缓存直接返回,未命中则创建后回读入缓存
    ///
    /// 创建失败（如并发导入触发唯一约束）原样冒泡,由上层记为行级错误,不重试
    pub async fn resolve_category(
        &mut self,
        name: &str,
    ) -> Result<ResolvedCategory, RepositoryError> {
        let trimmed = name.trim();
        let key = normalize_key(trimmed);

        if let Some(entry) = self.categories.get(&key) {
            return Ok(ResolvedCategory {
                id: entry.id.clone(),
                key,
            });
        }

        let next_order = self
            .categories
            .values()
            .map(|c| c.sort_order + 1)
            .max()
            .unwrap_or(0);

        self.repo
            .create_category(&self.tenant_id, trimmed, next_order)
            .await?;

        // 回读存储视图,而非信任本地构造的记录
        let stored = self.refetch_category(trimmed).await?;
        debug!(name = %stored.name, sort_order = stored.sort_order, "分类已创建");

        let resolved = ResolvedCategory {
            id: stored.id.clone(),
            key: key.clone(),
        };
        self.categories.insert(
            key,
            CategoryEntry {
                id: stored.id,
                sort_order: stored.sort_order,
                components: HashMap::new(),
            },
        );

        Ok(resolved)
    }

    /// 解析部件: 范围限定在已解析的分类内,模式与分类一致
    pub async fn resolve_component(
        &mut self,
        category: &ResolvedCategory,
        name: &str,
    ) -> Result<String, RepositoryError> {
        let trimmed = name.trim();
        let key = normalize_key(trimmed);

        let entry = self
            .categories
            .get(&category.key)
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "category".to_string(),
                key: category.key.clone(),
            })?;

        if let Some(component) = entry.components.get(&key) {
            return Ok(component.id.clone());
        }

        // 部件顺序只看本分类内的既有部件
        let next_order = entry
            .components
            .values()
            .map(|c| c.sort_order + 1)
            .max()
            .unwrap_or(0);

        self.repo
            .create_component(&self.tenant_id, &category.id, trimmed, next_order)
            .await?;

        let stored = self.refetch_component(&category.id, trimmed).await?;
        debug!(name = %stored.name, sort_order = stored.sort_order, "部件已创建");

        let component_id = stored.id.clone();
        if let Some(entry) = self.categories.get_mut(&category.key) {
            entry.components.insert(
                key,
                ComponentEntry {
                    id: stored.id,
                    sort_order: stored.sort_order,
                },
            );
        }

        Ok(component_id)
    }

    async fn refetch_category(&self, name: &str) -> Result<Category, RepositoryError> {
        self.repo
            .find_category(&self.tenant_id, name)
            .await?
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "category".to_string(),
                key: name.to_string(),
            })
    }

    async fn refetch_component(
        &self,
        category_id: &str,
        name: &str,
    ) -> Result<Component, RepositoryError> {
        self.repo
            .find_component(&self.tenant_id, category_id, name)
            .await?
            .ok_or_else(|| RepositoryError::NotFound {
                entity: "component".to_string(),
                key: name.to_string(),
            })
    }
}

fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}
