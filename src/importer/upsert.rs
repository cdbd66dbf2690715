// ==========================================
// 楼盘装修选材系统 - 目录条目 Upsert 匹配器
// ==========================================
// 匹配键: (tenant_id, category_id, component_id, 归一化型号)
// 语义: 命中 → 六个描述字段整组覆写（非合并）; 未命中 → 新建
// 红线: 型号之外的描述字段不参与匹配
// ==========================================

use crate::domain::CatalogItemFields;
use crate::repository::{CatalogRepository, RepositoryError};
use tracing::debug;

/// upsert 结果,用于日志统计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

// ==========================================
// CatalogUpserter
// ==========================================
pub struct CatalogUpserter<'a, R: CatalogRepository> {
    repo: &'a R,
    tenant_id: &'a str,
}

impl<'a, R: CatalogRepository> CatalogUpserter<'a, R> {
    pub fn new(repo: &'a R, tenant_id: &'a str) -> Self {
        Self { repo, tenant_id }
    }

    /// 按复合键查找并覆写,或新建
    ///
    /// fields 已由表头映射归一化（TRIM、空白 → None）,
    /// 其中 model_number 即匹配键的型号分量: 无型号与有型号是两条独立记录
    pub async fn upsert(
        &self,
        category_id: &str,
        component_id: &str,
        fields: &CatalogItemFields,
    ) -> Result<UpsertOutcome, RepositoryError> {
        let existing = self
            .repo
            .find_catalog_item(
                self.tenant_id,
                category_id,
                component_id,
                fields.model_number.as_deref(),
            )
            .await?;

        match existing {
            Some(item) => {
                self.repo.update_catalog_item(&item.id, fields).await?;
                debug!(item_id = %item.id, "目录条目已覆写");
                Ok(UpsertOutcome::Updated)
            }
            None => {
                let created = self
                    .repo
                    .create_catalog_item(self.tenant_id, category_id, component_id, fields)
                    .await?;
                debug!(item_id = %created.id, "目录条目已创建");
                Ok(UpsertOutcome::Created)
            }
        }
    }
}
