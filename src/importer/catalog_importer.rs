// ==========================================
// 楼盘装修选材系统 - 目录导入编排器
// ==========================================
// 职责: 整合导入流程,从文本块到数据库
// 流程: 表头校验 → 缓存播种 → 逐行(分词 → 抽取 → 解析 → upsert) → 聚合
// 容错: 仅表头缺列致命;其余错误按行捕获,转为结果数据
// 并发: 严格顺序处理 —— 缓存与顺序号分配在并发变更下不安全
// ==========================================

use crate::domain::{ImportReport, ImportRow, RowError};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::header::HeaderMap;
use crate::importer::resolver::ReferenceResolver;
use crate::importer::tokenizer::tokenize_line;
use crate::importer::upsert::{CatalogUpserter, UpsertOutcome};
use crate::repository::CatalogRepository;
use tracing::{debug, info, instrument, warn};

// ==========================================
// CatalogImporter
// ==========================================
pub struct CatalogImporter<R: CatalogRepository> {
    repo: R,
}

impl<R: CatalogRepository> CatalogImporter<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// 底层仓储的只读访问（供调用方查询导入后状态）
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// 执行一次导入
    ///
    /// # 参数
    /// - tenant_id: 已认证的租户标识（由外层请求处理解析,此处只透传）
    /// - content: 已解码的文件全文
    ///
    /// # 返回
    /// - Ok(ImportReport): 成功行数 + 行级错误清单（部分成功是常态）
    /// - Err(ImportError::MissingColumn): 表头缺列,零行处理
    #[instrument(skip(self, content), fields(tenant_id = %tenant_id))]
    pub async fn import(&self, tenant_id: &str, content: &str) -> ImportResult<ImportReport> {
        info!("开始目录导入");

        // === 步骤 1: 表头校验 ===
        // 物理行号 1 基: 表头 = 1,首个数据行 = 2
        let lines: Vec<&str> = content.lines().collect();
        let header_fields = match lines.first() {
            Some(line) => tokenize_line(line),
            None => Vec::new(),
        };
        let header = HeaderMap::parse(&header_fields)?;
        debug!("表头校验通过");

        // === 步骤 2: 播种参照数据缓存 ===
        let mut resolver = ReferenceResolver::seed(&self.repo, tenant_id).await?;
        let upserter = CatalogUpserter::new(&self.repo, tenant_id);

        // === 步骤 3: 逐行处理 ===
        let mut imported = 0usize;
        let mut errors: Vec<RowError> = Vec::new();

        for (idx, line) in lines.iter().enumerate().skip(1) {
            let line_number = idx + 1;

            // 空白行静默跳过,不产生错误条目
            if line.trim().is_empty() {
                continue;
            }

            let row = header.extract(&tokenize_line(line), line_number);

            match Self::process_row(&mut resolver, &upserter, &row).await {
                Ok(_) => imported += 1,
                Err(e) => {
                    warn!(row = line_number, error = %e, "行导入失败");
                    errors.push(RowError {
                        row: line_number,
                        error: e.to_string(),
                    });
                }
            }
        }

        // === 步骤 4: 聚合结果 ===
        info!(
            imported = imported,
            failed = errors.len(),
            "目录导入完成"
        );

        Ok(ImportReport::new(imported, errors))
    }

    /// 处理单行: 校验 → 参照解析 → upsert
    ///
    /// 任何 Err 都表示本行零写入或已知中断点,由调用方记录后继续下一行
    async fn process_row(
        resolver: &mut ReferenceResolver<'_, R>,
        upserter: &CatalogUpserter<'_, R>,
        row: &ImportRow,
    ) -> ImportResult<UpsertOutcome> {
        let (category_name, component_name) = match (&row.category, &row.component) {
            (Some(category), Some(component)) => (category, component),
            _ => return Err(ImportError::MissingCategoryComponent),
        };

        let category = resolver.resolve_category(category_name).await?;
        let component_id = resolver.resolve_component(&category, component_name).await?;

        let outcome = upserter
            .upsert(&category.id, &component_id, &row.fields())
            .await?;

        Ok(outcome)
    }
}
