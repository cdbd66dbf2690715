// ==========================================
// 楼盘装修选材系统 - 表头契约校验器
// ==========================================
// 职责: 逻辑列名 → 物理列位置映射
// 契约: 八个必需列,大小写与首尾空白不敏感,列序任意,多余列忽略
// 红线: 任一必需列缺失 → 整体中止,零行处理
// ==========================================

use crate::domain::ImportRow;
use crate::importer::error::{ImportError, ImportResult};
use std::collections::HashMap;

/// 必需逻辑列（按导出模板顺序）
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Category",
    "Component",
    "Description",
    "Model Number",
    "Manufacturer",
    "Finish",
    "Color",
    "Image URL",
];

// ==========================================
// HeaderMap - 逻辑列 → 物理索引
// ==========================================
#[derive(Debug, Clone)]
pub struct HeaderMap {
    category: usize,
    component: usize,
    description: usize,
    model_number: usize,
    manufacturer: usize,
    finish: usize,
    color: usize,
    image_url: usize,
}

impl HeaderMap {
    /// 从分词后的表头行建立映射
    ///
    /// # 返回
    /// - Err(ImportError::MissingColumn): 首个缺失的必需列,导入中止
    pub fn parse(header_fields: &[String]) -> ImportResult<Self> {
        // 物理列名归一化后建索引,重复列名以首次出现为准
        let mut positions: HashMap<String, usize> = HashMap::new();
        for (idx, raw) in header_fields.iter().enumerate() {
            positions
                .entry(raw.trim().to_lowercase())
                .or_insert(idx);
        }

        let locate = |logical: &str| -> ImportResult<usize> {
            positions
                .get(&logical.to_lowercase())
                .copied()
                .ok_or_else(|| ImportError::MissingColumn(logical.to_string()))
        };

        Ok(Self {
            category: locate(REQUIRED_COLUMNS[0])?,
            component: locate(REQUIRED_COLUMNS[1])?,
            description: locate(REQUIRED_COLUMNS[2])?,
            model_number: locate(REQUIRED_COLUMNS[3])?,
            manufacturer: locate(REQUIRED_COLUMNS[4])?,
            finish: locate(REQUIRED_COLUMNS[5])?,
            color: locate(REQUIRED_COLUMNS[6])?,
            image_url: locate(REQUIRED_COLUMNS[7])?,
        })
    }

    /// 按映射抽取一行数据,归一化为命名字段视图
    ///
    /// 归一化: TRIM 后为空的值一律 None（绝不产出 Some("")）;
    /// 行比表头短时,缺失位置同样视为空
    pub fn extract(&self, fields: &[String], line_number: usize) -> ImportRow {
        let pick = |idx: usize| -> Option<String> {
            fields.get(idx).and_then(|v| {
                let trimmed = v.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
        };

        ImportRow {
            line_number,
            category: pick(self.category),
            component: pick(self.component),
            description: pick(self.description),
            model_number: pick(self.model_number),
            manufacturer: pick(self.manufacturer),
            finish: pick(self.finish),
            color: pick(self.color),
            image_url: pick(self.image_url),
        }
    }
}
