// ==========================================
// 楼盘装修选材系统 - 目录领域模型
// ==========================================
// 数据体系: 分类(Category) → 部件(Component) → 目录条目(CatalogItem)
// 红线: 所有实体按租户(tenant_id)隔离,跨租户访问一律禁止
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Category - 材料分类
// ==========================================
// 用途: 目录层级的第一级,名称在租户内大小写不敏感唯一
// 对齐: categories 表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,          // 主键（UUID 字符串）
    pub tenant_id: String,   // 所属租户
    pub name: String,        // 分类名称（租户内唯一,忽略大小写）
    pub sort_order: i64,     // 展示顺序（同级内递增,引擎只追加不重排）
    pub is_default: bool,    // 种子数据标记（导入创建的记录恒为 false）

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ==========================================
// Component - 材料部件
// ==========================================
// 用途: 目录层级的第二级,隶属于唯一分类
// 对齐: components 表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    pub id: String,          // 主键（UUID 字符串）
    pub tenant_id: String,   // 所属租户
    pub category_id: String, // 所属分类（FK）
    pub name: String,        // 部件名称（分类内唯一,忽略大小写）
    pub sort_order: i64,     // 展示顺序（分类内递增）
    pub is_default: bool,    // 种子数据标记（导入创建的记录恒为 false）

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ==========================================
// CatalogItem - 目录条目
// ==========================================
// 匹配键: (tenant_id, category_id, component_id, model_number)
// 红线: 描述字段空白一律存 None,禁止空字符串入库
// 对齐: catalog_items 表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,           // 主键（UUID 字符串）
    pub tenant_id: String,    // 所属租户
    pub category_id: String,  // 所属分类（FK）
    pub component_id: String, // 所属部件（FK）

    // ===== 描述字段（全部可空）=====
    pub description: Option<String>,  // 描述
    pub model_number: Option<String>, // 型号（参与匹配键,None 与空串语义不同）
    pub manufacturer: Option<String>, // 厂商
    pub finish: Option<String>,       // 饰面
    pub color: Option<String>,        // 颜色
    pub image_url: Option<String>,    // 图片链接

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ==========================================
// CatalogItemFields - 条目描述字段集
// ==========================================
// 用途: 导入行归一化后的六个描述字段,upsert 时整组覆写（非合并）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogItemFields {
    pub description: Option<String>,
    pub model_number: Option<String>,
    pub manufacturer: Option<String>,
    pub finish: Option<String>,
    pub color: Option<String>,
    pub image_url: Option<String>,
}

// ==========================================
// ImportRow - 导入行（瞬态）
// ==========================================
// 用途: 表头映射后的命名字段视图,原始定位数组不跨越此边界
// 约定: 所有字段已 TRIM,空白归一化为 None
#[derive(Debug, Clone)]
pub struct ImportRow {
    pub line_number: usize, // 1 基物理行号（表头 = 1,首个数据行 = 2）
    pub category: Option<String>,
    pub component: Option<String>,
    pub description: Option<String>,
    pub model_number: Option<String>,
    pub manufacturer: Option<String>,
    pub finish: Option<String>,
    pub color: Option<String>,
    pub image_url: Option<String>,
}

impl ImportRow {
    /// 取出六个描述字段（分类/部件不在其中）
    pub fn fields(&self) -> CatalogItemFields {
        CatalogItemFields {
            description: self.description.clone(),
            model_number: self.model_number.clone(),
            manufacturer: self.manufacturer.clone(),
            finish: self.finish.clone(),
            color: self.color.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

// ==========================================
// RowError - 行级错误
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowError {
    pub row: usize,    // 1 基物理行号,可回溯到原始文件
    pub error: String, // 错误信息（原样透传）
}

// ==========================================
// ImportReport - 导入结果（瞬态）
// ==========================================
// 序列化形态: { "success": true, "imported": N, "errors": [{row, error}] }
// 说明: 部分成功是常态,success 表示"本次运行完成",不表示全部行成功
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub success: bool,
    pub imported: usize,
    pub errors: Vec<RowError>,
}

impl ImportReport {
    pub fn new(imported: usize, errors: Vec<RowError>) -> Self {
        Self {
            success: true,
            imported,
            errors,
        }
    }
}
