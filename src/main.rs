// ==========================================
// 楼盘装修选材系统 - 目录导入 CLI 入口
// ==========================================
// 用法: catalog-import <tenant_id> <csv_file> [db_path]
// 输出: 导入结果 JSON（{ success, imported, errors }）打印到 stdout
// ==========================================

use anyhow::Context;
use catalog_import::config::AppConfig;
use catalog_import::importer::CatalogImporter;
use catalog_import::logging;
use catalog_import::repository::CatalogRepositoryImpl;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("楼盘装修选材系统 - 产品目录导入");
    tracing::info!("系统版本: {}", catalog_import::VERSION);
    tracing::info!("==================================================");

    let config = AppConfig::from_args(std::env::args())?;
    tracing::info!("使用数据库: {}", config.db_path);

    let content = std::fs::read_to_string(&config.file_path)
        .with_context(|| format!("读取文件失败: {}", config.file_path))?;

    let repo = CatalogRepositoryImpl::new(&config.db_path)?;
    let importer = CatalogImporter::new(repo);

    let report = importer.import(&config.tenant_id, &content).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
