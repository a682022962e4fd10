//! 类型定义缓存模块
//!
//! 提供类型定义索引、属性存储关键字以及实例类型摘要缓存

pub mod keywords;
pub mod stats;
pub mod typedef_cache;

// 重新导出主要类型
pub use keywords::PropertyKeywords;
pub use stats::{CacheStats, CacheStatsSnapshot};
pub use typedef_cache::{PropertyKeywordMap, TypeDefCache};
