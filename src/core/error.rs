//! 统一错误处理 for TypeDefCache
//!
//! ## 设计理念
//!
//! 1. **结构错误**：类型定义本身有缺陷（重复属性、超类型环），注册时立即失败，不重试
//! 2. **未找到错误**：未知类型或类别不匹配，仅在必须返回非空结果的路径（实例类型解析）上抛出
//! 3. **分层转换**：归档与配置错误通过 `#[from]` 包装底层错误，保留完整错误链

use crate::core::types::TypeDefCategory;
use thiserror::Error;

/// 类型缓存错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeCacheError {
    #[error("类型 '{type_name}' 中属性 '{property}' 重复定义")]
    DuplicateProperty { type_name: String, property: String },

    #[error("未知类型: {0}")]
    UnknownType(String),

    #[error("类型 '{type_name}' 的类别为 {actual}, 期望 {expected}")]
    CategoryMismatch {
        type_name: String,
        expected: TypeDefCategory,
        actual: TypeDefCategory,
    },

    #[error("类型 '{type_name}' 的超类型链在 '{super_type}' 处形成环")]
    SupertypeCycle { type_name: String, super_type: String },

    #[error("类型 '{type_name}' 的超类型链超过最大深度 {max_depth}")]
    SupertypeDepthExceeded { type_name: String, max_depth: usize },
}

impl TypeCacheError {
    /// 是否为结构错误（类型系统本身的缺陷）
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TypeCacheError::DuplicateProperty { .. }
                | TypeCacheError::SupertypeCycle { .. }
                | TypeCacheError::SupertypeDepthExceeded { .. }
        )
    }
}

/// 类型缓存操作结果类型
pub type CacheResult<T> = Result<T, TypeCacheError>;

/// 类型归档加载错误
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("归档解析错误: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("类型注册失败: {0}")]
    Cache(#[from] TypeCacheError),
}

/// 配置加载错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置解析错误: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("配置序列化错误: {0}")]
    Serialize(#[from] toml::ser::Error),
}
