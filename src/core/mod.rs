pub mod error;
pub mod types;

// 错误和结果类型
pub use error::{ArchiveError, CacheResult, ConfigError, TypeCacheError};

// 类型定义模型
pub use types::{
    AttributeCardinality, AttributeTypeDef, AttributeTypeDefCategory, InstanceStatus,
    InstanceType, RelationshipEndDef, TypeDef, TypeDefAttribute, TypeDefCategory, TypeDefKind,
    TypeDefLink,
};
