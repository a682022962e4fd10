//! 类型类别
//!
//! 每个类别自带存储命名空间的解析规则，调用方不再按类别分支处理

use serde::{Deserialize, Serialize};
use std::fmt;

/// 类型定义类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeDefCategory {
    EntityDef,
    RelationshipDef,
    ClassificationDef,
}

impl TypeDefCategory {
    pub const ENTITY_PROPERTIES: &'static str = "entityProperties";
    pub const RELATIONSHIP_PROPERTIES: &'static str = "relationshipProperties";
    pub const CLASSIFICATIONS: &'static str = "classifications";
    pub const CLASSIFICATION_PROPERTIES: &'static str = "classificationProperties";

    /// 解析该类别下某个类型的属性所在的存储命名空间
    ///
    /// 分类的属性嵌在被分类实体内，因此命名空间包含分类类型名
    pub fn namespace_for(&self, type_name: &str) -> String {
        match self {
            TypeDefCategory::EntityDef => Self::ENTITY_PROPERTIES.to_string(),
            TypeDefCategory::RelationshipDef => Self::RELATIONSHIP_PROPERTIES.to_string(),
            TypeDefCategory::ClassificationDef => format!(
                "{}.{}.{}",
                Self::CLASSIFICATIONS,
                type_name,
                Self::CLASSIFICATION_PROPERTIES
            ),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeDefCategory::EntityDef => "EntityDef",
            TypeDefCategory::RelationshipDef => "RelationshipDef",
            TypeDefCategory::ClassificationDef => "ClassificationDef",
        }
    }
}

impl fmt::Display for TypeDefCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
