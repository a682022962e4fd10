//! 属性类型定义

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeTypeDefCategory {
    Primitive,
    Collection,
    Enum,
}

/// 属性类型定义，只按 GUID 索引
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeTypeDef {
    pub guid: String,
    pub name: String,
    pub category: AttributeTypeDefCategory,
    #[serde(default)]
    pub description: Option<String>,
}

impl AttributeTypeDef {
    pub fn new(
        guid: impl Into<String>,
        name: impl Into<String>,
        category: AttributeTypeDefCategory,
    ) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            category,
            description: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}
