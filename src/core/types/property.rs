//! 属性定义基础类型

use super::TypeDefLink;
use serde::{Deserialize, Serialize};

/// 属性基数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AttributeCardinality {
    Unknown,
    #[default]
    AtMostOne,
    OneOnly,
    AtLeastOneOrdered,
    AtLeastOneUnordered,
    AnyNumberOrdered,
    AnyNumberUnordered,
}

/// 类型定义中声明的单个属性
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDefAttribute {
    pub attribute_name: String,
    pub attribute_type: TypeDefLink,
    #[serde(default)]
    pub cardinality: AttributeCardinality,
    #[serde(default)]
    pub is_unique: bool,
    #[serde(default)]
    pub is_indexable: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default_value: Option<String>,
}

impl TypeDefAttribute {
    pub fn new(attribute_name: impl Into<String>, attribute_type: TypeDefLink) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            attribute_type,
            cardinality: AttributeCardinality::default(),
            is_unique: false,
            is_indexable: true,
            description: None,
            default_value: None,
        }
    }

    pub fn with_cardinality(mut self, cardinality: AttributeCardinality) -> Self {
        self.cardinality = cardinality;
        self
    }

    pub fn with_unique(mut self, is_unique: bool) -> Self {
        self.is_unique = is_unique;
        self
    }

    pub fn with_indexable(mut self, is_indexable: bool) -> Self {
        self.is_indexable = is_indexable;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_default_value(mut self, default_value: Option<String>) -> Self {
        self.default_value = default_value;
        self
    }
}
