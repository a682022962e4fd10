//! 属性存储关键字
//!
//! 每个属性对应两个存储键：嵌入键保存序列化后的完整值，可检索键保存用于匹配的值

use crate::core::{TypeDefAttribute, TypeDefCategory};

const EMBEDDED_SUFFIX: &str = "json";
const SEARCHABLE_SUFFIX: &str = "value";

/// 单个属性的派生描述，由缓存独占持有
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyKeywords {
    type_name: String,
    property_name: String,
    attribute: TypeDefAttribute,
    embedded: String,
    searchable: String,
}

impl PropertyKeywords {
    pub fn new(category: TypeDefCategory, type_name: &str, attribute: &TypeDefAttribute) -> Self {
        let namespace = category.namespace_for(type_name);
        let property_name = attribute.attribute_name.clone();
        let embedded = Self::keyword(&namespace, type_name, &property_name, EMBEDDED_SUFFIX);
        let searchable = Self::keyword(&namespace, type_name, &property_name, SEARCHABLE_SUFFIX);
        Self {
            type_name: type_name.to_string(),
            property_name,
            attribute: attribute.clone(),
            embedded,
            searchable,
        }
    }

    fn keyword(namespace: &str, type_name: &str, property_name: &str, suffix: &str) -> String {
        format!("{}/{}.{}.{}", namespace, type_name, property_name, suffix)
    }

    /// 声明该属性的类型名
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    pub fn attribute(&self) -> &TypeDefAttribute {
        &self.attribute
    }

    pub fn embedded(&self) -> &str {
        &self.embedded
    }

    pub fn searchable(&self) -> &str {
        &self.searchable
    }
}
