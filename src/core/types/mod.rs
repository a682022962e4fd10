// 核心类型系统模块
//
// 包含开放元数据类型定义模型：类型类别、类型定义、属性定义、属性类型定义以及实例类型摘要

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod attribute_type;
pub mod category;
pub mod instance;
pub mod property;
pub mod typedef;

pub use attribute_type::{AttributeTypeDef, AttributeTypeDefCategory};
pub use category::TypeDefCategory;
pub use instance::{InstanceStatus, InstanceType};
pub use property::{AttributeCardinality, TypeDefAttribute};
pub use typedef::{RelationshipEndDef, TypeDef, TypeDefKind};

/// 指向另一个类型定义的引用
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDefLink {
    pub guid: String,
    pub name: String,
}

impl TypeDefLink {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TypeDefLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.guid)
    }
}
