//! 类型定义基础类型

use super::{InstanceStatus, TypeDefAttribute, TypeDefCategory, TypeDefLink};
use serde::{Deserialize, Serialize};

/// 关系一端的定义
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationshipEndDef {
    pub entity_type: TypeDefLink,
    pub attribute_name: String,
}

impl RelationshipEndDef {
    pub fn new(entity_type: TypeDefLink, attribute_name: impl Into<String>) -> Self {
        Self {
            entity_type,
            attribute_name: attribute_name.into(),
        }
    }
}

/// 按类别区分的类型细节
///
/// 序列化时以 `category` 字段作为标签，与 `TypeDefCategory` 的名称一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category")]
pub enum TypeDefKind {
    EntityDef,
    RelationshipDef {
        end_def_1: RelationshipEndDef,
        end_def_2: RelationshipEndDef,
    },
    ClassificationDef {
        /// 为空表示可以分类任意实体类型
        #[serde(default)]
        valid_entity_defs: Vec<TypeDefLink>,
        #[serde(default)]
        propagatable: bool,
    },
}

impl TypeDefKind {
    pub fn category(&self) -> TypeDefCategory {
        match self {
            TypeDefKind::EntityDef => TypeDefCategory::EntityDef,
            TypeDefKind::RelationshipDef { .. } => TypeDefCategory::RelationshipDef,
            TypeDefKind::ClassificationDef { .. } => TypeDefCategory::ClassificationDef,
        }
    }

    pub fn classification(valid_entity_defs: Vec<TypeDefLink>) -> Self {
        TypeDefKind::ClassificationDef {
            valid_entity_defs,
            propagatable: false,
        }
    }
}

/// 开放元数据类型定义
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    pub guid: String,
    pub name: String,
    #[serde(default = "default_version")]
    pub version: u64,
    #[serde(default)]
    pub version_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub kind: TypeDefKind,
    #[serde(default)]
    pub super_type: Option<TypeDefLink>,
    #[serde(default)]
    pub properties: Vec<TypeDefAttribute>,
    #[serde(default)]
    pub valid_instance_statuses: Vec<InstanceStatus>,
    #[serde(default)]
    pub initial_status: Option<InstanceStatus>,
}

fn default_version() -> u64 {
    1
}

impl TypeDef {
    pub fn new(guid: impl Into<String>, name: impl Into<String>, kind: TypeDefKind) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            version: default_version(),
            version_name: None,
            description: None,
            kind,
            super_type: None,
            properties: Vec::new(),
            valid_instance_statuses: Vec::new(),
            initial_status: None,
        }
    }

    pub fn entity(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(guid, name, TypeDefKind::EntityDef)
    }

    pub fn category(&self) -> TypeDefCategory {
        self.kind.category()
    }

    pub fn link(&self) -> TypeDefLink {
        TypeDefLink::new(self.guid.clone(), self.name.clone())
    }

    /// 分类限定的实体类型；非分类类型返回 `None`
    pub fn valid_entity_defs(&self) -> Option<&[TypeDefLink]> {
        match &self.kind {
            TypeDefKind::ClassificationDef {
                valid_entity_defs, ..
            } => Some(valid_entity_defs),
            _ => None,
        }
    }

    pub fn with_version(mut self, version: u64, version_name: Option<String>) -> Self {
        self.version = version;
        self.version_name = version_name;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_super_type(mut self, super_type: Option<TypeDefLink>) -> Self {
        self.super_type = super_type;
        self
    }

    pub fn with_properties(mut self, properties: Vec<TypeDefAttribute>) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_property(mut self, property: TypeDefAttribute) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_statuses(
        mut self,
        valid_instance_statuses: Vec<InstanceStatus>,
        initial_status: Option<InstanceStatus>,
    ) -> Self {
        self.valid_instance_statuses = valid_instance_statuses;
        self.initial_status = initial_status;
        self
    }
}
