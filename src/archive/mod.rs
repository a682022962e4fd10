//! 类型归档加载
//!
//! 从 JSON 归档读取属性类型与类型定义并注册到缓存。
//! 归档内的类型可以任意顺序出现，加载时保证超类型先于子类型注册。

use crate::cache::TypeDefCache;
use crate::core::{ArchiveError, AttributeTypeDef, TypeDef};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefArchive {
    pub name: String,
    #[serde(default)]
    pub attribute_type_defs: Vec<AttributeTypeDef>,
    #[serde(default)]
    pub type_defs: Vec<TypeDef>,
}

/// 归档加载结果统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArchiveLoadReport {
    pub attribute_type_defs: usize,
    pub type_defs: usize,
}

impl TypeDefArchive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attribute_type_defs: Vec::new(),
            type_defs: Vec::new(),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self, ArchiveError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ArchiveError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json_string(&self) -> Result<String, ArchiveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 将归档注册到缓存，遇到第一个结构错误即停止
    pub fn load_into(&self, cache: &TypeDefCache) -> Result<ArchiveLoadReport, ArchiveError> {
        let mut report = ArchiveLoadReport::default();

        for attribute_type_def in &self.attribute_type_defs {
            cache.add_attribute_type_def(attribute_type_def.clone());
            report.attribute_type_defs += 1;
        }

        for type_def in self.ordered_type_defs() {
            cache.add_type_def(type_def.clone())?;
            report.type_defs += 1;
        }

        log::info!(
            "归档 {} 加载完成: 属性类型 {}, 类型定义 {}",
            self.name,
            report.attribute_type_defs,
            report.type_defs
        );
        Ok(report)
    }

    /// 按超类型依赖排序；超类型不在归档内的类型视为根
    fn ordered_type_defs(&self) -> Vec<&TypeDef> {
        let in_archive: HashSet<&str> = self.type_defs.iter().map(|t| t.name.as_str()).collect();
        let mut placed: HashSet<&str> = HashSet::with_capacity(self.type_defs.len());
        let mut ordered = Vec::with_capacity(self.type_defs.len());
        let mut pending: Vec<&TypeDef> = self.type_defs.iter().collect();

        while !pending.is_empty() {
            let before = pending.len();
            pending.retain(|&type_def| {
                let ready = match &type_def.super_type {
                    None => true,
                    Some(link) => {
                        !in_archive.contains(link.name.as_str())
                            || placed.contains(link.name.as_str())
                    }
                };
                if ready {
                    placed.insert(type_def.name.as_str());
                    ordered.push(type_def);
                }
                !ready
            });

            if pending.len() == before {
                // 剩余类型的超类型互相引用，按原顺序注册，由链遍历报告环
                log::warn!(
                    "归档 {} 中 {} 个类型的超类型链无法排序",
                    self.name,
                    pending.len()
                );
                ordered.append(&mut pending);
            }
        }

        ordered
    }
}
