//! 类型定义缓存
//!
//! 按 GUID 与名称索引类型定义，维护属性存储关键字及属性到类型的反向索引，
//! 并延迟构建实例类型摘要。所有状态保存在 `DashMap` 中，单键粒度并发安全。
//!
//! 注册时先计算并校验全部派生数据，校验通过后再依次发布到各索引；
//! 两次 map 更新之间的短暂不一致窗口是允许的。
//!
//! 实例类型摘要的失效依赖代数计数：写入方发布数据后先递增代数再清理摘要，
//! 读取方只在持有条目锁且代数未变时写入新构建的摘要。

use crate::cache::keywords::PropertyKeywords;
use crate::cache::stats::{CacheStats, CacheStatsSnapshot};
use crate::config::CacheConfig;
use crate::core::{
    AttributeTypeDef, CacheResult, InstanceStatus, InstanceType, TypeCacheError, TypeDef,
    TypeDefCategory, TypeDefLink,
};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// 某个类型自身声明的属性关键字，属性名 -> 关键字
pub type PropertyKeywordMap = HashMap<String, PropertyKeywords>;

#[derive(Debug)]
pub struct TypeDefCache {
    type_defs_by_guid: DashMap<String, Arc<TypeDef>>,
    type_def_guids_by_name: DashMap<String, String>,
    attribute_type_defs_by_guid: DashMap<String, Arc<AttributeTypeDef>>,
    property_keywords_by_type: DashMap<String, Arc<PropertyKeywordMap>>,
    type_names_by_property: DashMap<String, HashSet<String>>,
    instance_types: DashMap<String, Arc<InstanceType>>,
    /// 每次类型定义变化递增
    generation: AtomicU64,
    max_supertype_depth: usize,
    stats: CacheStats,
}

impl Default for TypeDefCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeDefCache {
    pub fn new() -> Self {
        Self::with_config(&CacheConfig::default())
    }

    pub fn with_config(config: &CacheConfig) -> Self {
        Self {
            type_defs_by_guid: DashMap::new(),
            type_def_guids_by_name: DashMap::new(),
            attribute_type_defs_by_guid: DashMap::new(),
            property_keywords_by_type: DashMap::new(),
            type_names_by_property: DashMap::new(),
            instance_types: DashMap::new(),
            generation: AtomicU64::new(0),
            max_supertype_depth: config.max_supertype_depth,
            stats: CacheStats::default(),
        }
    }

    /// 注册类型定义
    ///
    /// 同名类型再次注册视为版本替换：旧版本的 GUID 与反向索引条目会被清除。
    /// 已有 GUID 以新名称注册时视为改名：旧名称的全部派生数据会被清除。
    /// 自身属性列表中出现重复属性名时返回 `DuplicateProperty`，缓存保持不变。
    pub fn add_type_def(&self, type_def: TypeDef) -> CacheResult<()> {
        let keywords = Self::build_property_keywords(&type_def).inspect_err(|e| {
            log::warn!("拒绝注册类型 {}: {}", type_def.name, e);
        })?;

        let name = type_def.name.clone();
        let guid = type_def.guid.clone();

        if let Some(previous_guid) = self.type_def_guids_by_name.insert(name.clone(), guid.clone()) {
            if previous_guid != guid {
                self.type_defs_by_guid.remove(&previous_guid);
            }
        }
        if self.property_keywords_by_type.contains_key(&name) {
            self.scrub_property_index(&name);
        }

        for property_name in keywords.keys() {
            self.type_names_by_property
                .entry(property_name.clone())
                .or_default()
                .insert(name.clone());
        }
        let property_count = keywords.len();
        self.property_keywords_by_type.insert(name.clone(), Arc::new(keywords));
        if let Some(previous) = self.type_defs_by_guid.insert(guid.clone(), Arc::new(type_def)) {
            if previous.name != name {
                log::debug!("类型 {} 改名为 {} ({})", previous.name, name, guid);
                self.drop_name(&previous.name, &guid);
            }
        }
        self.invalidate_instance_types(&name);

        log::debug!("注册类型定义: {} ({}), 属性数: {}", name, guid, property_count);
        Ok(())
    }

    fn build_property_keywords(type_def: &TypeDef) -> CacheResult<PropertyKeywordMap> {
        let category = type_def.category();
        let mut keywords = PropertyKeywordMap::with_capacity(type_def.properties.len());
        for attribute in &type_def.properties {
            let property_name = &attribute.attribute_name;
            if keywords.contains_key(property_name) {
                return Err(TypeCacheError::DuplicateProperty {
                    type_name: type_def.name.clone(),
                    property: property_name.clone(),
                });
            }
            keywords.insert(
                property_name.clone(),
                PropertyKeywords::new(category, &type_def.name, attribute),
            );
        }
        Ok(keywords)
    }

    pub fn get_type_def_by_guid(&self, guid: &str) -> Option<Arc<TypeDef>> {
        self.type_defs_by_guid
            .get(guid)
            .map(|entry| Arc::clone(entry.value()))
    }

    pub fn get_type_def_by_name(&self, name: &str) -> Option<Arc<TypeDef>> {
        let guid = self.type_def_guids_by_name.get(name)?.value().clone();
        self.get_type_def_by_guid(&guid)
    }

    /// 移除类型定义及其全部派生数据
    pub fn remove_type_def(&self, guid: &str) -> Option<Arc<TypeDef>> {
        let (_, removed) = self.type_defs_by_guid.remove(guid)?;
        let name = removed.name.as_str();

        self.drop_name(name, guid);

        log::debug!("移除类型定义: {} ({})", name, guid);
        Some(removed)
    }

    /// 名称仍指向该 GUID 时移除名称索引及其派生数据
    ///
    /// 名称已指向新版本时保留新版本的派生数据
    fn drop_name(&self, name: &str, guid: &str) {
        let owned_name = self
            .type_def_guids_by_name
            .remove_if(name, |_, current| current == guid)
            .is_some();
        if owned_name {
            self.property_keywords_by_type.remove(name);
            self.scrub_property_index(name);
            self.invalidate_instance_types(name);
        }
    }

    /// 从所有属性的反向索引中移除该类型名，并丢弃不再被任何类型引用的属性
    fn scrub_property_index(&self, type_name: &str) {
        self.type_names_by_property.retain(|_, type_names| {
            type_names.remove(type_name);
            !type_names.is_empty()
        });
    }

    /// 使该类型及所有以它为祖先的类型的实例类型摘要失效
    ///
    /// 必须在新数据发布之后调用
    fn invalidate_instance_types(&self, type_name: &str) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let before = self.instance_types.len();
        self.instance_types.retain(|name, instance_type| {
            name != type_name
                && !instance_type
                    .super_types
                    .iter()
                    .any(|link| link.name == type_name)
        });
        if self.instance_types.len() < before {
            self.stats.record_invalidation();
        }
    }

    pub fn add_attribute_type_def(&self, attribute_type_def: AttributeTypeDef) {
        log::debug!(
            "注册属性类型定义: {} ({})",
            attribute_type_def.name,
            attribute_type_def.guid
        );
        self.attribute_type_defs_by_guid
            .insert(attribute_type_def.guid.clone(), Arc::new(attribute_type_def));
    }

    pub fn get_attribute_type_def(&self, guid: &str) -> Option<Arc<AttributeTypeDef>> {
        self.attribute_type_defs_by_guid
            .get(guid)
            .map(|entry| Arc::clone(entry.value()))
    }

    pub fn remove_attribute_type_def(&self, guid: &str) -> Option<Arc<AttributeTypeDef>> {
        self.attribute_type_defs_by_guid
            .remove(guid)
            .map(|(_, removed)| removed)
    }

    /// 解析全部超类型，由近及远
    ///
    /// 未知类型返回空列表。引用了未注册定义的超类型会作为链的最后一环。
    pub fn resolve_all_super_types(&self, type_name: &str) -> CacheResult<Vec<TypeDefLink>> {
        let mut super_types = Vec::new();
        let Some(type_def) = self.get_type_def_by_name(type_name) else {
            return Ok(super_types);
        };

        let mut visited = HashSet::new();
        visited.insert(type_def.name.clone());
        let mut next = type_def.super_type.clone();

        while let Some(link) = next {
            if !visited.insert(link.name.clone()) {
                log::warn!("类型 {} 的超类型链在 {} 处形成环", type_name, link);
                return Err(TypeCacheError::SupertypeCycle {
                    type_name: type_name.to_string(),
                    super_type: link.name,
                });
            }
            if super_types.len() >= self.max_supertype_depth {
                log::warn!("类型 {} 的超类型链在 {} 处超过最大深度", type_name, link);
                return Err(TypeCacheError::SupertypeDepthExceeded {
                    type_name: type_name.to_string(),
                    max_depth: self.max_supertype_depth,
                });
            }
            next = match self
                .get_type_def_by_guid(&link.guid)
                .or_else(|| self.get_type_def_by_name(&link.name))
            {
                Some(parent) => parent.super_type.clone(),
                None => {
                    log::warn!("类型 {} 的超类型 {} 未注册", type_name, link);
                    None
                }
            };
            super_types.push(link);
        }

        Ok(super_types)
    }

    /// 该类型自身声明的属性关键字（不含继承）
    pub fn property_keywords(&self, type_name: &str) -> Option<Arc<PropertyKeywordMap>> {
        self.property_keywords_by_type
            .get(type_name)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// 解析包含继承属性在内的全部属性关键字
    ///
    /// 从最远的祖先开始依次覆盖，最后应用类型自身的声明，子类型的同名属性优先。
    pub fn resolve_all_property_keywords(&self, type_name: &str) -> CacheResult<PropertyKeywordMap> {
        let mut merged = PropertyKeywordMap::new();
        for super_type in self.resolve_all_super_types(type_name)?.iter().rev() {
            if let Some(keywords) = self.property_keywords(&super_type.name) {
                merged.extend(keywords.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
        if let Some(keywords) = self.property_keywords(type_name) {
            merged.extend(keywords.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        Ok(merged)
    }

    pub fn has_property(&self, type_name: &str, property_name: &str) -> CacheResult<bool> {
        Ok(self
            .resolve_all_property_keywords(type_name)?
            .contains_key(property_name))
    }

    /// 声明了该属性的全部类型名
    pub fn type_names_for_property(&self, property_name: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .type_names_by_property
            .get(property_name)
            .map(|entry| entry.value().iter().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    /// 所有类型中该属性的关键字，按类型名排序
    pub fn all_property_keywords_for_property(&self, property_name: &str) -> Vec<PropertyKeywords> {
        self.type_names_for_property(property_name)
            .iter()
            .filter_map(|type_name| {
                self.property_keywords(type_name)
                    .and_then(|keywords| keywords.get(property_name).cloned())
            })
            .collect()
    }

    /// 判断实际类型是否为期望类型或其子类型
    ///
    /// 期望类型为空时总是匹配；实际类型为空时不匹配。
    pub fn is_type_of(&self, actual: Option<&str>, expected: Option<&str>) -> bool {
        match (actual, expected) {
            (_, None) => true,
            (None, Some(_)) => false,
            (Some(actual), Some(expected)) => {
                if actual == expected {
                    return true;
                }
                match self.resolve_all_super_types(actual) {
                    Ok(super_types) => super_types.iter().any(|link| link.name == expected),
                    Err(e) => {
                        log::warn!("无法判断 {} 是否为 {}: {}", actual, expected, e);
                        false
                    }
                }
            }
        }
    }

    /// 判断分类能否作用于该实体类型
    ///
    /// 分类未限定实体类型时总是有效；否则实体类型或其任一祖先须在限定列表中。
    pub fn is_valid_classification_for_entity(
        &self,
        classification_name: &str,
        entity_name: &str,
    ) -> bool {
        let Some(classification) = self.get_type_def_by_name(classification_name) else {
            return false;
        };
        let Some(valid_entity_defs) = classification.valid_entity_defs() else {
            return false;
        };
        if valid_entity_defs.is_empty() {
            return true;
        }

        let valid_names: HashSet<&str> = valid_entity_defs
            .iter()
            .map(|link| link.name.as_str())
            .collect();
        if valid_names.contains(entity_name) {
            return true;
        }
        match self.resolve_all_super_types(entity_name) {
            Ok(super_types) => super_types
                .iter()
                .any(|link| valid_names.contains(link.name.as_str())),
            Err(e) => {
                log::warn!("无法校验分类 {} 对实体 {}: {}", classification_name, entity_name, e);
                false
            }
        }
    }

    /// 获取实例类型摘要，未缓存时按类型定义构建
    pub fn get_instance_type(
        &self,
        category: TypeDefCategory,
        type_name: &str,
    ) -> CacheResult<Arc<InstanceType>> {
        if let Some(cached) = self.instance_types.get(type_name).map(|e| Arc::clone(e.value())) {
            self.stats.record_hit();
            return Self::check_category(type_name, category, cached.category).map(|_| cached);
        }
        self.stats.record_miss();

        // 先于读取任何类型数据取得代数
        let generation = self.generation.load(Ordering::SeqCst);
        let type_def = self
            .get_type_def_by_name(type_name)
            .ok_or_else(|| TypeCacheError::UnknownType(type_name.to_string()))?;
        Self::check_category(type_name, category, type_def.category())?;

        let mut valid_instance_properties: Vec<String> = self
            .resolve_all_property_keywords(type_name)?
            .into_keys()
            .collect();
        valid_instance_properties.sort();

        let instance_type = Arc::new(InstanceType {
            category: type_def.category(),
            type_def_guid: type_def.guid.clone(),
            type_def_name: type_def.name.clone(),
            type_def_version: type_def.version,
            type_def_description: type_def.description.clone(),
            super_types: self.resolve_all_super_types(type_name)?,
            valid_instance_properties,
            valid_statuses: type_def.valid_instance_statuses.clone(),
        });

        // 持有条目锁时检查代数：失效清理需要同一分片的写锁，不会与写入交错
        match self.instance_types.entry(type_name.to_string()) {
            Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                if self.generation.load(Ordering::SeqCst) == generation {
                    self.stats.record_insertion();
                    entry.insert(Arc::clone(&instance_type));
                }
                Ok(instance_type)
            }
        }
    }

    fn check_category(
        type_name: &str,
        expected: TypeDefCategory,
        actual: TypeDefCategory,
    ) -> CacheResult<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(TypeCacheError::CategoryMismatch {
                type_name: type_name.to_string(),
                expected,
                actual,
            })
        }
    }

    /// 类型配置的实例初始状态
    pub fn initial_status(&self, type_name: &str) -> Option<InstanceStatus> {
        self.get_type_def_by_name(type_name)
            .and_then(|type_def| type_def.initial_status)
    }

    pub fn type_def_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .type_def_guids_by_name
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.type_defs_by_guid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.type_defs_by_guid.is_empty()
    }

    pub fn clear(&self) {
        self.type_defs_by_guid.clear();
        self.type_def_guids_by_name.clear();
        self.attribute_type_defs_by_guid.clear();
        self.property_keywords_by_type.clear();
        self.type_names_by_property.clear();
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.instance_types.clear();
        self.stats.reset();
    }

    pub fn stats(&self) -> CacheStatsSnapshot {
        self.stats.snapshot(self.instance_types.len())
    }
}
