//! Category Store
//!
//! 集合定義のランタイムストア。
//! ビルトインと`config.toml`の設定をマージして保持。

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::builtin::{CategorySetDef, BUILTIN_SETS, VALID_SET, VALID_SET_DESCRIPTION};
use crate::error::{DocsetError, Result};

/// 集合定義のランタイムストア
#[derive(Debug, Clone)]
pub struct CategoryStore {
    sets: BTreeMap<String, CategorySetDef>,
}

impl CategoryStore {
    /// ビルトイン集合のみで初期化
    pub fn builtin() -> Self {
        let sets = BUILTIN_SETS
            .iter()
            .map(|b| (b.name.to_string(), CategorySetDef::from(b)))
            .collect();
        let mut store = Self { sets };
        store.rebuild_valid();
        store
    }

    /// 設定でオーバーライド
    ///
    /// - 同名集合は上書き
    /// - 新規集合は追加
    /// - `valid` は上書き後の粒子集合から再計算し、明示的な `valid` 設定のみがそれに勝つ
    pub fn with_config(mut self, config: &SetsConfig) -> Self {
        for (name, entry) in config.sets.iter().filter(|(n, _)| n.as_str() != VALID_SET) {
            debug!(set = %name, members = entry.members.len(), "set from config");
            self.sets.insert(name.clone(), entry.to_def(name));
        }
        self.rebuild_valid();
        if let Some(entry) = config.sets.get(VALID_SET) {
            self.sets.insert(VALID_SET.to_string(), entry.to_def(VALID_SET));
        }
        self
    }

    /// 集合定義を取得
    pub fn get(&self, name: &str) -> Option<&CategorySetDef> {
        self.sets.get(name)
    }

    /// 集合定義を取得（見つからなければエラー）
    pub fn require(&self, name: &str) -> Result<&CategorySetDef> {
        self.get(name).ok_or_else(|| DocsetError::UnknownSet {
            name: name.to_string(),
        })
    }

    /// 全集合（名前順）
    pub fn all(&self) -> Vec<&CategorySetDef> {
        self.sets.values().collect()
    }

    /// 集合名一覧（名前順）
    pub fn names(&self) -> Vec<&str> {
        self.sets.keys().map(|s| s.as_str()).collect()
    }

    /// 指定した集合の和集合
    pub fn union<S: AsRef<str>>(&self, names: &[S]) -> Result<BTreeSet<String>> {
        let mut members = BTreeSet::new();
        for name in names {
            members.extend(self.require(name.as_ref())?.members.iter().cloned());
        }
        Ok(members)
    }

    fn rebuild_valid(&mut self) {
        let members = BUILTIN_SETS
            .iter()
            .filter_map(|b| self.sets.get(b.name))
            .flat_map(|def| def.members.iter().cloned())
            .collect();
        self.sets.insert(
            VALID_SET.to_string(),
            CategorySetDef {
                name: VALID_SET.to_string(),
                description: VALID_SET_DESCRIPTION.to_string(),
                members,
                builtin: true,
            },
        );
    }
}

impl Default for CategoryStore {
    fn default() -> Self {
        Self::builtin()
    }
}

/// `config.toml`のsetsセクション
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetsConfig {
    #[serde(flatten)]
    pub sets: BTreeMap<String, SetConfigEntry>,
}

/// 個別集合の設定エントリ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetConfigEntry {
    /// 説明（オプション）
    #[serde(default)]
    pub description: String,
    /// メンバー
    pub members: Vec<String>,
}

impl SetConfigEntry {
    fn to_def(&self, name: &str) -> CategorySetDef {
        CategorySetDef {
            name: name.to_string(),
            description: self.description.clone(),
            members: self.members.iter().cloned().collect(),
            builtin: false,
        }
    }
}
