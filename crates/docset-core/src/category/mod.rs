//! # Category Module
//!
//! 名前付きカテゴリ集合（category set）のカタログを提供する。
//!
//! ## 設計目的
//!
//! ドキュメントに列挙するカテゴリ名は、コード内のビルトイン集合か
//! `config.toml` の `[sets.<name>]` セクションから取得する：
//!
//! - **classification**: lepton, baryon, fermion などの粒子分類
//! - **periodic-table**: metal, halogen, noble gas などの周期表分類
//! - **atomic-property**: element, isotope, ion
//! - **specific-particle**: electron, positron, proton, neutron
//! - **valid**: 上記4集合の和集合
//!
//! ## モジュール構成
//!
//! - `builtin`: ビルトイン集合定義
//! - `store`: ビルトインと設定をマージしたランタイムストア
//!
//! ## 使用例
//!
//! ```rust
//! use docset_core::category::CategoryStore;
//!
//! let store = CategoryStore::builtin();
//! let valid = store.get("valid").unwrap();
//! assert!(valid.members.contains("lepton"));
//! assert!(valid.members.contains("noble gas"));
//!
//! let names = store.names();
//! assert_eq!(names.first(), Some(&"atomic-property"));
//! ```

mod builtin;
mod store;

// Re-exports
pub use builtin::{BuiltinSet, CategorySetDef, BUILTIN_SETS, VALID_SET, VALID_SET_DESCRIPTION};
pub use store::{CategoryStore, SetConfigEntry, SetsConfig};
