//! Builtin Category Sets
//!
//! コード内で定義されるビルトイン集合。
//! 粒子ドキュメントの語彙をそのまま持つ。

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// 4集合の和集合として常に再計算される集合名
pub const VALID_SET: &str = "valid";

pub const VALID_SET_DESCRIPTION: &str =
    "Every valid particle category: the union of all builtin particle sets.";

/// ビルトイン集合定義
pub const BUILTIN_SETS: &[BuiltinSet] = &[
    BuiltinSet {
        name: "classification",
        description: "Particle classification: matter vs antimatter, statistics, stability, charge.",
        members: &[
            "lepton",
            "antilepton",
            "fermion",
            "boson",
            "antibaryon",
            "baryon",
            "neutrino",
            "antineutrino",
            "matter",
            "antimatter",
            "stable",
            "unstable",
            "charged",
            "uncharged",
        ],
    },
    BuiltinSet {
        name: "periodic-table",
        description: "Periodic table groupings of elements.",
        members: &[
            "nonmetal",
            "metal",
            "alkali metal",
            "alkaline earth metal",
            "metalloid",
            "transition metal",
            "post-transition metal",
            "halogen",
            "noble gas",
            "actinide",
            "lanthanide",
        ],
    },
    BuiltinSet {
        name: "atomic-property",
        description: "What kind of atomic species a particle is.",
        members: &["element", "isotope", "ion"],
    },
    BuiltinSet {
        name: "specific-particle",
        description: "Named elementary and nuclear particles.",
        members: &["electron", "positron", "proton", "neutron"],
    },
];

/// ビルトイン集合の静的定義
#[derive(Debug, Clone)]
pub struct BuiltinSet {
    /// 集合名（一意識別子）
    pub name: &'static str,
    /// 説明（`sets list` で表示）
    pub description: &'static str,
    /// メンバー（順序は意味を持たない）
    pub members: &'static [&'static str],
}

/// ランタイム集合定義
///
/// ビルトインまたは`config.toml`から構築される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySetDef {
    pub name: String,
    pub description: String,
    pub members: BTreeSet<String>,
    /// ビルトイン由来か（設定で上書きされるとfalse）
    pub builtin: bool,
}

impl From<&BuiltinSet> for CategorySetDef {
    fn from(builtin: &BuiltinSet) -> Self {
        Self {
            name: builtin.name.to_string(),
            description: builtin.description.to_string(),
            members: builtin.members.iter().map(|s| s.to_string()).collect(),
            builtin: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sets_exist() {
        assert_eq!(BUILTIN_SETS.len(), 4);
        assert!(BUILTIN_SETS.iter().any(|s| s.name == "classification"));
        assert!(BUILTIN_SETS.iter().any(|s| s.name == "periodic-table"));
        assert!(BUILTIN_SETS.iter().all(|s| s.name != VALID_SET));
    }

    #[test]
    fn test_builtin_members_unique() {
        for set in BUILTIN_SETS {
            let unique: BTreeSet<_> = set.members.iter().collect();
            assert_eq!(unique.len(), set.members.len(), "duplicate in {}", set.name);
        }
    }

    #[test]
    fn test_category_set_def_from_builtin() {
        let builtin = &BUILTIN_SETS[2];
        let def = CategorySetDef::from(builtin);
        assert_eq!(def.name, "atomic-property");
        assert!(def.builtin);
        assert_eq!(
            def.members.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["element", "ion", "isotope"]
        );
    }
}
