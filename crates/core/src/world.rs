//! The singleton world record: power system and social rules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_system: Option<PowerSystem>,

    /// Social rules keyed by topic. Ordered so rendering is deterministic.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub social_rules: BTreeMap<String, String>,
}

impl World {
    /// The power system, if it carries at least one core rule.
    pub fn ruled_power_system(&self) -> Option<&PowerSystem> {
        self.power_system
            .as_ref()
            .filter(|ps| !ps.core_rules.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PowerSystem {
    pub name: String,

    /// Ranks from lowest to highest
    #[serde(default)]
    pub levels: Vec<String>,

    #[serde(default)]
    pub core_rules: Vec<String>,

    #[serde(default)]
    pub constraints: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_system_without_rules_is_ignored() {
        let world = World {
            power_system: Some(PowerSystem {
                name: "Qi".into(),
                levels: vec!["Foundation".into()],
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(world.ruled_power_system().is_none());
    }

    #[test]
    fn social_rules_iterate_in_key_order() {
        let world: World = serde_json::from_str(
            r#"{"social_rules": {"trade": "Guild-controlled", "marriage": "Clan-arranged"}}"#,
        )
        .unwrap();
        let keys: Vec<_> = world.social_rules.keys().cloned().collect();
        assert_eq!(keys, vec!["marriage", "trade"]);
    }
}
