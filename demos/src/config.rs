//! The `--config` file: a partial [`SolverConfig`] laid over whatever the
//! preset or defaults already chose.

use serde::{Deserialize, Deserializer};

use mazewalk::{DirectionCodes, Labels, SolverConfig};

/// Keys present in a config file. Absent keys leave the base untouched;
/// `"visit_budget": null` clears a budget.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub labels: Option<Labels>,
    pub codes: Option<DirectionCodes>,
    #[serde(deserialize_with = "present")]
    pub visit_budget: Option<Option<usize>>,
}

// Distinguishes an explicit `null` from a missing key.
fn present<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(d).map(Some)
}

impl ConfigFile {
    pub fn apply(self, config: &mut SolverConfig) {
        if let Some(labels) = self.labels {
            config.labels = labels;
        }
        if let Some(codes) = self.codes {
            config.codes = codes;
        }
        if let Some(budget) = self.visit_budget {
            config.visit_budget = budget;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> SolverConfig {
        SolverConfig {
            labels: Labels::new(".", "X", "S", "E").unwrap(),
            codes: DirectionCodes::default(),
            visit_budget: Some(10),
        }
    }

    fn layered(json: &str) -> SolverConfig {
        let mut config = base();
        serde_json::from_str::<ConfigFile>(json).unwrap().apply(&mut config);
        config
    }

    #[test]
    fn missing_keys_keep_the_base() {
        let config = layered(r#"{"codes": {"up": "N", "down": "S", "left": "W", "right": "E"}}"#);
        assert_eq!(config.labels, base().labels);
        assert_eq!(config.codes.to_tuple(), ("N", "S", "W", "E"));
        assert_eq!(config.visit_budget, Some(10));
        assert_eq!(layered("{}"), base());
    }

    #[test]
    fn budget_can_be_cleared_or_replaced() {
        assert_eq!(layered(r#"{"visit_budget": null}"#).visit_budget, None);
        assert_eq!(layered(r#"{"visit_budget": 3}"#).visit_budget, Some(3));
    }

    #[test]
    fn bad_files_are_rejected() {
        assert!(serde_json::from_str::<ConfigFile>(r#"{"budget": 3}"#).is_err());
        let dup = r#"{"codes": {"up": "A", "down": "A", "left": "B", "right": "C"}}"#;
        assert!(serde_json::from_str::<ConfigFile>(dup).is_err());
    }
}
