// crates/domain/src/rules.rs
//! Supplementary quests merged into a war's batch.
//!
//! Some wars publish story scripts in quests that are missing from the war's own
//! spot/quest tree. Each rule names the war and the extra quests whose scripts are
//! merged into the war's batch before deduplication.

/// A war id and the quest ids that belong to it but are not listed under its spots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplementRule {
    pub war_id: &'static str,
    pub quest_ids: &'static [&'static str],
}

/// Built-in rules.
pub const SUPPLEMENTARY_QUESTS: &[SupplementRule] = &[
    // Ordeal Call II: the appendix quest is not listed in the war's quest tree.
    SupplementRule { war_id: "403", quest_ids: &["4000327"] },
];

/// Lookup over a rule table.
#[derive(Debug, Clone, Copy)]
pub struct SupplementRules {
    rules: &'static [SupplementRule],
}

impl SupplementRules {
    pub const fn new(rules: &'static [SupplementRule]) -> Self {
        Self { rules }
    }

    /// Extra quest ids for `war_id`; empty when no rule applies.
    pub fn quests_for_war<'a>(&'a self, war_id: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.rules
            .iter()
            .filter(move |rule| rule.war_id == war_id)
            .flat_map(|rule| rule.quest_ids.iter().copied())
    }
}

impl Default for SupplementRules {
    fn default() -> Self {
        Self::new(SUPPLEMENTARY_QUESTS)
    }
}
