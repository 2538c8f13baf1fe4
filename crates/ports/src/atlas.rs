// crates/ports/src/atlas.rs
use async_trait::async_trait;
use script_lines_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// Quest `type` value for story quests.
pub const MAIN_QUEST_TYPE: &str = "main";

/// Subset of the `nice` war payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarDto {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub spots: Vec<SpotDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotDto {
    #[serde(default)]
    pub quests: Vec<QuestDto>,
}

/// Subset of the `nice` quest payload. Wars embed the same shape under their spots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestDto {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub quest_type: String,
    #[serde(default)]
    pub phase_scripts: Vec<PhaseScriptDto>,
}

impl QuestDto {
    pub fn is_main(&self) -> bool {
        self.quest_type == MAIN_QUEST_TYPE
    }

    /// Scripts of every phase, in payload order.
    pub fn script_refs(&self) -> impl Iterator<Item = &ScriptRefDto> {
        self.phase_scripts.iter().flat_map(|phase| phase.scripts.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseScriptDto {
    #[serde(default)]
    pub phase: u32,
    #[serde(default)]
    pub scripts: Vec<ScriptRefDto>,
}

/// A script id and the URL its body is served from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptRefDto {
    pub script_id: String,
    pub script: String,
}

/// Metadata lookups against the remote content API.
#[async_trait]
pub trait ScriptCatalog: Send + Sync {
    async fn war(&self, id: &str) -> Result<WarDto>;

    async fn quest(&self, id: &str) -> Result<QuestDto>;

    /// URL of a script body addressed by id alone. Callers validate the id first.
    fn script_locator(&self, id: &str) -> String;
}

/// Downloads script bodies.
#[async_trait]
pub trait ScriptFetcher: Send + Sync {
    async fn fetch(&self, locator: &str) -> Result<String>;
}
