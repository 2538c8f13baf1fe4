// crates/usecase/src/resolver.rs
//! Expands one request item into the set of script units that make it up.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use script_lines_domain::{AtlasIdType, ResolutionBatch, ScriptUnit, input::validate_script_id, rules::SupplementRules};
use script_lines_ports::{DirEntryDto, EntryKind, QuestDto, ScriptCatalog, ScriptFileSystem};
use script_lines_shared_kernel::Result;
use tracing::debug;

/// A top-level request item together with the units it expands to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedItem {
    pub id: String,
    pub name: String,
    pub batch: ResolutionBatch,
}

/// Resolves war, quest and script ids against the remote catalog.
pub struct RemoteResolver {
    catalog: Arc<dyn ScriptCatalog>,
    rules: SupplementRules,
}

impl RemoteResolver {
    pub fn new(catalog: Arc<dyn ScriptCatalog>, rules: SupplementRules) -> Self {
        Self { catalog, rules }
    }

    pub async fn resolve(&self, id_type: AtlasIdType, id: &str) -> Result<ResolvedItem> {
        match id_type {
            AtlasIdType::War => self.resolve_war(id).await,
            AtlasIdType::Quest => self.resolve_quest(id).await,
            AtlasIdType::Script => self.resolve_script(id),
        }
    }

    async fn resolve_war(&self, id: &str) -> Result<ResolvedItem> {
        let war = self.catalog.war(id).await?;
        let mut batch: ResolutionBatch = war
            .spots
            .iter()
            .flat_map(|spot| spot.quests.iter())
            .filter(|quest| quest.is_main())
            .flat_map(units_of)
            .collect();

        for quest_id in self.rules.quests_for_war(id) {
            let quest = self.catalog.quest(quest_id).await?;
            debug!(war = id, quest = quest_id, "merging supplementary quest");
            batch.extend(units_of(&quest));
        }

        debug!(war = id, scripts = batch.len(), "resolved war");
        Ok(ResolvedItem { id: id.to_string(), name: display_name(war.name, id), batch })
    }

    async fn resolve_quest(&self, id: &str) -> Result<ResolvedItem> {
        let quest = self.catalog.quest(id).await?;
        let batch: ResolutionBatch = units_of(&quest).collect();
        debug!(quest = id, scripts = batch.len(), "resolved quest");
        Ok(ResolvedItem { id: id.to_string(), name: display_name(quest.name, id), batch })
    }

    fn resolve_script(&self, id: &str) -> Result<ResolvedItem> {
        validate_script_id(id)?;
        let batch = std::iter::once(ScriptUnit::new(id, self.catalog.script_locator(id))).collect();
        Ok(ResolvedItem { id: id.to_string(), name: id.to_string(), batch })
    }
}

fn units_of(quest: &QuestDto) -> impl Iterator<Item = ScriptUnit> + '_ {
    quest.script_refs().map(|script| ScriptUnit::new(&script.script_id, &script.script))
}

fn display_name(name: String, id: &str) -> String {
    if name.trim().is_empty() { id.to_string() } else { name }
}

/// A local file or leaf directory and the files counted for it.
///
/// Paths are kept as read from the filesystem; only `id` and `name` are lossy strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalItem {
    pub id: String,
    pub name: String,
    pub files: Vec<PathBuf>,
}

/// Resolves local files and directory trees.
///
/// A file is one item. A directory that has subdirectories is walked in name order;
/// each directory without subdirectories becomes one item grouping its files, and
/// files found next to subdirectories become items of their own.
pub struct LocalResolver<'a> {
    filesystem: &'a dyn ScriptFileSystem,
}

impl<'a> LocalResolver<'a> {
    pub fn new(filesystem: &'a dyn ScriptFileSystem) -> Self {
        Self { filesystem }
    }

    pub fn resolve(&self, raw: &str) -> Result<Vec<LocalItem>> {
        let path = Path::new(raw);
        match self.filesystem.kind(path)? {
            EntryKind::File => Ok(vec![file_item(raw.to_string(), path)]),
            EntryKind::Directory => {
                let mut items = Vec::new();
                self.walk(path, raw.to_string(), &mut items)?;
                Ok(items)
            }
        }
    }

    fn walk(&self, dir: &Path, id: String, items: &mut Vec<LocalItem>) -> Result<()> {
        let mut entries = self.filesystem.read_dir(dir)?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        if entries.iter().any(DirEntryDto::is_dir) {
            for entry in entries {
                let entry_id = entry.path.display().to_string();
                match entry.kind {
                    EntryKind::Directory => self.walk(&entry.path, entry_id, items)?,
                    EntryKind::File => items.push(file_item(entry_id, &entry.path)),
                }
            }
            return Ok(());
        }

        let files: Vec<PathBuf> = entries.into_iter().map(|entry| entry.path).collect();
        debug!(dir = %dir.display(), files = files.len(), "resolved leaf directory");
        let name = dir.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_else(|| id.clone());
        items.push(LocalItem { id, name, files });
        Ok(())
    }
}

fn file_item(id: String, path: &Path) -> LocalItem {
    let name = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| id.clone());
    LocalItem { id, name, files: vec![path.to_path_buf()] }
}
