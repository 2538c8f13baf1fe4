#![allow(dead_code)]

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use script_lines_domain::{Options, ReportTable};
use script_lines_ports::{
    DirEntryDto, EntryKind, PhaseScriptDto, QuestDto, ReportDestination, ReportSink, ScriptCatalog, ScriptFetcher,
    ScriptFileSystem, ScriptRefDto, SpotDto, WarDto,
};
use script_lines_shared_kernel::{InfrastructureError, Result};
use script_lines_usecase::{ParsePipeline, PipelinePorts};

pub const STATIC_BASE: &str = "https://static.test/JP/Script";

pub fn script_url(id: &str) -> String {
    format!("{STATIC_BASE}/{}/{id}.txt", &id[..2])
}

pub fn quest(id: u64, name: &str, quest_type: &str, script_ids: &[&str]) -> QuestDto {
    QuestDto {
        id,
        name: name.to_string(),
        quest_type: quest_type.to_string(),
        phase_scripts: vec![PhaseScriptDto {
            phase: 1,
            scripts: script_ids
                .iter()
                .map(|sid| ScriptRefDto { script_id: sid.to_string(), script: script_url(sid) })
                .collect(),
        }],
    }
}

pub fn war(id: u64, name: &str, quests: Vec<QuestDto>) -> WarDto {
    WarDto { id, name: name.to_string(), spots: vec![SpotDto { quests }] }
}

#[derive(Default)]
pub struct StubCatalog {
    wars: HashMap<String, WarDto>,
    quests: HashMap<String, QuestDto>,
    pub calls: Mutex<Vec<String>>,
}

impl StubCatalog {
    pub fn with_war(mut self, id: &str, dto: WarDto) -> Self {
        self.wars.insert(id.to_string(), dto);
        self
    }

    pub fn with_quest(mut self, id: &str, dto: QuestDto) -> Self {
        self.quests.insert(id.to_string(), dto);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScriptCatalog for StubCatalog {
    async fn war(&self, id: &str) -> Result<WarDto> {
        self.calls.lock().unwrap().push(format!("war/{id}"));
        self.wars
            .get(id)
            .cloned()
            .ok_or_else(|| InfrastructureError::NotFound { kind: "war".to_string(), id: id.to_string() }.into())
    }

    async fn quest(&self, id: &str) -> Result<QuestDto> {
        self.calls.lock().unwrap().push(format!("quest/{id}"));
        self.quests
            .get(id)
            .cloned()
            .ok_or_else(|| InfrastructureError::NotFound { kind: "quest".to_string(), id: id.to_string() }.into())
    }

    fn script_locator(&self, id: &str) -> String {
        script_url(id)
    }
}

#[derive(Default)]
pub struct StubFetcher {
    bodies: HashMap<String, String>,
    pub fetched: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn with_script(mut self, id: &str, body: &str) -> Self {
        self.bodies.insert(script_url(id), body.to_string());
        self
    }

    pub fn fetched(&self) -> Vec<String> {
        let mut fetched = self.fetched.lock().unwrap().clone();
        fetched.sort();
        fetched
    }
}

#[async_trait]
impl ScriptFetcher for StubFetcher {
    async fn fetch(&self, locator: &str) -> Result<String> {
        self.fetched.lock().unwrap().push(locator.to_string());
        self.bodies.get(locator).cloned().ok_or_else(|| {
            InfrastructureError::Transport { url: locator.to_string(), details: "404 Not Found".to_string() }.into()
        })
    }
}

/// In-memory tree; `read_dir` answers in reverse name order.
#[derive(Default)]
pub struct MemoryFileSystem {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    pub reads: Mutex<Vec<PathBuf>>,
}

impl MemoryFileSystem {
    pub fn with_file(self, path: &str, body: &str) -> Self {
        self.with_file_path(PathBuf::from(path), body)
    }

    pub fn with_file_path(mut self, path: PathBuf, body: &str) -> Self {
        for ancestor in path.ancestors().skip(1) {
            if !ancestor.as_os_str().is_empty() {
                self.dirs.insert(ancestor.to_path_buf());
            }
        }
        self.files.insert(path, body.to_string());
        self
    }

    pub fn with_dir(mut self, path: &str) -> Self {
        let path = PathBuf::from(path);
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                self.dirs.insert(ancestor.to_path_buf());
            }
        }
        self
    }

    fn missing(path: &Path, operation: &str) -> InfrastructureError {
        InfrastructureError::FileSystemOperation {
            operation: operation.to_string(),
            path: path.to_path_buf(),
            source: io::Error::from(io::ErrorKind::NotFound),
        }
    }
}

impl ScriptFileSystem for MemoryFileSystem {
    fn kind(&self, path: &Path) -> Result<EntryKind> {
        if self.files.contains_key(path) {
            Ok(EntryKind::File)
        } else if self.dirs.contains(path) {
            Ok(EntryKind::Directory)
        } else {
            Err(Self::missing(path, "stat").into())
        }
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntryDto>> {
        if !self.dirs.contains(path) {
            return Err(Self::missing(path, "read_dir").into());
        }
        let children = |kind: EntryKind| {
            move |child: &PathBuf| {
                (child.parent() == Some(path)).then(|| DirEntryDto {
                    path: child.clone(),
                    name: child.file_name().unwrap_or_default().to_string_lossy().into_owned(),
                    kind,
                })
            }
        };
        let mut entries: Vec<DirEntryDto> = self
            .dirs
            .iter()
            .filter_map(children(EntryKind::Directory))
            .chain(self.files.keys().filter_map(children(EntryKind::File)))
            .collect();
        entries.sort_by(|a, b| b.name.cmp(&a.name));
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.reads.lock().unwrap().push(path.to_path_buf());
        self.files.get(path).cloned().ok_or_else(|| Self::missing(path, "read").into())
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub published: Mutex<Vec<(ReportTable, Options)>>,
}

impl RecordingSink {
    pub fn published(&self) -> Vec<(ReportTable, Options)> {
        self.published.lock().unwrap().clone()
    }
}

impl ReportSink for RecordingSink {
    fn publish(&self, table: &ReportTable, options: &Options) -> Result<ReportDestination> {
        self.published.lock().unwrap().push((table.clone(), *options));
        if options.skip_file_output {
            Ok(ReportDestination::Console)
        } else {
            Ok(ReportDestination::File(PathBuf::from("script-length.csv")))
        }
    }
}

pub struct Harness {
    pub catalog: Arc<StubCatalog>,
    pub fetcher: Arc<StubFetcher>,
    pub filesystem: Arc<MemoryFileSystem>,
    pub sink: Arc<RecordingSink>,
}

impl Harness {
    pub fn remote(catalog: StubCatalog, fetcher: StubFetcher) -> Self {
        Self::new(catalog, fetcher, MemoryFileSystem::default())
    }

    pub fn local(filesystem: MemoryFileSystem) -> Self {
        Self::new(StubCatalog::default(), StubFetcher::default(), filesystem)
    }

    fn new(catalog: StubCatalog, fetcher: StubFetcher, filesystem: MemoryFileSystem) -> Self {
        Self {
            catalog: Arc::new(catalog),
            fetcher: Arc::new(fetcher),
            filesystem: Arc::new(filesystem),
            sink: Arc::new(RecordingSink::default()),
        }
    }

    pub fn pipeline(&self) -> ParsePipeline {
        ParsePipeline::new(PipelinePorts {
            catalog: self.catalog.clone(),
            fetcher: self.fetcher.clone(),
            filesystem: self.filesystem.clone(),
            report_sink: self.sink.clone(),
        })
    }
}
