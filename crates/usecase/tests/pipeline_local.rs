mod support;

use script_lines_domain::{AtlasIdType, Count, Options, ParseRequest, Source};
use script_lines_shared_kernel::ErrorKind;
use support::{Harness, MemoryFileSystem};

const ONE_LINE: &str = "＠A：マシュ\n先輩\n[k]\n";
const CHOICE: &str = "？1：はい、行きます\n";

fn request(raw: &str) -> ParseRequest {
    ParseRequest {
        source: Source::Local,
        id_type: AtlasIdType::War,
        raw_input: raw.to_string(),
        options: Options::default(),
    }
}

#[tokio::test]
async fn two_leaf_directories_give_two_results() {
    let filesystem = MemoryFileSystem::default()
        .with_file("scripts/ch1/a.txt", ONE_LINE)
        .with_file("scripts/ch1/b.txt", CHOICE)
        .with_file("scripts/ch2/c.txt", ONE_LINE);
    let harness = Harness::local(filesystem);

    let outcome = harness.pipeline().run(request("scripts")).await.expect("run succeeds");

    let summary: Vec<_> = outcome.results.iter().map(|r| (r.id.as_str(), r.name.as_str(), r.count)).collect();
    assert_eq!(
        summary,
        vec![("scripts/ch1", "ch1", Count::new(2, 9)), ("scripts/ch2", "ch2", Count::new(1, 2))]
    );
}

#[tokio::test]
async fn files_next_to_subdirectories_are_their_own_items() {
    let filesystem = MemoryFileSystem::default()
        .with_file("root/z-prologue.txt", CHOICE)
        .with_file("root/arc/01.txt", ONE_LINE)
        .with_dir("root/empty");
    let harness = Harness::local(filesystem);

    let outcome = harness.pipeline().run(request("root")).await.expect("run succeeds");

    let summary: Vec<_> = outcome.results.iter().map(|r| (r.name.as_str(), r.count)).collect();
    assert_eq!(
        summary,
        vec![("arc", Count::new(1, 2)), ("empty", Count::ZERO), ("z-prologue", Count::new(1, 7))]
    );
}

#[tokio::test]
async fn single_file_is_named_by_its_stem() {
    let harness = Harness::local(MemoryFileSystem::default().with_file("story/0100000111.txt", ONE_LINE));

    let outcome = harness.pipeline().run(request("\"story/0100000111.txt\"")).await.expect("run succeeds");

    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].id, "story/0100000111.txt");
    assert_eq!(outcome.results[0].name, "0100000111");
    assert_eq!(outcome.results[0].count, Count::new(1, 2));
}

#[tokio::test]
async fn missing_path_is_a_filesystem_error() {
    let harness = Harness::local(MemoryFileSystem::default().with_file("a.txt", ONE_LINE));

    let err = harness.pipeline().run(request("a.txt\nnope")).await.expect_err("must fail");

    assert_eq!(err.kind(), ErrorKind::Filesystem);
    assert!(harness.sink.published().is_empty());
}

#[cfg(unix)]
#[tokio::test]
async fn file_names_that_are_not_utf8_are_still_read() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt, path::PathBuf};

    let odd = PathBuf::from("leaf").join(OsStr::from_bytes(b"bad\xff.txt"));
    let filesystem = MemoryFileSystem::default().with_file_path(odd.clone(), ONE_LINE).with_file("leaf/ok.txt", CHOICE);
    let harness = Harness::local(filesystem);

    let outcome = harness.pipeline().run(request("leaf")).await.expect("run succeeds");

    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].name, "leaf");
    assert_eq!(outcome.results[0].count, Count::new(2, 9));
    assert!(harness.filesystem.reads.lock().unwrap().contains(&odd));
}
