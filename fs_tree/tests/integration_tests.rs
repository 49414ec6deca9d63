//! Integration tests for transcript replay against the tree
//!
//! These tests drive the tree through parsed transcripts rather than
//! hand-built event vectors, the way the driver does.

use fs_model::Node;
use fs_tree::{FileSystem, FsError};
use transcript::Transcript;

const SAMPLE: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

#[test]
fn test_replay_sample_structure() {
    let transcript = Transcript::from_text(SAMPLE).unwrap();
    let mut fs = FileSystem::new(70_000_000);
    fs.replay(transcript.events()).unwrap();

    let root = fs.directory(fs.root()).unwrap();
    let names: Vec<&str> = root.entries().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["a", "b.txt", "c.dat", "d"]);

    let a = fs.directory(root.entry("a").unwrap()).unwrap();
    assert_eq!(a.count(), 4);
    assert_eq!(a.parent(), fs.root());

    let e = fs.directory(a.entry("e").unwrap()).unwrap();
    assert_eq!(e.count(), 1);

    let d = fs.directory(root.entry("d").unwrap()).unwrap();
    assert_eq!(d.count(), 4);
    assert!(d
        .entries()
        .all(|(_, id)| matches!(fs.node(id), Some(Node::File(_)))));
}

#[test]
fn test_replay_leaves_cursor_where_session_ended() {
    let transcript = Transcript::from_text(SAMPLE).unwrap();
    let mut fs = FileSystem::new(70_000_000);
    fs.replay(transcript.events()).unwrap();

    // the session ends inside /d
    let cursor = fs.directory(fs.cursor()).unwrap();
    assert_eq!(cursor.name, "d");
}

#[test]
fn test_replay_bad_navigation_is_typed() {
    let transcript = Transcript::from_text("$ cd /\n$ cd missing").unwrap();
    let mut fs = FileSystem::new(70_000_000);
    assert_eq!(
        fs.replay(transcript.events()),
        Err(FsError::DirectoryNotFound("missing".to_string()))
    );
}

#[test]
fn test_replay_descend_into_file_is_typed() {
    let transcript = Transcript::from_text("$ cd /\n$ ls\n100 b.txt\n$ cd b.txt").unwrap();
    let mut fs = FileSystem::new(70_000_000);
    assert_eq!(
        fs.replay(transcript.events()),
        Err(FsError::NotADirectory("b.txt".to_string()))
    );
}

#[test]
fn test_replay_duplicate_listing_is_typed() {
    let transcript = Transcript::from_text("$ cd /\n$ ls\ndir a\n$ ls\ndir a").unwrap();
    let mut fs = FileSystem::new(70_000_000);
    assert_eq!(
        fs.replay(transcript.events()),
        Err(FsError::DuplicateName("a".to_string()))
    );
}
