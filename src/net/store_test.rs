use std::cell::RefCell;
use std::collections::HashSet;

use futures::executor::block_on;

use super::*;
use crate::state::files::FilesState;

/// In-memory store that records every remote call in order.
#[derive(Default)]
struct MockStore {
    files: RefCell<Vec<FileEntry>>,
    fail_paths: HashSet<String>,
    ops: RefCell<Vec<String>>,
}

impl MockStore {
    fn with_files(names: &[&str]) -> Self {
        let files = names
            .iter()
            .enumerate()
            .map(|(i, name)| FileEntry {
                id: format!("f-{}", i + 1),
                name: (*name).to_owned(),
                path: format!("./{name}"),
                size: None,
            })
            .collect();
        Self {
            files: RefCell::new(files),
            ..Self::default()
        }
    }

    fn failing_on(mut self, path: &str) -> Self {
        self.fail_paths.insert(path.to_owned());
        self
    }

    fn ops(&self) -> Vec<String> {
        self.ops.borrow().clone()
    }
}

impl RemoteStore for MockStore {
    async fn list_directory(&self, path: &str) -> Result<Vec<FileEntry>, StoreError> {
        self.ops.borrow_mut().push(format!("list {path}"));
        Ok(self.files.borrow().clone())
    }

    async fn delete_file(&self, path: &str) -> Result<(), StoreError> {
        self.ops.borrow_mut().push(format!("delete {path}"));
        if self.fail_paths.contains(path) {
            return Err(StoreError::Status(500));
        }
        let mut files = self.files.borrow_mut();
        let before = files.len();
        files.retain(|f| f.path != path);
        if files.len() == before {
            return Err(StoreError::Status(404));
        }
        Ok(())
    }

    async fn flush_kv(&self) -> Result<(), StoreError> {
        self.ops.borrow_mut().push("flush".to_owned());
        Ok(())
    }
}

async fn refresh(store: &MockStore, state: &mut FilesState) {
    let result = store
        .list_directory("./")
        .await
        .map_err(|e| e.to_string());
    state.apply_listing(result);
}

// =============================================================
// Wipe sequencing
// =============================================================

#[test]
fn wipe_deletes_in_cache_order_then_flushes_once() {
    block_on(async {
        let store = MockStore::with_files(&["a.pdf", "b.txt", "c.doc"]);
        let mut state = FilesState::default();
        refresh(&store, &mut state).await;

        let plan = state.wipe_plan();
        wipe_all(&store, &plan, WipePolicy::default())
            .await
            .expect("wipe");
        refresh(&store, &mut state).await;

        assert!(state.entries.is_empty());
        assert!(!state.has_resumes());
        assert_eq!(
            store.ops(),
            vec![
                "list ./",
                "delete ./a.pdf",
                "delete ./b.txt",
                "delete ./c.doc",
                "flush",
                "list ./",
            ]
        );
    });
}

#[test]
fn wipe_of_empty_plan_still_flushes() {
    block_on(async {
        let store = MockStore::with_files(&[]);
        wipe_all(&store, &[], WipePolicy::default())
            .await
            .expect("wipe");
        assert_eq!(store.ops(), vec!["flush"]);
    });
}

#[test]
fn abort_policy_stops_at_first_failure_without_flush() {
    block_on(async {
        let store = MockStore::with_files(&["a.pdf", "b.txt", "c.doc"]).failing_on("./b.txt");
        let plan = store.list_directory("./").await.expect("list");
        let plan: Vec<String> = plan.into_iter().map(|f| f.path).collect();

        let err = wipe_all(&store, &plan, WipePolicy::Abort)
            .await
            .expect_err("wipe should fail");
        assert_eq!(err, StoreError::Status(500));

        // Partial deletion, no rollback, remaining entries untouched.
        assert_eq!(
            store.ops(),
            vec!["list ./", "delete ./a.pdf", "delete ./b.txt"]
        );
        let left = store.list_directory("./").await.expect("list");
        let names: Vec<_> = left.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b.txt", "c.doc"]);
    });
}

#[test]
fn best_effort_policy_continues_flushes_and_reports_first_error() {
    block_on(async {
        let store = MockStore::with_files(&["a.pdf", "b.txt", "c.doc"]).failing_on("./b.txt");
        let plan = vec![
            "./a.pdf".to_owned(),
            "./b.txt".to_owned(),
            "./c.doc".to_owned(),
        ];

        let err = wipe_all(&store, &plan, WipePolicy::BestEffort)
            .await
            .expect_err("first error is reported");
        assert_eq!(err, StoreError::Status(500));
        assert_eq!(
            store.ops(),
            vec![
                "delete ./a.pdf",
                "delete ./b.txt",
                "delete ./c.doc",
                "flush",
            ]
        );
    });
}

// =============================================================
// Single delete
// =============================================================

#[test]
fn single_delete_then_refresh_drops_the_entry() {
    block_on(async {
        let store = MockStore::with_files(&["a.pdf", "b.txt"]);
        let mut state = FilesState::default();
        refresh(&store, &mut state).await;
        assert!(state.has_resumes());

        store.delete_file("./b.txt").await.expect("delete");
        refresh(&store, &mut state).await;

        assert!(state.entries.iter().all(|f| f.id != "f-2"));
        assert!(state.has_resumes());

        store.delete_file("./a.pdf").await.expect("delete");
        refresh(&store, &mut state).await;
        assert!(state.entries.is_empty());
        assert!(!state.has_resumes());
    });
}

#[test]
fn deleting_an_absent_path_fails_and_does_not_resurrect_it() {
    block_on(async {
        let store = MockStore::with_files(&["a.pdf"]);
        store.delete_file("./a.pdf").await.expect("delete");

        let err = store
            .delete_file("./a.pdf")
            .await
            .expect_err("path is gone");
        assert_eq!(err, StoreError::Status(404));

        let listing = store.list_directory("./").await.expect("list");
        assert!(listing.is_empty());
    });
}
