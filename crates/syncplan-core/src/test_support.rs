//! Scripted [`FileUtils`] double for async tests

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::sync::oneshot;

use crate::error::Result;
use crate::file_utils::FileUtils;

type Reply<T> = oneshot::Sender<Result<T>>;

/// Records every call; tests complete each pending future by hand.
#[derive(Default)]
pub(crate) struct ScriptedFileUtils {
    hash_calls: Mutex<Vec<(PathBuf, Reply<String>)>>,
    hash_call_count: Mutex<usize>,
    exists_call_count: Mutex<usize>,
    present: Mutex<HashMap<PathBuf, bool>>,
}

impl ScriptedFileUtils {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Script the answer `exists(path)` gives; unscripted paths fail.
    pub(crate) fn set_exists(&self, path: impl Into<PathBuf>, exists: bool) {
        self.present.lock().unwrap().insert(path.into(), exists);
    }

    pub(crate) fn hash_calls(&self) -> usize {
        *self.hash_call_count.lock().unwrap()
    }

    pub(crate) fn exists_calls(&self) -> usize {
        *self.exists_call_count.lock().unwrap()
    }

    /// Complete the oldest pending `content_hash` call.
    pub(crate) fn resolve_hash(&self, result: Result<String>) {
        let (_, reply) = self.hash_calls.lock().unwrap().remove(0);
        let _ = reply.send(result);
    }

    /// Complete the pending `content_hash` call for `path`.
    pub(crate) fn resolve_hash_for(&self, path: &Path, result: Result<String>) {
        let mut calls = self.hash_calls.lock().unwrap();
        let idx = calls.iter().position(|(p, _)| p == path).unwrap();
        let (_, reply) = calls.remove(idx);
        let _ = reply.send(result);
    }
}

impl FileUtils for ScriptedFileUtils {
    fn exists(&self, path: &Path) -> BoxFuture<'static, Result<bool>> {
        *self.exists_call_count.lock().unwrap() += 1;
        let answer = self.present.lock().unwrap().get(path).copied();
        let path = path.to_path_buf();
        async move {
            answer.ok_or_else(|| anyhow::anyhow!("no scripted answer for {}", path.display()))
        }
        .boxed()
    }

    fn content_hash(&self, path: &Path) -> BoxFuture<'static, Result<String>> {
        *self.hash_call_count.lock().unwrap() += 1;
        let (tx, rx) = oneshot::channel();
        self.hash_calls.lock().unwrap().push((path.to_path_buf(), tx));
        async move {
            rx.await
                .unwrap_or_else(|_| Err(anyhow::anyhow!("hash reply dropped")))
        }
        .boxed()
    }
}
