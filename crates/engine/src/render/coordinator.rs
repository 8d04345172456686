//! Serialized render coordinator.
//!
//! One worker task per open sheet owns that sheet's render loop. Requests
//! queue on a channel and are processed one at a time, so passes never
//! overlap and every request completes; the caller awaits an ack for each
//! pass. Render failures are logged, never propagated to the requester.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, Mutex};

use crate::infrastructure::ports::{ItemDocs, SheetView};
use crate::render::observers::RenderObservers;
use crate::sheets::Sheet;
use crate::stores::{ExpandedItemCache, SheetPreferencesStore, SheetState};

/// How much of the sheet a render pass rebuilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Remount the render target; window sizing is reapplied first
    Full,
    /// Patch the existing markup in place, preserving input focus
    Incremental,
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Sheet is closed")]
    Closed,
    #[error("Render worker is gone")]
    WorkerGone,
}

enum Job {
    Render {
        mode: RenderMode,
        ack: oneshot::Sender<()>,
    },
    Close {
        ack: oneshot::Sender<()>,
    },
}

/// Handle to one sheet's render worker.
pub struct RenderCoordinator {
    jobs: mpsc::Sender<Job>,
    closed: AtomicBool,
}

impl RenderCoordinator {
    /// Spawns the render worker for a sheet and returns its handle.
    pub fn spawn(
        sheet: Arc<dyn Sheet>,
        view: Arc<dyn SheetView>,
        item_docs: Arc<dyn ItemDocs>,
        state: Arc<Mutex<SheetState>>,
        preferences: Arc<SheetPreferencesStore>,
        observers: Arc<RenderObservers>,
    ) -> Self {
        let (jobs, queue) = mpsc::channel(32);
        tracing::info!(sheet_id = %sheet.id(), kind = ?sheet.kind(), "Render worker starting");
        let worker = RenderWorker {
            sheet,
            view,
            item_docs,
            state,
            preferences,
            observers,
            cache: ExpandedItemCache::new(),
        };
        tokio::spawn(worker.run(queue));
        Self {
            jobs,
            closed: AtomicBool::new(false),
        }
    }

    /// Requests a render pass and waits for it to complete.
    ///
    /// Back-to-back requests each get their own pass, in request order. A
    /// request that races a concurrent [`close`](Self::close) and lands
    /// behind the shutdown job reports `Closed`, not `WorkerGone`.
    pub async fn request_render(&self, mode: RenderMode) -> Result<(), RenderError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(RenderError::Closed);
        }
        let (ack, done) = oneshot::channel();
        self.jobs
            .send(Job::Render { mode, ack })
            .await
            .map_err(|_| self.shutdown_error())?;
        done.await.map_err(|_| self.shutdown_error())
    }

    /// Shuts the worker down: pending passes finish, the render target is
    /// detached, and observers are closed. Idempotent.
    pub async fn close(&self) -> Result<(), RenderError> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        let (ack, done) = oneshot::channel();
        self.jobs
            .send(Job::Close { ack })
            .await
            .map_err(|_| RenderError::WorkerGone)?;
        done.await.map_err(|_| RenderError::WorkerGone)
    }

    /// The worker only goes away through `close`, so a dropped ack after the
    /// closed flag is set means the request lost a race with shutdown.
    fn shutdown_error(&self) -> RenderError {
        if self.closed.load(Ordering::Acquire) {
            RenderError::Closed
        } else {
            RenderError::WorkerGone
        }
    }
}

struct RenderWorker {
    sheet: Arc<dyn Sheet>,
    view: Arc<dyn SheetView>,
    item_docs: Arc<dyn ItemDocs>,
    state: Arc<Mutex<SheetState>>,
    preferences: Arc<SheetPreferencesStore>,
    observers: Arc<RenderObservers>,
    cache: ExpandedItemCache,
}

impl RenderWorker {
    async fn run(mut self, mut queue: mpsc::Receiver<Job>) {
        let mut close_ack = None;

        while let Some(job) = queue.recv().await {
            match job {
                Job::Render { mode, ack } => {
                    self.render_pass(mode).await;
                    let _ = ack.send(());
                }
                Job::Close { ack } => {
                    close_ack = Some(ack);
                    break;
                }
            }
        }

        self.view.detach();
        self.observers.close();
        tracing::info!(sheet_id = %self.sheet.id(), "Render worker stopped");
        if let Some(ack) = close_ack {
            let _ = ack.send(());
        }
    }

    async fn render_pass(&mut self, mode: RenderMode) {
        let expanded = self.state.lock().await.expanded_item_ids();
        self.cache.refresh(&self.item_docs, &expanded).await;

        let mut context = match self.sheet.prepare_context().await {
            Ok(context) => context,
            Err(error) => {
                tracing::error!(
                    sheet_id = %self.sheet.id(),
                    %error,
                    "Context assembly failed; skipping render pass"
                );
                return;
            }
        };
        context.expanded_item_details = self.cache.snapshot();

        let result = match mode {
            RenderMode::Full => {
                let prefs = self.preferences.get(self.sheet.kind());
                self.view.apply_window_size(prefs.width, prefs.height);
                self.view.mount(&context).await
            }
            RenderMode::Incremental => self.view.patch(&context).await,
        };

        if let Err(error) = result {
            tracing::error!(sheet_id = %self.sheet.id(), %error, "View update failed");
            return;
        }

        self.observers.notify(self.sheet.id(), mode);
    }
}
