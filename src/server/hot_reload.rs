//! Hot reload of the tool schema for `portainer-mcp serve`.
//!
//! Watches the YAML tool schema with `notify`. After a change (debounced by
//! 100ms) the schema is parsed again and the registry rebuilt with the same
//! read-only setting. On success the inner `Arc<ToolRegistry>` is swapped and
//! every connected peer receives tools-list-changed; on failure the previous
//! registry stays in place.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{RecursiveMode, Watcher};
use tokio_util::sync::CancellationToken;

use super::{PeerList, RegistryHandle};
use crate::registry::{build_registry, ToolRegistry};
use crate::toolset::load_tools_from_str;

const DEBOUNCE: Duration = Duration::from_millis(100);

/// Watch `tools_path` and rebuild the registry on each change until `cancel`
/// fires.
pub async fn run_hot_reload(
    tools_path: PathBuf,
    read_only: bool,
    registry_handle: RegistryHandle,
    peers_handle: PeerList,
    cancel: CancellationToken,
) {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<notify::Result<notify::Event>>();

    // notify's EventHandler is implemented for FnMut but not for tokio's sender.
    let mut watcher = match notify::recommended_watcher(move |event| {
        let _ = tx.send(event);
    }) {
        Ok(w) => w,
        Err(e) => {
            tracing::error!(error = %e, "failed to create file watcher for hot-reload");
            return;
        }
    };

    if let Err(e) = watcher.watch(&tools_path, RecursiveMode::NonRecursive) {
        tracing::error!(
            path = %tools_path.display(),
            error = %e,
            "failed to watch tool schema for hot-reload"
        );
        return;
    }

    // Dropping the watcher stops the OS-level watch.
    let _watcher = watcher;

    tracing::info!(path = %tools_path.display(), "hot-reload watching tool schema");

    loop {
        tokio::select! {
            event = rx.recv() => {
                match event {
                    Some(Ok(_)) => {
                        tokio::time::sleep(DEBOUNCE).await;
                        while rx.try_recv().is_ok() {}

                        match reload_registry(&tools_path, read_only).await {
                            Ok(new_registry) => {
                                let tool_count = new_registry.len();
                                {
                                    let mut guard = registry_handle.write().await;
                                    *guard = Arc::new(new_registry);
                                }
                                tracing::info!(
                                    tools = tool_count,
                                    path = %tools_path.display(),
                                    "tool schema reloaded"
                                );
                                notify_peers(&peers_handle).await;
                            }
                            Err(e) => {
                                tracing::warn!(
                                    error = %e,
                                    path = %tools_path.display(),
                                    "hot-reload failed, keeping previous tools"
                                );
                            }
                        }
                    }
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "file watcher error during hot-reload");
                    }
                    None => {
                        tracing::debug!("hot-reload watcher channel closed");
                        return;
                    }
                }
            }
            _ = cancel.cancelled() => {
                tracing::debug!("hot-reload cancelled");
                return;
            }
        }
    }
}

/// Send tools-list-changed to every peer, dropping those whose transport is gone.
async fn notify_peers(peers_handle: &PeerList) {
    let mut peers = peers_handle.lock().await;
    let mut live_peers = Vec::with_capacity(peers.len());
    for peer in peers.drain(..) {
        match peer.notify_tool_list_changed().await {
            Ok(()) => live_peers.push(peer),
            Err(e) => {
                tracing::debug!(error = %e, "pruning stale peer after tools-list-changed error");
            }
        }
    }
    *peers = live_peers;
}

async fn reload_registry(tools_path: &Path, read_only: bool) -> crate::Result<ToolRegistry> {
    let source = tools_path.display().to_string();
    let content = tokio::fs::read_to_string(tools_path)
        .await
        .map_err(|e| crate::PortainerMcpError::ToolSchema(source.clone(), e.to_string()))?;
    let schema = load_tools_from_str(&content, &source)?;
    Ok(build_registry(schema, read_only))
}
