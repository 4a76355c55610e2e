//! Watch mode: regenerate plugin options when the spec tree changes.

use std::path::{Path, PathBuf};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher, recommended_watcher};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

use crate::{
    Result, SpecdocsError,
    config::SiteConfig,
    discovery::SpecExtension,
    mapping::ConfigMap,
    plugin::PluginOptions,
};

/// A file system change below the spec directory.
#[derive(Debug, Clone)]
pub struct SpecEvent {
    /// The path that changed
    pub path: PathBuf,
    /// The type of change that occurred
    pub kind: SpecEventKind,
}

/// The type of file system change that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecEventKind {
    /// File or directory was created
    Created,
    /// File was modified
    Modified,
    /// File or directory was removed
    Removed,
}

impl SpecEvent {
    /// Whether this change can alter the generated map.
    ///
    /// Any create or remove counts, since it may be a whole directory of
    /// specs. Modifications only count for spec files.
    pub fn affects_specs(&self) -> bool {
        match self.kind {
            SpecEventKind::Created | SpecEventKind::Removed => true,
            SpecEventKind::Modified => self
                .path
                .file_name()
                .and_then(SpecExtension::from_os_name)
                .is_some(),
        }
    }
}

/// Recursive watcher over a spec directory.
///
/// Wraps a `notify` watcher and forwards its events into a tokio channel.
pub struct SpecWatcher {
    watcher: RecommendedWatcher,
}

impl SpecWatcher {
    /// Creates a watcher and the receiver its events arrive on.
    ///
    /// # Errors
    /// Returns `SpecdocsError::Watch` if the platform watcher cannot be created.
    pub fn new() -> Result<(Self, mpsc::UnboundedReceiver<SpecEvent>)> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let watcher =
            recommended_watcher(move |res: notify::Result<Event>| forward_event(res, &event_tx))
                .map_err(|e| SpecdocsError::Watch(e.to_string()))?;

        Ok((Self { watcher }, event_rx))
    }

    /// Starts watching `path` and everything below it.
    ///
    /// # Errors
    /// Returns `SpecdocsError::Watch` if the directory cannot be watched.
    pub fn watch_dir(&mut self, path: &Path) -> Result<()> {
        self.watcher
            .watch(path, RecursiveMode::Recursive)
            .map_err(|e| SpecdocsError::Watch(format!("{}: {e}", path.display())))
    }
}

/// Translates one `notify` callback result into [`SpecEvent`]s on `tx`.
///
/// Watcher errors are logged and dropped; the watch keeps running.
fn forward_event(res: notify::Result<Event>, tx: &mpsc::UnboundedSender<SpecEvent>) {
    let event = match res {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, paths = ?e.paths, "spec watcher error");
            return;
        }
    };

    let kind = match event.kind {
        EventKind::Create(_) => SpecEventKind::Created,
        EventKind::Modify(_) => SpecEventKind::Modified,
        EventKind::Remove(_) => SpecEventKind::Removed,
        _ => return,
    };

    for path in event.paths {
        if tx.send(SpecEvent { path, kind }).is_err() {
            debug!("watch loop has stopped; dropping event");
            return;
        }
    }
}

/// Builds the map for `root` and writes plugin options to `output`.
///
/// Returns the number of mapped specs.
///
/// # Errors
/// Propagates discovery and write failures.
pub fn rebuild(config: &SiteConfig, root: &Path, output: &Path) -> Result<usize> {
    let map = ConfigMap::build(root, &config.mapping_options())?;
    let count = map.len();
    PluginOptions::new(&config.plugin, map).write_to(output)?;
    Ok(count)
}

/// Builds once, then rebuilds on every relevant change until Ctrl-C.
///
/// Failures after the initial build are logged and the watch continues.
///
/// # Errors
/// Returns an error if the initial build fails or the spec directory cannot
/// be watched.
#[instrument(skip_all, fields(root = %root.display(), output = %output.display()))]
pub async fn run(config: &SiteConfig, root: &Path, output: &Path) -> Result<()> {
    if !root.is_dir() {
        return Err(SpecdocsError::Watch(format!(
            "spec directory '{}' does not exist",
            root.display()
        )));
    }

    rebuild(config, root, output)?;

    let (mut watcher, mut events) = SpecWatcher::new()?;
    watcher.watch_dir(root)?;
    info!("watching for spec changes");

    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else {
                    break;
                };

                if !event.affects_specs() {
                    continue;
                }

                debug!(path = %event.path.display(), kind = ?event.kind, "spec tree changed");
                while events.try_recv().is_ok() {}

                match rebuild(config, root, output) {
                    Ok(count) => info!(count, "regenerated plugin options"),
                    Err(e) => error!(error = %e, "rebuild failed"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("stopping watch");
                break;
            }
        }
    }

    Ok(())
}
