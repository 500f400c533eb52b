//! Loading range tables with a JSON side-car cache.
//!
//! Parsing the registry document on every run is wasteful, so the first
//! load writes the resulting table to `ranges.data` next to
//! `RangeMessage.xml`; later loads read the cache instead.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use isbn_engine::RangeTable;

use crate::config::{cache_path, range_message_path, MAX_XML_SIZE};
use crate::error::{RangesError, Result};
use crate::message::{parse_range_message, RangeMessage};

/// How [`load_table`] treats the side-car cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Read the cache if present, otherwise parse and write it.
    #[default]
    Use,
    /// Always parse the registry document; leave the cache alone.
    Bypass,
    /// Always parse the registry document and overwrite the cache.
    Refresh,
}

/// Read a file, refusing anything larger than `max` bytes before reading it.
fn read_bounded(path: &Path, max: usize) -> Result<String> {
    let size = usize::try_from(fs::metadata(path)?.len()).unwrap_or(usize::MAX);
    if size > max {
        tracing::warn!(path = %path.display(), size, max, "File exceeds size limit");
        return Err(RangesError::TooLarge { size, max });
    }
    Ok(fs::read_to_string(path)?)
}

/// Read and parse the registry document at `path`.
pub fn load_range_message(path: &Path) -> Result<RangeMessage> {
    if !path.exists() {
        return Err(RangesError::MissingRangeMessage(path.to_path_buf()));
    }
    tracing::debug!(path = %path.display(), "Parsing range message");
    let xml = read_bounded(path, MAX_XML_SIZE)?;
    parse_range_message(&xml)
}

/// Read a cached table.
///
/// The cache is bounded by the same limit as the registry document.
pub fn read_cache(path: &Path) -> Result<RangeTable> {
    let data = read_bounded(path, MAX_XML_SIZE)?;
    Ok(serde_json::from_str(&data)?)
}

/// Whether the registry document was modified after the cache was written.
///
/// A missing document or unavailable timestamps count as fresh.
fn cache_is_stale(cache: &Path, message: &Path) -> bool {
    let modified = |path: &Path| fs::metadata(path).and_then(|m| m.modified()).ok();
    match (modified(cache), modified(message)) {
        (Some(cached), Some(published)) => published > cached,
        _ => false,
    }
}

/// Write `table` to the cache at `path`.
///
/// The table is written to a temporary file next to `path` and renamed
/// into place, so readers never see a partial cache.
pub fn write_cache(path: &Path, table: &RangeTable) -> Result<()> {
    let data = serde_json::to_string(table)?;
    let temp_file = path.with_extension("data.tmp");

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(data.as_bytes())?;
        file.sync_all()?;
    }

    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_file, path)?;
    tracing::info!(path = %path.display(), prefixes = table.len(), "Wrote range cache");
    Ok(())
}

/// Load the range table stored in `dir`.
///
/// # Errors
///
/// `MissingRangeMessage` when the registry document is needed but absent,
/// plus any parse or IO error. Under [`CachePolicy::Use`] an unreadable
/// cache, or one older than the registry document, is rebuilt from the
/// registry document instead.
pub fn load_table(dir: &Path, policy: CachePolicy) -> Result<RangeTable> {
    let cache = cache_path(dir);
    let message_path = range_message_path(dir);

    if policy == CachePolicy::Use && cache.exists() {
        if cache_is_stale(&cache, &message_path) {
            tracing::info!(path = %cache.display(), "Range message is newer than cache, rebuilding");
        } else {
            match read_cache(&cache) {
                Ok(table) => {
                    tracing::debug!(path = %cache.display(), prefixes = table.len(), "Loaded range cache");
                    return Ok(table);
                }
                Err(e) => {
                    tracing::warn!(path = %cache.display(), error = %e, "Ignoring unreadable range cache");
                }
            }
        }
    }

    let message = load_range_message(&message_path)?;

    if policy != CachePolicy::Bypass {
        write_cache(&cache, &message.table)?;
    }

    Ok(message.table)
}

/// Rebuild the cache in `dir` from its registry document.
pub fn refresh_cache(dir: &Path) -> Result<RangeMessage> {
    let message = load_range_message(&range_message_path(dir))?;
    write_cache(&cache_path(dir), &message.table)?;
    Ok(message)
}
