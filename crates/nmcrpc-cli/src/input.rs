//! Size-limited payload reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::AppError;

/// Reads a payload from `path`, or from `stdin` when no path is given.
///
/// At most `limit + 1` bytes are read so an oversized payload is detected
/// without buffering all of it.
pub(crate) fn read_payload<R: Read>(
    path: Option<&Path>,
    stdin: &mut R,
    limit: u64,
) -> Result<Vec<u8>, AppError> {
    let mut bytes = Vec::new();
    let cap = limit.saturating_add(1);
    let outcome = match path {
        Some(file) => File::open(file).and_then(|handle| handle.take(cap).read_to_end(&mut bytes)),
        None => stdin.by_ref().take(cap).read_to_end(&mut bytes),
    };
    outcome.map_err(|source| AppError::ReadInput {
        path: path.map(Path::to_path_buf),
        source,
    })?;

    let within_limit = u64::try_from(bytes.len()).is_ok_and(|len| len <= limit);
    if within_limit {
        Ok(bytes)
    } else {
        Err(AppError::TooLarge { limit })
    }
}
