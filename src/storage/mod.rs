//! # Storage
//!
//! Loads and saves the calendar from/to the task file on disk.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod codec;

use std::{
    ffi::OsString,
    fs::{self, File},
    io::{self, BufReader, BufWriter},
    path::{Path, PathBuf},
};

use log::debug;

pub use self::codec::{parse_line, read_calendar, write_calendar, Line};
use crate::{calendar::Calendar, constants::TEMP_FILE_SUFFIX, error::CalendarResult};

/// Loads the calendar stored at `path`.
///
/// A missing file is the "no prior data" case and yields an empty calendar.
/// Other open or read failures are returned as `CalendarError::Io`.
pub fn load(path: &Path) -> CalendarResult<Calendar> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("no task file at {}, starting empty", path.display());
            return Ok(Calendar::new());
        }
        Err(err) => return Err(err.into()),
    };

    read_calendar(BufReader::new(file))
}

/// Saves the calendar to `path`.
///
/// Writes a sibling temporary file first and renames it over `path`, so an
/// interrupted save leaves the previous file intact. Missing parent
/// directories are created.
pub fn save(path: &Path, calendar: &Calendar) -> CalendarResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(path);
    let result = File::create(&tmp).and_then(|file| {
        let mut writer = BufWriter::new(file);
        write_calendar(calendar, &mut writer)?;
        writer.into_inner().map_err(io::IntoInnerError::into_error)?.sync_all()
    });

    if let Err(err) = result.and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }

    debug!("saved {} years to {}", calendar.len(), path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(TEMP_FILE_SUFFIX);
    PathBuf::from(name)
}
