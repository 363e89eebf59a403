//! Mirror of the export directory into the client directory
//!
//! Every model file of the source is copied over unless the target already
//! counts as synced under the chosen [`SyncCheck`]. Case variants such as
//! `oak.glb` and `OAK.glb` are distinct files here and are both copied.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::entities::ExistingAssets;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{ModelFormat, SyncCheck};
use crate::error::{GroveError, GroveResult};

/// What a mirror pass did (or would do, in a dry run)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MirrorOutcome {
    pub target_dir: PathBuf,
    /// File names copied into the target
    pub mirrored: Vec<String>,
    /// File names skipped as already synced
    pub already_synced: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorOptions {
    pub format: ModelFormat,
    pub check: SyncCheck,
    pub dry_run: bool,
}

impl MirrorOptions {
    pub fn new(format: ModelFormat, check: SyncCheck) -> Self {
        Self {
            format,
            check,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// A model that is not on disk yet: a dry-run fill would have created
/// `file_name` in the source directory as a copy of `copy_of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingModel<'a> {
    pub file_name: &'a str,
    pub copy_of: &'a str,
}

/// Copy every model file of `from` into `to`.
///
/// `pending` entries that are missing from `from` are mirrored as if they
/// already held the bytes of their `copy_of` file.
pub fn mirror_models<FS: FileSystem>(
    fs: &FS,
    from: &Path,
    to: &Path,
    options: &MirrorOptions,
    pending: &[PendingModel<'_>],
) -> GroveResult<MirrorOutcome> {
    if !fs.is_dir(from) {
        return Err(GroveError::DirectoryNotFound {
            path: from.to_path_buf(),
        });
    }

    let names = fs.list_file_names(from)?;
    let models = ExistingAssets::from_file_names(&names, options.format);

    // file name -> file whose bytes it carries
    let mut sources: BTreeMap<&str, PathBuf> = models
        .file_names()
        .map(|name| (name, from.join(name)))
        .collect();
    for model in pending {
        sources
            .entry(model.file_name)
            .or_insert_with(|| from.join(model.copy_of));
    }

    if !options.dry_run {
        fs.create_dir_all(to)?;
    }

    let mut outcome = MirrorOutcome {
        target_dir: to.to_path_buf(),
        ..Default::default()
    };

    for (name, source) in sources {
        let target = to.join(name);

        if is_synced(fs, &source, &target, options.check)? {
            outcome.already_synced.push(name.to_string());
            continue;
        }

        if !options.dry_run {
            fs.copy(&source, &target).map_err(|e| GroveError::Copy {
                from: source.clone(),
                to: target.clone(),
                source: e.into(),
            })?;
        }
        outcome.mirrored.push(name.to_string());
    }

    Ok(outcome)
}

fn is_synced<FS: FileSystem>(
    fs: &FS,
    source: &Path,
    target: &Path,
    check: SyncCheck,
) -> GroveResult<bool> {
    if !fs.exists(target) {
        return Ok(false);
    }
    if fs.file_size(source)? != fs.file_size(target)? {
        return Ok(false);
    }
    Ok(match check {
        SyncCheck::Size => true,
        SyncCheck::Content => fs.hash(source)? == fs.hash(target)?,
    })
}
