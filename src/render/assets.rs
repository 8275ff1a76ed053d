//! Asset extraction with stable, collision-free naming.

use std::collections::HashSet;

use regex::Regex;

use crate::error::Warning;
use crate::model::{extension_for_mime, ExportedAsset, ImageRef};

/// Collects binary assets over one conversion call.
///
/// Names depend only on walk order and the image references themselves,
/// so repeated exports of an unchanged document produce byte-identical
/// names. A sanitized name hint wins when the source supplies one;
/// otherwise a document-scoped sequence number names the asset.
pub(crate) struct AssetCollector {
    assets: Vec<ExportedAsset>,
    used_names: HashSet<String>,
    seq: u32,
}

impl AssetCollector {
    pub fn new() -> Self {
        Self {
            assets: Vec::new(),
            used_names: HashSet::new(),
            seq: 0,
        }
    }

    /// Reserve a unique rendered name for the image and capture its
    /// payload.
    ///
    /// Always returns the name so a Markdown reference can be emitted.
    /// A missing payload produces no asset, only a warning; the name
    /// stays reserved so later images cannot take it over.
    pub fn collect(&mut self, image: &ImageRef, warnings: &mut Vec<Warning>) -> String {
        let mime = image.effective_mime_type();
        let extension = mime
            .as_deref()
            .map(extension_for_mime)
            .unwrap_or("bin");
        let name = self.unique_name(image, extension);

        match image.data {
            Some(ref data) => {
                let mime = mime.unwrap_or_else(|| "application/octet-stream".to_string());
                log::debug!("extracted asset {} ({} bytes)", name, data.len());
                self.assets
                    .push(ExportedAsset::new(name.clone(), data.clone(), mime));
            }
            None => {
                log::warn!(
                    "asset payload unavailable for {}, emitting reference to {}",
                    image.source_id,
                    name
                );
                warnings.push(Warning::AssetUnavailable {
                    source_id: image.source_id.clone(),
                    name: name.clone(),
                });
            }
        }

        name
    }

    /// All assets captured so far, in walk order.
    pub fn into_assets(self) -> Vec<ExportedAsset> {
        self.assets
    }

    fn unique_name(&mut self, image: &ImageRef, extension: &str) -> String {
        let base = match image.name_hint {
            Some(ref hint) if !hint.trim().is_empty() => {
                let sanitized = sanitize_name(hint);
                if has_extension(&sanitized) {
                    sanitized
                } else {
                    format!("{}.{}", sanitized, extension)
                }
            }
            _ => {
                self.seq += 1;
                format!("image_{:03}.{}", self.seq, extension)
            }
        };

        let name = self.deduplicate(base);
        self.used_names.insert(name.clone());
        name
    }

    /// Append `_2`, `_3`, ... before the extension until the name is
    /// unique within this export call.
    fn deduplicate(&self, base: String) -> String {
        if !self.used_names.contains(&base) {
            return base;
        }

        let (stem, extension) = split_name(&base);
        let mut counter = 2;
        loop {
            let candidate = if extension.is_empty() {
                format!("{}_{}", stem, counter)
            } else {
                format!("{}_{}.{}", stem, counter, extension)
            };
            if !self.used_names.contains(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}

/// Replace every path-hostile character run with a single underscore.
fn sanitize_name(hint: &str) -> String {
    let pattern = Regex::new(r"[^A-Za-z0-9._-]+").unwrap();
    pattern.replace_all(hint.trim(), "_").into_owned()
}

fn has_extension(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((stem, ext)) => !stem.is_empty() && !ext.is_empty(),
        None => false,
    }
}

fn split_name(name: &str) -> (&str, &str) {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, ext),
        _ => (name, ""),
    }
}
