use crate::constants::{CONFIG_ATTR_PREFIX, IMAGES_ATTR, STICKERS_ATTR};
use crate::style::split_list;
use decoy_core::{Catalogs, ImageCatalog, SessionConfig, OVERRIDE_KEYS};
use web_sys as web;

/// Startup configuration from the container's `data-*` attributes. Bad
/// overrides are logged and skipped; a config that fails validation falls
/// back to the defaults.
pub fn read_config(container: &web::Element) -> SessionConfig {
    let pairs: Vec<(&str, String)> = OVERRIDE_KEYS
        .iter()
        .filter_map(|key| {
            container
                .get_attribute(&format!("{CONFIG_ATTR_PREFIX}{key}"))
                .map(|v| (*key, v))
        })
        .collect();
    let mut config = SessionConfig::default();
    let errors = config.apply_overrides(pairs.iter().map(|(k, v)| (*k, v.as_str())));
    for e in &errors {
        log::warn!("[config] {}", e);
    }
    match config.validate() {
        Ok(()) => {
            if !pairs.is_empty() {
                log::info!("[config] applied {} overrides", pairs.len() - errors.len());
            }
            config
        }
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            SessionConfig::default()
        }
    }
}

pub fn read_catalogs(container: &web::Element) -> Catalogs {
    let mut catalogs = Catalogs::default();
    if let Some(raw) = container.get_attribute(IMAGES_ATTR) {
        catalogs.images = ImageCatalog::new(split_list(&raw));
    }
    if let Some(raw) = container.get_attribute(STICKERS_ATTR) {
        catalogs.stickers = split_list(&raw);
    }
    if catalogs.images.is_empty() {
        log::info!("[config] no popup images, vanishes will show phrases");
    }
    catalogs
}
