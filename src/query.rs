// URL query overrides for the scene configuration. Kept free of web-sys so the
// host tests can include it.

pub const KNOWN_KEYS: [&str; 6] = ["particles", "ornaments", "audio", "volume", "muted", "seed"];

/// Apply `key=value` overrides on top of the defaults.
///
/// Malformed values are logged and skipped. If the result does not validate
/// the defaults are used instead.
pub fn config_from_pairs<K, V>(pairs: &[(K, V)]) -> tree_core::SceneConfig
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut config = tree_core::SceneConfig::default();
    for (key, value) in pairs {
        if let Err(e) = config.apply_override(key.as_ref(), value.as_ref()) {
            log::warn!("[config] ignoring {}: {e}", key.as_ref());
        }
    }
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::error!("[config] {e}; using defaults");
            tree_core::SceneConfig::default()
        }
    }
}
