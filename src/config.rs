//! Page-derived configuration, built once at startup.

use tracing::Level;

/// Where `beet web` listens when nothing else is known.
const DEFAULT_API_BASE: &str = "http://127.0.0.1:8337/";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Absolute URL every catalog path is resolved against, always ending in `/`.
    pub api_base: String,
    /// Log every media event and controller transition.
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            debug: false,
        }
    }
}

impl AppConfig {
    /// Read the configuration from the current page location.
    #[cfg(target_arch = "wasm32")]
    pub fn from_page() -> Self {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return Self::default();
        };

        let origin = location.origin().unwrap_or_default();
        let pathname = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();

        if origin.is_empty() || origin == "null" {
            return Self {
                debug: debug_requested(&search),
                ..Self::default()
            };
        }

        Self {
            api_base: base_from_location(&origin, &pathname),
            debug: debug_requested(&search),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_page() -> Self {
        Self::default()
    }

    pub fn log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }
}

/// Directory of the page, e.g. `http://host/beets/index.html` -> `http://host/beets/`.
pub fn base_from_location(origin: &str, pathname: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let directory = match pathname.rfind('/') {
        Some(idx) => &pathname[..=idx],
        None => "/",
    };
    if directory.starts_with('/') {
        format!("{origin}{directory}")
    } else {
        format!("{origin}/{directory}")
    }
}

/// `?debug`, `?debug=1` and `?debug=true` switch debug logging on.
pub fn debug_requested(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next()?;
            Some((key, parts.next()))
        })
        .any(|(key, value)| {
            key == "debug"
                && match value {
                    None | Some("") => true,
                    Some(v) => v == "1" || v.eq_ignore_ascii_case("true"),
                }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_is_page_directory() {
        assert_eq!(
            base_from_location("http://localhost:8337", "/"),
            "http://localhost:8337/"
        );
        assert_eq!(
            base_from_location("http://music.lan", "/beets/index.html"),
            "http://music.lan/beets/"
        );
        assert_eq!(
            base_from_location("http://music.lan/", "/beets/"),
            "http://music.lan/beets/"
        );
        assert_eq!(base_from_location("http://music.lan", ""), "http://music.lan/");
    }

    #[test]
    fn debug_switch() {
        assert!(debug_requested("?debug"));
        assert!(debug_requested("?x=2&debug=1"));
        assert!(debug_requested("?debug=TRUE"));
        assert!(!debug_requested("?debug=0"));
        assert!(!debug_requested(""));
        assert!(!debug_requested("?debugger=1"));
    }

    #[test]
    fn log_level_follows_debug() {
        let mut config = AppConfig::default();
        assert_eq!(config.log_level(), Level::INFO);
        config.debug = true;
        assert_eq!(config.log_level(), Level::DEBUG);
    }
}
