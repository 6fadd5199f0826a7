//! The bundled Alpine.js runtime.
//!
//! The script is compiled into the binary, so serving it needs no CDN and no
//! files on disk.

/// Minified Alpine.js, embedded at compile time.
static ALPINE_MIN_JS: &[u8] = include_bytes!("../assets/alpine.min.js");

/// MIME type to serve [`javascript`] with.
pub const MIME_TYPE: &str = "application/javascript";

/// Conventional URL path for the script.
pub const ASSET_PATH: &str = "/js/alpine.min.js";

/// The embedded Alpine.js source.
///
/// ```
/// let js = alpine_attrs::javascript();
/// assert!(!js.is_empty());
/// ```
pub fn javascript() -> &'static [u8] {
    ALPINE_MIN_JS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_javascript_not_empty() {
        assert!(!javascript().is_empty());
    }

    #[test]
    fn test_javascript_is_alpine() {
        let js = std::str::from_utf8(javascript()).unwrap();
        assert!(js.contains("Alpine"));
    }

    #[test]
    fn test_javascript_is_idempotent() {
        let first = javascript();
        let second = javascript();
        assert_eq!(first.as_ptr(), second.as_ptr());
        assert_eq!(first, second);
    }

    #[test]
    fn test_javascript_is_minified() {
        let js = std::str::from_utf8(javascript()).unwrap();
        assert!(js.lines().count() <= 10);
    }

    #[test]
    fn test_javascript_size_is_sane() {
        assert!(javascript().len() < 256 * 1024);
    }

    #[test]
    fn test_javascript_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| javascript().len()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), javascript().len());
        }
    }
}
