//! Bundler directives embedded in dynamic imports.

use compwire_codegen::ast::js_string;
use compwire_core::LoadHint;

/// Format the webpack magic comment for a lazily imported chunk.
///
/// The chunk name is always present; prefetch and preload are only emitted
/// when enabled, with numeric hints passed through as priorities.
pub fn import_magic_comments(
    chunk_name: &str,
    prefetch: Option<LoadHint>,
    preload: Option<LoadHint>,
) -> String {
    let mut directives = vec![format!("webpackChunkName: {}", js_string(chunk_name))];

    if let Some(value) = prefetch.and_then(|h| h.directive_value()) {
        directives.push(format!("webpackPrefetch: {}", value));
    }
    if let Some(value) = preload.and_then(|h| h.directive_value()) {
        directives.push(format!("webpackPreload: {}", value));
    }

    directives.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_name_only() {
        assert_eq!(
            import_magic_comments("components/foo", None, None),
            "webpackChunkName: \"components/foo\""
        );
    }

    #[test]
    fn test_prefetch_true() {
        assert_eq!(
            import_magic_comments("A", Some(LoadHint::Bool(true)), None),
            "webpackChunkName: \"A\", webpackPrefetch: true"
        );
    }

    #[test]
    fn test_prefetch_priority() {
        assert_eq!(
            import_magic_comments("A", Some(LoadHint::Priority(2)), None),
            "webpackChunkName: \"A\", webpackPrefetch: 2"
        );
    }

    #[test]
    fn test_prefetch_false_is_omitted() {
        assert_eq!(
            import_magic_comments("A", Some(LoadHint::Bool(false)), None),
            "webpackChunkName: \"A\""
        );
    }

    #[test]
    fn test_preload_follows_same_rule() {
        assert_eq!(
            import_magic_comments("A", None, Some(LoadHint::Priority(0))),
            "webpackChunkName: \"A\", webpackPreload: 0"
        );
        assert_eq!(
            import_magic_comments("A", None, Some(LoadHint::Bool(false))),
            "webpackChunkName: \"A\""
        );
    }

    #[test]
    fn test_both_hints() {
        assert_eq!(
            import_magic_comments(
                "A",
                Some(LoadHint::Bool(true)),
                Some(LoadHint::Priority(-1))
            ),
            "webpackChunkName: \"A\", webpackPrefetch: true, webpackPreload: -1"
        );
    }
}
