use std::path::Path;

/// Module search patterns rooted at the base directory: flat module files
/// first, then package-style directories with an `init.lua`.
///
/// The base directory is rendered with `Path::display`, so non-UTF-8 path
/// components come out as replacement characters. Lua's loader takes the
/// pattern as a plain string, so a non-UTF-8 base directory cannot be
/// represented faithfully anyway.
pub fn module_search_patterns(base_dir: &Path) -> String {
    let base = base_dir.display();
    format!("{base}/?.lua;{base}/?/init.lua")
}

/// Merge the runtime's existing search configuration with freshly built
/// patterns. Existing entries keep precedence; the new patterns are appended.
pub fn merge_search_paths(existing: Option<&str>, patterns: &str) -> String {
    match existing {
        Some(existing) if !existing.is_empty() => format!("{existing};{patterns}"),
        _ => patterns.to_owned(),
    }
}
