//! Override-or-default path resolution
//!
//! Every XDG-style field is either taken from an environment override or
//! derived by joining a suffix onto a base directory. Joins always leave
//! exactly one `/` between the two halves.

/// Treat unset and empty values alike.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Join two path pieces with exactly one `/` between them.
pub fn join_single_slash(base: &str, suffix: &str) -> String {
    match (base.ends_with('/'), suffix.starts_with('/')) {
        (true, true) => format!("{}{}", &base[..base.len() - 1], suffix),
        (false, false) => format!("{}/{}", base, suffix),
        _ => format!("{}{}", base, suffix),
    }
}

/// Return `value` when set, otherwise `fallback` joined with `fallback_suffix`.
pub fn resolve(value: Option<&str>, fallback: &str, fallback_suffix: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => join_single_slash(fallback, fallback_suffix),
    }
}

/// Like [`resolve`], but a set `value` also gets `value_suffix` appended.
pub fn resolve_extended(
    value: Option<&str>,
    value_suffix: &str,
    fallback: &str,
    fallback_suffix: &str,
) -> String {
    match value {
        Some(v) if !v.is_empty() => join_single_slash(v, value_suffix),
        _ => join_single_slash(fallback, fallback_suffix),
    }
}

/// `$XDG_RUNTIME_DIR`, optionally with a project fragment appended.
///
/// There is no fallback: an unset runtime directory stays absent.
pub fn runtime_dir(xdg_runtime_dir: Option<&str>, fragment: Option<&str>) -> Option<String> {
    let dir = xdg_runtime_dir.filter(|d| !d.is_empty())?;
    Some(match fragment {
        Some(fragment) => join_single_slash(dir, fragment),
        None => dir.to_string(),
    })
}

/// Executable directory: `$XDG_BIN_HOME`, then `$XDG_DATA_HOME/../bin`,
/// then `~/.local/bin`.
pub fn executable_dir(
    xdg_bin_home: Option<&str>,
    xdg_data_home: Option<&str>,
    home_dir: &str,
) -> String {
    match xdg_bin_home {
        Some(bin) if !bin.is_empty() => bin.to_string(),
        _ => resolve_extended(xdg_data_home, "/../bin", home_dir, "/.local/bin"),
    }
}
