//! POSIX path algebra on plain strings
//!
//! Virtual files never touch the disk, so their paths are handled as strings
//! with `/` as the only separator, regardless of the host platform.
//! [`std::path::Path`] is not used here because its notion of extension and
//! parent differs (for example `.dot` has no extension and `index.js` has `.`
//! as its directory).

pub const SEP: char = '/';

/// Last portion of a path, ignoring trailing separators
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEP);
    match trimmed.rfind(SEP) {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}

/// Directory portion of a path
///
/// Returns `.` for a path without separators and `/` for root-level entries.
pub fn dirname(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let bytes = path.as_bytes();
    let has_root = bytes[0] == b'/';
    let mut end = None;
    let mut matched_slash = true;
    for i in (1..bytes.len()).rev() {
        if bytes[i] == b'/' {
            if !matched_slash {
                end = Some(i);
                break;
            }
        } else {
            // saw the first non-separator character
            matched_slash = false;
        }
    }

    match end {
        None if has_root => "/".to_string(),
        None => ".".to_string(),
        Some(1) if has_root => "//".to_string(),
        Some(end) => path[..end].to_string(),
    }
}

/// Extension of the last portion of a path, including the leading dot
///
/// Dotfiles such as `.dot` have no extension.
pub fn extname(path: &str) -> &str {
    let bytes = path.as_bytes();
    let mut start_dot: Option<usize> = None;
    let mut start_part = 0;
    let mut end: Option<usize> = None;
    let mut matched_slash = true;
    // 0: no dot seen yet, 1: dot preceded by a dot, -1: dot preceded by a name
    let mut pre_dot_state = 0;

    for i in (0..bytes.len()).rev() {
        let code = bytes[i];
        if code == b'/' {
            if !matched_slash {
                start_part = i + 1;
                break;
            }
            continue;
        }
        if end.is_none() {
            matched_slash = false;
            end = Some(i + 1);
        }
        if code == b'.' {
            if start_dot.is_none() {
                start_dot = Some(i);
            } else if pre_dot_state != 1 {
                pre_dot_state = 1;
            }
        } else if start_dot.is_some() {
            pre_dot_state = -1;
        }
    }

    match (start_dot, end) {
        (Some(start_dot), Some(end)) => {
            if pre_dot_state == 0
                || (pre_dot_state == 1 && start_dot == end - 1 && start_dot == start_part + 1)
            {
                ""
            } else {
                &path[start_dot..end]
            }
        }
        _ => "",
    }
}

/// Last portion of a path without its extension
pub fn stem(path: &str) -> &str {
    let base = basename(path);
    let ext = extname(path);
    if !ext.is_empty() && base != ext && base.ends_with(ext) {
        &base[..base.len() - ext.len()]
    } else {
        base
    }
}

/// Join segments with the separator and normalize the result
///
/// Empty segments are skipped. Joining nothing gives `.`.
pub fn join(segments: &[&str]) -> String {
    let joined = segments
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/");
    if joined.is_empty() {
        return ".".to_string();
    }
    normalize(&joined)
}

/// Resolve `.` and `..` segments and collapse repeated separators
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let is_absolute = path.starts_with(SEP);
    let trailing_separator = path.ends_with(SEP);

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split(SEP) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(last) if *last != ".." => {
                    segments.pop();
                }
                _ => {
                    if !is_absolute {
                        segments.push("..");
                    }
                }
            },
            s => segments.push(s),
        }
    }

    let mut result = segments.join("/");
    if result.is_empty() && !is_absolute {
        result.push('.');
    }
    if !result.is_empty() && trailing_separator {
        result.push(SEP);
    }
    if is_absolute {
        result.insert(0, SEP);
    }
    result
}
