//! Volume name matching against mounted disks.

/// Canonical form used to compare volume names.
///
/// Case-insensitive, with trailing separators dropped (`"C:\"` == `"c:"`).
/// A bare root (`"/"`) stays as is.
pub fn volume_key(volume: &str) -> String {
    let trimmed = volume.trim();
    let stripped = trimmed.trim_end_matches(['\\', '/']);
    if stripped.is_empty() && !trimmed.is_empty() {
        return "/".to_string();
    }
    stripped.to_ascii_lowercase()
}

/// Free bytes of the mount matching `volume`, if any.
pub fn free_space_for<I>(mounts: I, volume: &str) -> Option<u64>
where
    I: IntoIterator<Item = (String, u64)>,
{
    let wanted = volume_key(volume);
    if wanted.is_empty() {
        return None;
    }
    mounts
        .into_iter()
        .find(|(mount, _)| volume_key(mount) == wanted)
        .map(|(_, free)| free)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_key() {
        assert_eq!(volume_key("C:"), "c:");
        assert_eq!(volume_key("C:\\"), "c:");
        assert_eq!(volume_key("/"), "/");
        assert_eq!(volume_key("/mnt/data/"), "/mnt/data");
        assert_eq!(volume_key("  "), "");
    }

    #[test]
    fn test_free_space_for_matches_windows_mount() {
        let mounts = vec![
            ("C:\\".to_string(), 50),
            ("D:\\".to_string(), 10),
        ];
        assert_eq!(free_space_for(mounts.clone(), "d:"), Some(10));
        assert_eq!(free_space_for(mounts, "E:"), None);
    }

    #[test]
    fn test_free_space_for_empty_volume() {
        let mounts = vec![("/".to_string(), 1)];
        assert_eq!(free_space_for(mounts, ""), None);
    }
}
