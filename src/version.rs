/// Supplies the application version shown in the main menu header
#[cfg_attr(test, mockall::automock)]
pub trait VersionProvider {
    /// The version as `major.minor.patch`, or `None` when it cannot be determined
    fn version(&self) -> Option<String>;
}

/// Reads the version Cargo compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct CargoVersionProvider;

impl VersionProvider for CargoVersionProvider {
    fn version(&self) -> Option<String> {
        format_version(env!("CARGO_PKG_VERSION"))
    }
}

/// Normalizes a version string to `major.minor.patch`, dropping pre-release and build tags
pub fn format_version(raw: &str) -> Option<String> {
    let core = raw.split(['-', '+']).next()?;
    let parts: Vec<u64> = core
        .split('.')
        .map(|part| part.parse().ok())
        .collect::<Option<_>>()?;

    match parts.as_slice() {
        [major, minor, patch] => Some(format!("{major}.{minor}.{patch}")),
        [major, minor] => Some(format!("{major}.{minor}.0")),
        _ => None,
    }
}
