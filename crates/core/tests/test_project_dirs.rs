//! Tests for project directory computation

use basedirs_core::{
    ApplicationIdentity, DirsError, KnownFolder, MemoryEnvironment, Platform, ProjectDirectories,
};

fn identity(qualifier: &str, organization: &str, application: &str) -> ApplicationIdentity {
    ApplicationIdentity::new(qualifier, organization, application)
}

/// Test the macOS end-to-end scenario
#[test]
fn test_macos_from_identity() {
    let env = MemoryEnvironment::new().with_home("/Users/Alice");
    let dirs =
        ProjectDirectories::compute(Platform::MacOs, &env, &identity("com", "Foo Corp", "Bar App"))
            .unwrap();

    assert_eq!(dirs.project_path, "com.Foo-Corp.Bar-App");
    assert_eq!(
        dirs.cache_dir.as_deref(),
        Some("/Users/Alice/Library/Caches/com.Foo-Corp.Bar-App")
    );
    assert_eq!(
        dirs.config_dir.as_deref(),
        Some("/Users/Alice/Library/Application Support/com.Foo-Corp.Bar-App")
    );
    assert_eq!(dirs.data_dir, dirs.config_dir);
    assert_eq!(dirs.data_local_dir, dirs.data_dir);
    assert_eq!(
        dirs.preference_dir.as_deref(),
        Some("/Users/Alice/Library/Preferences/com.Foo-Corp.Bar-App")
    );
    assert_eq!(dirs.runtime_dir, None);
}

/// Test Linux defaults with the sanitized application name
#[test]
fn test_linux_from_identity() {
    let env = MemoryEnvironment::new().with_home("/home/alice");
    let dirs =
        ProjectDirectories::compute(Platform::Linux, &env, &identity("com", "Foo Corp", "Bar App"))
            .unwrap();

    assert_eq!(dirs.project_path, "barapp");
    assert_eq!(dirs.cache_dir.as_deref(), Some("/home/alice/.cache/barapp"));
    assert_eq!(dirs.config_dir.as_deref(), Some("/home/alice/.config/barapp"));
    assert_eq!(
        dirs.data_dir.as_deref(),
        Some("/home/alice/.local/share/barapp")
    );
    assert_eq!(dirs.data_local_dir, dirs.data_dir);
    assert_eq!(dirs.preference_dir, dirs.config_dir);
    assert_eq!(dirs.runtime_dir, None);
}

/// Test Linux overrides get the fragment appended
#[test]
fn test_linux_overrides_with_fragment() {
    let env = MemoryEnvironment::new()
        .with_home("/home/alice")
        .with_var("XDG_CACHE_HOME", "/tmp/cache")
        .with_var("XDG_CONFIG_HOME", "/tmp/config/")
        .with_var("XDG_DATA_HOME", "/tmp/data")
        .with_var("XDG_RUNTIME_DIR", "/run/user/1000");
    let dirs = ProjectDirectories::compute_from_path(Platform::Linux, &env, "my-app").unwrap();

    assert_eq!(dirs.cache_dir.as_deref(), Some("/tmp/cache/my-app"));
    assert_eq!(dirs.config_dir.as_deref(), Some("/tmp/config/my-app"));
    assert_eq!(dirs.data_dir.as_deref(), Some("/tmp/data/my-app"));
    assert_eq!(dirs.runtime_dir.as_deref(), Some("/run/user/1000/my-app"));
}

/// Test raw paths are used verbatim, even with uppercase and spaces
#[test]
fn test_from_path_is_verbatim() {
    let env = MemoryEnvironment::new().with_home("/home/alice");
    let dirs = ProjectDirectories::compute_from_path(Platform::Linux, &env, "My App").unwrap();
    assert_eq!(dirs.project_path, "My App");
    assert_eq!(dirs.cache_dir.as_deref(), Some("/home/alice/.cache/My App"));
}

/// Test Windows appends fixed leaves under roaming and local roots
#[test]
fn test_windows_from_identity() {
    let env = MemoryEnvironment::new()
        .with_known_folder(KnownFolder::RoamingAppData, "C:\\Users\\Alice\\AppData\\Roaming")
        .with_known_folder(KnownFolder::LocalAppData, "C:\\Users\\Alice\\AppData\\Local");
    let dirs = ProjectDirectories::compute(
        Platform::Windows,
        &env,
        &identity("com", "Foo Corp", "Bar App"),
    )
    .unwrap();

    assert_eq!(dirs.project_path, "Foo Corp\\Bar App");
    assert_eq!(
        dirs.config_dir.as_deref(),
        Some("C:\\Users\\Alice\\AppData\\Roaming\\Foo Corp\\Bar App\\config")
    );
    assert_eq!(
        dirs.data_dir.as_deref(),
        Some("C:\\Users\\Alice\\AppData\\Roaming\\Foo Corp\\Bar App\\data")
    );
    assert_eq!(
        dirs.cache_dir.as_deref(),
        Some("C:\\Users\\Alice\\AppData\\Local\\Foo Corp\\Bar App\\cache")
    );
    assert_eq!(
        dirs.data_local_dir.as_deref(),
        Some("C:\\Users\\Alice\\AppData\\Local\\Foo Corp\\Bar App\\data")
    );
    assert_eq!(dirs.preference_dir, dirs.config_dir);
    assert_eq!(dirs.runtime_dir, None);
}

/// Test an empty identity is rejected on every platform
#[test]
fn test_empty_identity_rejected() {
    let env = MemoryEnvironment::new().with_home("/home/alice");
    for platform in [Platform::Linux, Platform::MacOs, Platform::Windows] {
        let err = ProjectDirectories::compute(platform, &env, &identity("", "", "")).unwrap_err();
        assert_eq!(err, DirsError::InvalidIdentity);
    }
}

/// Test the project path is always present
#[test]
fn test_project_path_always_present() {
    let env = MemoryEnvironment::new().with_home("/home/alice");
    for platform in [Platform::Linux, Platform::MacOs, Platform::Windows] {
        let dirs =
            ProjectDirectories::compute(platform, &env, &identity("org", "Acme", "Rocket")).unwrap();
        assert!(!dirs.project_path.is_empty());
    }
}

/// Test missing home is fatal on XDG platforms
#[test]
fn test_missing_home() {
    let env = MemoryEnvironment::new();
    let err = ProjectDirectories::compute_from_path(Platform::Linux, &env, "app").unwrap_err();
    assert_eq!(err, DirsError::NoHomeDir);
}
