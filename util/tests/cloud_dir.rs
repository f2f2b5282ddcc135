use std::env;

use extkit_util::path::{cloud_documents_dir, try_cloud_documents_dir, CLOUD_CONTAINER_ENV};

// Single test in this binary, so nothing else observes the environment changes.
#[test]
fn cloud_documents_dir_from_env() -> anyhow::Result<()> {
    let tmpdir = tempfile::tempdir()?;

    env::set_var(CLOUD_CONTAINER_ENV, tmpdir.path());
    assert_eq!(try_cloud_documents_dir()?, tmpdir.path().join("Documents"));
    assert_eq!(cloud_documents_dir(), tmpdir.path().join("Documents"));

    // Empty counts as unset
    env::set_var(CLOUD_CONTAINER_ENV, "");
    #[cfg(not(target_os = "macos"))]
    {
        assert!(try_cloud_documents_dir().is_err());
        assert!(std::panic::catch_unwind(cloud_documents_dir).is_err());
    }

    env::remove_var(CLOUD_CONTAINER_ENV);
    Ok(())
}
