use apicrud::error::ApicrudError;
use apicrud::exists::{file_exists, migration_exists, route_declared};
use tempfile::TempDir;

#[test]
fn test_file_exists() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("PostController.php");

    assert!(!file_exists(&path));
    std::fs::write(&path, "<?php").unwrap();
    assert!(file_exists(&path));

    // Directories do not count as files
    assert!(!file_exists(temp_dir.path()));
}

#[test]
fn test_migration_exists_matches_by_substring() {
    let temp_dir = TempDir::new().unwrap();
    let migrations_dir = temp_dir.path().join("database/migrations");
    std::fs::create_dir_all(&migrations_dir).unwrap();
    std::fs::write(
        migrations_dir.join("2024_01_01_000000_create_posts_table.php"),
        "<?php",
    )
    .unwrap();

    assert!(migration_exists(&migrations_dir, "create_posts_table"));
    assert!(!migration_exists(&migrations_dir, "create_comments_table"));
}

#[test]
fn test_migration_exists_on_missing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does/not/exist");

    assert!(!migration_exists(&missing, "create_posts_table"));
}

#[test]
fn test_route_declared() {
    let temp_dir = TempDir::new().unwrap();
    let routes_file = temp_dir.path().join("api.php");
    std::fs::write(
        &routes_file,
        "<?php\n\nRoute::apiResource('posts', PostController::class)->names('posts');\n",
    )
    .unwrap();

    assert!(route_declared(&routes_file, "posts").unwrap());
    assert!(!route_declared(&routes_file, "comments").unwrap());
}

#[test]
fn test_route_declared_errors_on_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let routes_file = temp_dir.path().join("api.php");

    match route_declared(&routes_file, "posts") {
        Err(ApicrudError::RoutesError(_)) => (),
        other => panic!("Expected RoutesError, got {:?}", other),
    }
}
