use std::io;
use std::path::PathBuf;

use plater::error::Error;

#[test]
fn test_error_display_carries_path() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let err = Error::DestinationUnwritable { path: PathBuf::from("/out/Foo.swift"), source: io_err };
    assert_eq!(err.to_string(), "Cannot write '/out/Foo.swift': permission denied.");

    let err = Error::TemplateNotFound { template_dir: "/missing".to_string() };
    assert_eq!(err.to_string(), "Template directory does not exist: '/missing'.");
}

#[test]
fn test_error_helpers_attach_path() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    match Error::unreadable(PathBuf::from("/tpl/file"))(io_err) {
        Error::SourceUnreadable { path, .. } => assert_eq!(path, PathBuf::from("/tpl/file")),
        _ => panic!("Expected SourceUnreadable variant"),
    }
}
