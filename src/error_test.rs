use super::*;

#[test]
fn setup_error_messages() {
    assert_eq!(SetupError::ReducedMotion.to_string(), "reduced motion requested");
    assert_eq!(SetupError::MissingElement("#particles-canvas".to_owned()).to_string(), "missing element: #particles-canvas");
    assert_eq!(SetupError::ContextUnavailable.to_string(), "2d drawing context unavailable");
    assert_eq!(SetupError::NoWindow.to_string(), "no browser window");
    assert_eq!(SetupError::Js("TypeError".to_owned()).to_string(), "browser call failed: TypeError");
}

#[test]
fn storage_error_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(StorageError::Write("QuotaExceededError".to_owned()).to_string(), "storage write failed: QuotaExceededError");
}
