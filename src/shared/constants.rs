/// Name shown in the browser UI
pub const APP_TITLE: &str = "Civic Issue Reporter";

/// Maximum accepted request body for report submission, in megabytes
pub const MAX_UPLOAD_SIZE_MB: usize = 5;

/// Maximum accepted request body for report submission, in bytes
pub const MAX_UPLOAD_SIZE: usize = MAX_UPLOAD_SIZE_MB * 1024 * 1024;

/// Photo extensions accepted on upload (compared case-insensitively)
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Location stored when the reporter leaves the field blank
pub const DEFAULT_LOCATION: &str = "Not specified";

/// URL path under which uploaded photos are served
pub const UPLOADS_URL_PATH: &str = "/static/uploads";

/// Longest accepted issue type, in characters
pub const MAX_ISSUE_TYPE_LENGTH: usize = 100;

/// Longest accepted location, in characters
pub const MAX_LOCATION_LENGTH: usize = 200;

/// Issue types offered by the submission form. The API accepts any non-empty type.
pub const SUGGESTED_ISSUE_TYPES: &[&str] = &[
    "Garbage Dumping",
    "Broken Streetlight",
    "Wrong Parking",
    "Public Spitting",
];
