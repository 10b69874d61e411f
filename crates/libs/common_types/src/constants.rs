/// Route of the gallery document on the HTTP service.
pub const GALLERY_ROUTE: &str = "/gallery";

/// Serverless-function path older front ends still call.
pub const LEGACY_FUNCTION_ROUTE: &str = "/.netlify/functions/gallery";

/// Category filter value that matches every record.
pub const ALL_CATEGORIES: &str = "all";

/// Categories offered by the upload form. The set is open-ended, records may carry others.
pub const KNOWN_CATEGORIES: [&str; 4] = ["saddle-stay", "crash-guard", "carrier-rack", "exhaust"];

/// File name offered for manual backups of the gallery document.
pub const EXPORT_FILE_NAME: &str = "motorcycle-gallery-backup.json";

/// Query parameter appended to every gallery request so no cache layer answers it.
pub const CACHE_BUSTER_PARAM: &str = "t";
