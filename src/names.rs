//! Derived AWS resource names

/// S3 bucket names must be 3-63 chars, lowercase alphanumeric and hyphens.
const BUCKET_NAME_MAX: usize = 63;

/// Derive the env-var storage bucket name from the app name.
///
/// The same app name always derives the same bucket name, so repeat builds
/// of one app keep pointing at one bucket.
pub fn env_bucket(app_name: &str) -> String {
    let slug: String = app_name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let slug = slug.trim_matches('-');

    let mut bucket = format!("ebstage-{slug}-env");
    if bucket.len() > BUCKET_NAME_MAX {
        bucket.truncate(BUCKET_NAME_MAX);
        let trimmed = bucket.trim_end_matches('-').len();
        bucket.truncate(trimmed);
    }
    bucket
}
