//! License applied to the draft's media.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LicenseStore {
    pub license: Option<String>,
}
