use match_error::Result;
use profile_filter::ProfileMap;

/// Seam over the external profile store.
///
/// Implementations hand back a point-in-time snapshot of every profile the
/// owning user chose to display publicly; the core never writes back
/// through this interface.
pub trait ProfileSource {
    fn all_public_profiles(&self) -> Result<ProfileMap>;
}

impl ProfileSource for ProfileMap {
    fn all_public_profiles(&self) -> Result<ProfileMap> {
        Ok(self.clone())
    }
}
