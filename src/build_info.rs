// Kelpie - GPL-3.0-or-later

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PRODUCT_NAME: &str = "Kelpie";

pub const COPYRIGHT_NOTICE: &str = "© 2021-2026+ Kelpie Team. All console names are trademarks \
of their respective owners. Kelpie is not affiliated with any console manufacturer.";

/// Which source revision and branch produced the running binary, and when it
/// was compiled. Populated once from constants the build script embeds; the
/// values never change for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildIdentity {
    pub product_name: String,
    pub branch_name: String,
    pub revision_hash: String,
    /// Tag-relative description shown as the headline revision line
    pub revision_description: String,
    pub build_date: String,
    pub build_time: String,
    pub copyright_notice: String,
}

impl BuildIdentity {
    /// Identity of this binary, from the constants `build.rs` embedded.
    pub fn from_build_env() -> Self {
        Self {
            product_name: PRODUCT_NAME.to_string(),
            branch_name: env!("GIT_BRANCH").to_string(),
            revision_hash: env!("GIT_HASH").to_string(),
            revision_description: env!("GIT_DESCRIBE").to_string(),
            build_date: env!("BUILD_DATE").to_string(),
            build_time: env!("BUILD_TIME").to_string(),
            copyright_notice: COPYRIGHT_NOTICE.to_string(),
        }
    }

    /// The three-line metadata block the About window shows. Fields are not
    /// validated; empty strings render as empty text.
    pub fn metadata_block(&self) -> String {
        let Self {
            branch_name,
            revision_hash,
            build_date,
            build_time,
            ..
        } = self;
        format!(
            "Branch: {branch_name}\nRevision: {revision_hash}\nCompiled: {build_date} @ {build_time}"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(branch: &str, revision: &str, date: &str, time: &str) -> BuildIdentity {
        BuildIdentity {
            product_name: PRODUCT_NAME.to_string(),
            branch_name: branch.to_string(),
            revision_hash: revision.to_string(),
            revision_description: String::new(),
            build_date: date.to_string(),
            build_time: time.to_string(),
            copyright_notice: COPYRIGHT_NOTICE.to_string(),
        }
    }

    #[test]
    fn test_metadata_block_format() {
        let id = identity("master", "abc123", "Jan 1 2015", "00:00:00");
        assert_eq!(
            id.metadata_block(),
            "Branch: master\nRevision: abc123\nCompiled: Jan 1 2015 @ 00:00:00"
        );
    }

    #[test]
    fn test_metadata_block_empty_fields() {
        let id = identity("", "", "", "");
        assert_eq!(id.metadata_block(), "Branch: \nRevision: \nCompiled:  @ ");
    }

    #[test]
    fn test_metadata_block_idempotent() {
        let id = identity("stable", "deadbeef-dirty", "Aug 6 2026", "12:34:56");
        assert_eq!(id.metadata_block(), id.metadata_block());
    }

    #[test]
    fn test_from_build_env_stable() {
        // Build-time constants never change within a process
        assert_eq!(BuildIdentity::from_build_env(), BuildIdentity::from_build_env());
    }
}
