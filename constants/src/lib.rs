pub mod chain;

pub const BUILD_PROFILE: &str = {
    #[cfg(not(feature = "full"))]
    { "tiny" }
    #[cfg(feature = "full")]
    { "full" }
};
