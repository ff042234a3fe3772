#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Skips the version banner at startup.
    pub no_banner: bool,
    /// Verbosity reduction. `0` prints everything, `1` drops headers and
    /// decorations, `2` prints only results and errors.
    pub quiet: u8,
}
