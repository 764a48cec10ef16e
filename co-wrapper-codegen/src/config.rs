//! Generator configuration.

/// Knobs of a generator run.
///
/// The command-line driver always runs with [`GeneratorConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Tool name written into the generation notice of the header.
    pub generator_name: String,
    /// Compare each wrapper with its `coroutine_fn` declaration when the
    /// input contains one.
    pub cross_check: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generator_name: "co-wrapper".to_owned(),
            cross_check: true,
        }
    }
}
