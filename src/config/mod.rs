/*!
Configuration of a context.

All configuration for a context is contained within a [Config], which is fixed when the context is created.
*/

mod retraction;
pub use retraction::Retraction;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// How to retract assignments after a conflict.
    pub retraction: Retraction,

    /// The value given to any atom without a value when the formula is found to be satisfied.
    pub unassigned_value: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            retraction: Retraction::Backjump,
            unassigned_value: false,
        }
    }
}

impl Config {
    /// A default configuration, with the given retraction strategy.
    pub fn with_retraction(retraction: Retraction) -> Self {
        Config {
            retraction,
            ..Config::default()
        }
    }
}
