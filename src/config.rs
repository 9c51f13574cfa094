//! Engine configuration.
//!
//! The only knob is the ceiling on the number of inputs for truth table
//! generation. Both [`generate`][crate::table::generate] and callers that
//! want a pre-flight check go through [`EngineConfig::check_table_inputs`],
//! so the engine and the UI agree on the limit.

use log::debug;
use num_bigint::BigUint;

use crate::error::GraphError;
use crate::validate::ValidatedGraph;

/// Default ceiling on truth table inputs: `2^10 = 1024` rows.
pub const DEFAULT_MAX_TABLE_INPUTS: usize = 10;

/// Largest ceiling a configuration may request: `2^20` rows.
pub const HARD_MAX_TABLE_INPUTS: usize = 20;

/// Number of rows in a truth table over `inputs` inputs, `2^inputs`.
///
/// Exact for any input count, so over-limit requests can still report their size.
pub fn table_rows(inputs: usize) -> BigUint {
    BigUint::from(1u8) << inputs
}

/// Configuration options for the evaluation engine.
///
/// # Examples
///
/// ```
/// use logic_sim::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.max_table_inputs, 10);
///
/// let config = EngineConfig::default().with_max_table_inputs(4);
/// assert_eq!(config.max_table_inputs, 4);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EngineConfig {
    /// Truth tables are refused for circuits with more inputs than this
    /// (default: [`DEFAULT_MAX_TABLE_INPUTS`]).
    pub max_table_inputs: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_table_inputs: DEFAULT_MAX_TABLE_INPUTS,
        }
    }
}

impl EngineConfig {
    /// Sets the truth table input ceiling.
    ///
    /// # Panics
    ///
    /// Panics if `max_inputs > HARD_MAX_TABLE_INPUTS`.
    pub fn with_max_table_inputs(self, max_inputs: usize) -> Self {
        assert!(
            max_inputs <= HARD_MAX_TABLE_INPUTS,
            "Table input ceiling should be in the range 0..={}",
            HARD_MAX_TABLE_INPUTS
        );
        Self {
            max_table_inputs: max_inputs,
        }
    }

    /// Effective ceiling: the configured one, clamped to the hard cap.
    pub fn table_input_limit(&self) -> usize {
        self.max_table_inputs.min(HARD_MAX_TABLE_INPUTS)
    }

    /// Checks whether a truth table may be generated for `graph`.
    pub fn check_table_inputs(&self, graph: &ValidatedGraph) -> Result<(), GraphError> {
        let inputs = graph.num_inputs();
        let limit = self.table_input_limit();
        if inputs > limit {
            debug!(
                "check_table_inputs: refusing {} rows ({} inputs > {})",
                graph.num_assignments(),
                inputs,
                limit
            );
            return Err(GraphError::TooManyInputs { inputs, limit });
        }
        Ok(())
    }
}
