use serde::{Serialize, Deserialize};
use crate::errors::{NetworkError, Result};

/// Topology and hyperparameters of a training run.
///
/// Fields:
/// - `input_neurons`  — width of each feature row
/// - `output_neurons` — number of classes (width of each one-hot label row)
/// - `hidden_neurons` — width of the single hidden layer
/// - `epochs`         — number of full-batch passes over the training data
/// - `learning_rate`  — multiplier applied to every gradient before it is
///                      added to the parameters
/// - `seed`           — optional RNG seed for parameter initialization; when
///                      absent the RNG is seeded from the OS
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub input_neurons: usize,
    pub output_neurons: usize,
    pub hidden_neurons: usize,
    pub epochs: usize,
    pub learning_rate: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            input_neurons: 4,
            output_neurons: 3,
            hidden_neurons: 4,
            epochs: 1000,
            learning_rate: 0.01,
            seed: None,
        }
    }
}

impl Settings {
    /// Checks that every size and the epoch count are positive and that the
    /// learning rate is a positive finite number.
    pub fn validate(&self) -> Result<()> {
        let counts = [
            ("input_neurons", self.input_neurons),
            ("output_neurons", self.output_neurons),
            ("hidden_neurons", self.hidden_neurons),
            ("epochs", self.epochs),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(NetworkError::InvalidSettings {
                    message: format!("{} must be at least 1", name),
                });
            }
        }

        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(NetworkError::InvalidSettings {
                message: format!("learning_rate must be positive, got {}", self.learning_rate),
            });
        }

        Ok(())
    }

    /// Serializes the settings to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes settings from a JSON file and validates them.
    pub fn load_json(path: &str) -> Result<Settings> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let settings: Settings = serde_json::from_reader(reader)?;
        settings.validate()?;
        Ok(settings)
    }
}
