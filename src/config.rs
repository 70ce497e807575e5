use clap::Parser;
use std::collections::HashMap;
use std::str::FromStr;

/// Command-line arguments parser for converting labelImg XML to YOLO format.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Comma-delimited class list, either bare names ("cat,dog") whose
    /// 0-based position becomes the class id, or explicit "name:id" pairs
    /// ("cat:0,dog:3")
    pub classes: String,

    /// Directory containing movie<M>/frame<FFF|FFFF>.{xml,jpg} pairs
    #[arg(short = 's', long = "source", default_value = "source")]
    pub source: String,

    /// Root directory for the converted output
    #[arg(short = 'd', long = "destination", default_value = "destination")]
    pub destination: String,

    /// Subdirectory under the destination for the generated files
    #[arg(short = 'b', long = "subdir", default_value = "data")]
    pub subdir: String,

    /// Filename prefix for the generated annotation files
    #[arg(short = 'e', long = "header", default_value = "sample")]
    pub header: String,

    /// Fraction of the dataset assigned to the test split
    #[arg(short = 'p', long = "percentage_test", default_value_t = 0.1, value_parser = validate_percentage)]
    pub percentage_test: f64,

    /// Seed for the random split assignment
    #[arg(long = "seed", default_value_t = 42)]
    pub seed: u64,
}

// Validate that the test percentage is strictly between 0.0 and 1.0
pub fn validate_percentage(s: &str) -> Result<f64, String> {
    match f64::from_str(s) {
        Ok(val) if val > 0.0 && val < 1.0 => Ok(val),
        _ => Err("PERCENTAGE must be between 0.0 and 1.0 exclusive".to_string()),
    }
}

/// Mapping from class name to class id, built once from the positional
/// `classes` argument and read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct ClassMap {
    map: HashMap<String, usize>,
}

impl ClassMap {
    /// Parse a comma-delimited class list. A bare name gets its 0-based
    /// position as id; a "name:id" pair gets the explicit id. Names keep
    /// their spaces.
    pub fn parse(list: &str) -> Result<Self, String> {
        if list.is_empty() {
            return Err("class list is empty".to_string());
        }

        let mut map = HashMap::new();
        for (position, item) in list.split(',').enumerate() {
            let (name, id) = match item.rsplit_once(':') {
                Some((name, id)) => {
                    let id = id
                        .parse::<usize>()
                        .map_err(|_| format!("class id \"{}\" is not an integer", id))?;
                    (name, id)
                }
                None => (item, position),
            };
            if name.is_empty() {
                return Err(format!("empty class name at position {}", position));
            }
            if map.insert(name.to_string(), id).is_some() {
                return Err(format!("duplicate class name \"{}\"", name));
            }
        }

        Ok(Self { map })
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.map.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
