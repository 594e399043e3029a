//! # mac-generator
//!
//! Generate randomized MAC addresses for testing and simulation, and write
//! them to CSV and/or JSON files.
//!
//! ## Features
//!
//! - 🎲 Random 6-octet addresses, colon- or hyphen-delimited
//! - 🌱 Injectable random source for reproducible batches
//! - 📄 CSV (single record) and JSON (`{"macAddress": [...]}`) output
//! - 🛡️ Configuration validated once, before any file is touched
//!
//! ## Example
//!
//! ```rust,no_run
//! use mac_generator::{GeneratorConfig, MacGenerator, Delimiter};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Validate the settings up front
//!     let config = GeneratorConfig::builder()
//!         .count(5)
//!         .hyphen(true)
//!         .output("/tmp/macs")
//!         .format("json,csv")
//!         .build()?;
//!
//!     // Writes /tmp/macs.json and /tmp/macs.csv
//!     let written = mac_generator::run(&config)?;
//!     for path in written {
//!         println!("Wrote {}", path.display());
//!     }
//!
//!     // Or drive the generator directly with a fixed seed
//!     let mut generator = MacGenerator::seeded(42);
//!     for mac in generator.generate(3, Delimiter::Colon) {
//!         println!("{mac}");
//!     }
//!
//!     Ok(())
//! }
//! ```

mod error;
mod generator;
mod models;
pub mod writer;

use std::path::PathBuf;

use log::debug;

pub use error::{MacGenError, MacGenResult};
pub use generator::MacGenerator;
pub use models::config::{GeneratorConfig, GeneratorConfigBuilder, DEFAULT_COUNT};
pub use models::document::MacAddressDocument;
pub use models::format::OutputFormat;
pub use models::mac_address::{Delimiter, MacAddress};

/// Generate the configured addresses and write them out.
///
/// The whole batch is generated in memory before the first file is written.
/// Returns the paths of the files written.
pub fn run(config: &GeneratorConfig) -> MacGenResult<Vec<PathBuf>> {
    let mut generator = match config.seed {
        Some(seed) => {
            debug!("Using fixed seed {seed}");
            MacGenerator::seeded(seed)
        }
        None => MacGenerator::from_time(),
    };

    let addresses = generator.generate(config.count, config.delimiter);
    writer::write(&addresses, &config.output, &config.formats)
}
