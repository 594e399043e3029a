use serde::{Deserialize, Serialize};

use super::mac_address::MacAddress;

/// Top-level object of the JSON output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacAddressDocument {
    #[serde(rename = "macAddress")]
    pub mac_address: Vec<MacAddress>,
}
