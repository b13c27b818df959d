use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Which collection a login authenticates against, and which endpoints
/// the resulting token may use.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Teacher,
    Admin,
}
