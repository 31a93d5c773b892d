use std::collections::HashMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingConfig {
    #[serde(default)]
    pub speed: SpeedConfig,
    #[serde(default)]
    pub error_limit: ErrorLimitConfig,
    #[serde(default)]
    pub dirty: Option<DirtyConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpeedConfig {
    #[serde(default = "default_channel")]
    pub channel: u32,
    #[serde(default = "default_bytes")]
    pub bytes: i64,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        SpeedConfig {
            channel: default_channel(),
            bytes: default_bytes(),
        }
    }
}

fn default_channel() -> u32 {
    1
}

// -1 means no byte-rate limit
fn default_bytes() -> i64 {
    -1
}

/// Tolerated dirty records before the job is aborted, as an absolute count
/// and a percentage of all records.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ErrorLimitConfig {
    #[serde(default)]
    pub record: i64,
    #[serde(default)]
    pub percentage: f64,
}

/// Where records the writer could not persist are routed instead of failing
/// the whole job.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirtyConfig {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub hadoop_config: HashMap<String, String>,
}
