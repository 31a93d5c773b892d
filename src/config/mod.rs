mod column;
mod setting;

pub use column::*;
pub use setting::*;

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The parsed job configuration document. Field names on the wire are
/// camelCase, both json and yaml documents are accepted.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataTransferConfig {
    pub job: JobConfig,
    #[serde(default)]
    pub monitor_urls: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JobConfig {
    #[serde(default)]
    pub setting: SettingConfig,
    pub content: Vec<ContentConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContentConfig {
    pub reader: OperatorConf,
    pub writer: OperatorConf,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OperatorConf {
    pub name: String,
    #[serde(default)]
    pub parameter: ParameterConfig,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ParameterConfig {
    #[serde(default)]
    pub column: Option<JobColumnList>,
    #[serde(flatten)]
    pub properties: HashMap<String, Value>,
}

pub fn parse_config(config_path: &str) -> Result<DataTransferConfig, Box<dyn Error>> {
    let content = fs::read_to_string(config_path).map_err(|e| format!("Failed to read config file: {}", e))?;
    let is_json = Path::new(config_path).extension().map(|ext| ext == "json").unwrap_or(false);
    let config = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config() {
        let config_path = "config/job.json";
        let config: DataTransferConfig = parse_config(config_path).unwrap();
        println!("{:#?}", config);
        println!("{}", serde_json::to_string_pretty(&config).unwrap());
        assert_eq!(config.monitor_urls.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.job.setting.error_limit.record, 100);
        assert_eq!(config.job.setting.speed.channel, 3);
        let dirty = config.job.setting.dirty.as_ref().unwrap();
        assert_eq!(dirty.path.as_deref(), Some("/tmp/datasync/dirty"));
        assert_eq!(dirty.hadoop_config.get("fs.defaultFS").unwrap(), "hdfs://ns1");
        let content = &config.job.content[0];
        assert_eq!(content.reader.name, "streamreader");
        assert_eq!(content.writer.name, "streamwriter");
        let columns = content.reader.parameter.column.as_ref().unwrap();
        assert_eq!(columns.resolve().unwrap(), vec!["id", "1", "val_2026-01-01"]);
    }

    #[test]
    fn test_config_yaml() {
        let yaml = r#"
job:
  setting:
    errorLimit:
      record: 10
      percentage: 2.5
  content:
    - reader:
        name: esreader
        parameter:
          column: ["a", "b"]
      writer:
        name: hdfswriter
        parameter:
          path: /tmp/out
"#;
        let config: DataTransferConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.monitor_urls.is_none());
        assert!(config.job.setting.dirty.is_none());
        assert_eq!(config.job.setting.error_limit.percentage, 2.5);
        let content = &config.job.content[0];
        let columns = content.reader.parameter.column.as_ref().unwrap();
        assert_eq!(columns.resolve().unwrap(), vec!["a", "b"]);
        assert_eq!(content.writer.parameter.properties.get("path").unwrap(), "/tmp/out");
    }
}
