use std::collections::HashMap;
use std::fmt::Debug;
use log::debug;
use crate::config::DataTransferConfig;
use crate::Result;

/// The common writer-side state extracted from a job document: error
/// tolerance, dirty-record sink, monitoring endpoint and the resolved source
/// schema. Built once during synchronous writer construction and held
/// immutably afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct WriterSettings {
    pub monitor_urls: Option<String>,
    pub errors: i64,
    pub error_ratio: f64,
    pub dirty_path: Option<String>,
    pub dirty_properties: HashMap<String, String>,
    pub src_cols: Vec<String>,
}

impl WriterSettings {
    pub fn from_config(config: &DataTransferConfig) -> Result<WriterSettings> {
        let setting = &config.job.setting;
        let content = config.job.content.first().ok_or("job content can't be null or empty")?;

        let (dirty_path, dirty_properties) = match &setting.dirty {
            Some(dirty) => (dirty.path.clone(), dirty.hadoop_config.clone()),
            None => (None, HashMap::new()),
        };

        let src_cols = match &content.reader.parameter.column {
            Some(columns) => columns.resolve()?,
            None => return Err("source columns can't be null or empty".to_string()),
        };
        debug!("resolved source columns: {:?}", src_cols);

        Ok(WriterSettings {
            monitor_urls: config.monitor_urls.clone(),
            errors: setting.error_limit.record,
            error_ratio: setting.error_limit.percentage / 100.0,
            dirty_path,
            dirty_properties,
            src_cols,
        })
    }
}

/// Seam implemented by concrete writer plugins. Execution itself belongs to
/// the surrounding engine, plugins only expose their name and settings here.
pub trait Writer: Debug {
    fn name(&self) -> &str;

    fn settings(&self) -> &WriterSettings;

    fn src_cols(&self) -> &[String] {
        &self.settings().src_cols
    }
}
