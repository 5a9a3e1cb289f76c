use crate::errors::{AppError, AppResult};
use crate::models::day_type::{BreakKind, DayType};
use crate::models::rounding_policy::RoundingPolicy;
use crate::models::time_of_day::TimeOfDay;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configuration file location.
pub const CONFIG_ENV: &str = "WORKHOURS_CONFIG";

/// Raw break definition as written in the preferences file. Times stay
/// strings so a malformed value reaches the calculator, which falls back
/// to a default deduction instead of refusing to start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakSetting {
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for BreakSetting {
    fn default() -> Self {
        Self {
            start_time: String::new(),
            end_time: String::new(),
            enabled: true,
        }
    }
}

impl BreakSetting {
    pub fn new(start_time: &str, end_time: &str, enabled: bool) -> Self {
        Self {
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            enabled,
        }
    }
}

/// Lunch and dinner windows of one day type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBreaks {
    #[serde(default)]
    pub lunch: BreakSetting,
    #[serde(default)]
    pub dinner: BreakSetting,
}

impl DayBreaks {
    pub fn weekday_defaults() -> Self {
        Self {
            lunch: BreakSetting::new("13:00", "13:45", true),
            dinner: BreakSetting::new("19:00", "19:30", true),
        }
    }

    pub fn weekend_defaults() -> Self {
        Self {
            lunch: BreakSetting::new("13:00", "13:30", true),
            dinner: BreakSetting::new("19:00", "19:30", true),
        }
    }

    pub fn get(&self, kind: BreakKind) -> &BreakSetting {
        match kind {
            BreakKind::Lunch => &self.lunch,
            BreakKind::Dinner => &self.dinner,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakSettings {
    #[serde(default = "DayBreaks::weekday_defaults")]
    pub weekday: DayBreaks,
    #[serde(default = "DayBreaks::weekend_defaults")]
    pub weekend: DayBreaks,
}

impl Default for BreakSettings {
    fn default() -> Self {
        Self {
            weekday: DayBreaks::weekday_defaults(),
            weekend: DayBreaks::weekend_defaults(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_records_file")]
    pub records_file: String,
    #[serde(default = "default_rounding_algorithm")]
    pub rounding_algorithm: String,
    #[serde(default)]
    pub breaks: BreakSettings,
}

fn default_records_file() -> String {
    Config::records_file_default().to_string_lossy().to_string()
}

fn default_rounding_algorithm() -> String {
    RoundingPolicy::Standard.as_str().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            records_file: default_records_file(),
            rounding_algorithm: default_rounding_algorithm(),
            breaks: BreakSettings::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        if cfg!(target_os = "windows") {
            home.join("AppData").join("Local").join("WorkHoursCalculator")
        } else {
            home.join(".work_hours_calculator")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("preferences.yaml")
    }

    /// Return the full path of the default record file
    pub fn records_file_default() -> PathBuf {
        Self::config_dir().join("work_record.json")
    }

    /// `--config` flag, then `WORKHOURS_CONFIG`, then the platform default.
    pub fn resolve_config_file(cli_override: Option<&str>) -> PathBuf {
        if let Some(p) = cli_override {
            return expand_tilde(p);
        }
        match env::var(CONFIG_ENV) {
            Ok(p) if !p.trim().is_empty() => expand_tilde(&p),
            _ => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), ?cfg, "loaded configuration");
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Initialize configuration and record files.
    /// Returns the record file path that was prepared.
    pub fn init_all(
        config_path: &Path,
        records_override: Option<&str>,
        is_test: bool,
    ) -> AppResult<PathBuf> {
        let mut config = Self::load_from(config_path)?;
        if let Some(custom) = records_override {
            config.records_file = expand_tilde(custom).to_string_lossy().to_string();
        }

        if !is_test {
            config.save_to(config_path)?;
            println!("✅ Config file: {}", config_path.display());
        }

        let records = config.records_path();
        if let Some(parent) = records.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !records.exists() {
            fs::write(&records, "[]")?;
        }
        println!("✅ Records file: {}", records.display());

        Ok(records)
    }

    /// Effective record file location.
    pub fn records_path(&self) -> PathBuf {
        if self.records_file.trim().is_empty() {
            Self::records_file_default()
        } else {
            expand_tilde(&self.records_file)
        }
    }

    /// Configured rounding algorithm; unknown names select `standard`.
    pub fn rounding_policy(&self) -> RoundingPolicy {
        RoundingPolicy::from_name_or_standard(&self.rounding_algorithm)
    }

    pub fn breaks_for(&self, day: DayType) -> &DayBreaks {
        match day {
            DayType::Weekday => &self.breaks.weekday,
            DayType::Weekend => &self.breaks.weekend,
        }
    }

    /// Read a value by dotted key, e.g. `breaks.weekday.lunch.start_time`.
    pub fn get(&self, key: &str) -> Option<String> {
        let root = serde_yaml::to_value(self).ok()?;
        lookup(&root, key).map(render_value)
    }

    /// Update a single leaf by dotted key. Times and the rounding name are
    /// validated before the change is accepted.
    pub fn set(&mut self, key: &str, raw: &str) -> AppResult<()> {
        let mut root = serde_yaml::to_value(&*self)?;
        let slot = lookup_mut(&mut root, key)
            .ok_or_else(|| AppError::Config(format!("unknown configuration key '{key}'")))?;

        let new_value = match slot {
            Value::Mapping(_) => {
                return Err(AppError::Config(format!(
                    "'{key}' is a section, set one of its fields instead"
                )));
            }
            Value::Bool(_) => Value::Bool(parse_bool(raw).ok_or_else(|| {
                AppError::Config(format!("'{key}' expects true or false, got '{raw}'"))
            })?),
            _ => Value::String(raw.trim().to_string()),
        };
        *slot = new_value;

        validate_leaf(key, raw)?;

        *self = serde_yaml::from_value(root)?;
        Ok(())
    }

    /// Dotted keys present in the defaults but missing from `content`.
    pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
        let user: Value = serde_yaml::from_str(content)?;
        let defaults = serde_yaml::to_value(Self::default())?;

        let mut leaves = Vec::new();
        collect_leaves(&defaults, String::new(), &mut leaves);

        Ok(leaves
            .into_iter()
            .filter(|k| lookup(&user, k).is_none())
            .collect())
    }
}

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(root, |node, part| node.get(part))
}

fn lookup_mut<'a>(root: &'a mut Value, key: &str) -> Option<&'a mut Value> {
    key.split('.')
        .try_fold(root, |node, part| node.get_mut(part))
}

fn render_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::new(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

fn validate_leaf(key: &str, raw: &str) -> AppResult<()> {
    if key.ends_with(".start_time") || key.ends_with(".end_time") {
        TimeOfDay::parse(raw)
            .map_err(|_| AppError::Config(format!("'{key}': '{raw}' is not a valid HH:MM time")))?;
    }
    if key == "rounding_algorithm" && RoundingPolicy::from_name(raw).is_none() {
        let names: Vec<&str> = RoundingPolicy::ALL.iter().map(|p| p.as_str()).collect();
        return Err(AppError::Config(format!(
            "unknown rounding algorithm '{raw}' (expected one of: {})",
            names.join(", ")
        )));
    }
    Ok(())
}

fn collect_leaves(node: &Value, prefix: String, out: &mut Vec<String>) {
    match node {
        Value::Mapping(map) => {
            for (k, v) in map {
                if let Some(name) = k.as_str() {
                    let path = if prefix.is_empty() {
                        name.to_string()
                    } else {
                        format!("{prefix}.{name}")
                    };
                    collect_leaves(v, path, out);
                }
            }
        }
        _ => out.push(prefix),
    }
}
