use crate::config::Config;
use crate::core::calculator::hours::{self, CalculationResult};
use crate::errors::AppResult;
use crate::models::day_type::DayType;
use crate::models::rounding_policy::RoundingPolicy;

pub struct Core;

impl Core {
    /// Calculate with the configured rounding algorithm and the break
    /// windows of `day`. `policy_override` wins over the configuration.
    pub fn calculate(
        entry: &str,
        exit: &str,
        day: DayType,
        cfg: &Config,
        policy_override: Option<RoundingPolicy>,
    ) -> AppResult<CalculationResult> {
        let policy = policy_override.unwrap_or_else(|| cfg.rounding_policy());
        hours::calculate(entry, exit, day, policy, cfg.breaks_for(day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_configuration_for_policy_and_breaks() {
        let mut cfg = Config::default();
        cfg.set("rounding_algorithm", "ceiling").unwrap();
        cfg.set("breaks.weekend.lunch.enabled", "false").unwrap();

        let r = Core::calculate("10:01", "15:00", DayType::Weekend, &cfg, None).unwrap();
        assert_eq!(r.rounded_entry.to_string(), "10:15");
        assert_eq!(r.net_minutes, 285);

        let r = Core::calculate(
            "10:01",
            "15:00",
            DayType::Weekend,
            &cfg,
            Some(RoundingPolicy::Standard),
        )
        .unwrap();
        assert_eq!(r.rounded_entry.to_string(), "10:00");
    }

    #[test]
    fn unknown_configured_policy_rounds_like_standard() {
        let cfg = Config {
            rounding_algorithm: "fortnightly".into(),
            ..Config::default()
        };
        let r = Core::calculate("08:08", "17:00", DayType::Weekday, &cfg, None).unwrap();
        assert_eq!(r.policy, RoundingPolicy::Standard);
        assert_eq!(r.rounded_entry.to_string(), "08:15");
    }
}
