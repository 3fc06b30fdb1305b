#[cfg(test)]
mod common_tests {
    use log::LevelFilter;
    use crate::common::common::{current_time, parse_log_level, setup_logging};
    use crate::common::structs::custom_error::CustomError;
    use crate::config::structs::configuration::Configuration;

    #[test]
    fn test_parse_log_level_known() {
        assert_eq!(parse_log_level("off").unwrap(), LevelFilter::Off);
        assert_eq!(parse_log_level("trace").unwrap(), LevelFilter::Trace);
        assert_eq!(parse_log_level("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_log_level("info").unwrap(), LevelFilter::Info);
        assert_eq!(parse_log_level("warn").unwrap(), LevelFilter::Warn);
        assert_eq!(parse_log_level("error").unwrap(), LevelFilter::Error);
    }

    #[test]
    fn test_parse_log_level_unknown() {
        let error = parse_log_level("loud").unwrap_err();
        assert_eq!(error.message(), "Unknown log level encountered: 'loud'");
    }

    #[test]
    fn test_setup_logging_rejects_unknown_level() {
        let mut config = Configuration::init();
        config.log_level = String::from("chatty");
        assert!(setup_logging(&config).is_err());
    }

    #[test]
    fn test_custom_error_display() {
        let error = CustomError::new("boom");
        assert_eq!(format!("{}", error), "boom");
    }

    #[test]
    fn test_current_time_is_after_2020() {
        assert!(current_time() > 1_577_836_800);
    }
}
