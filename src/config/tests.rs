#[cfg(test)]
mod config_tests {
    use crate::config::enums::configuration_error::ConfigurationError;
    use crate::config::structs::configuration::Configuration;

    #[test]
    fn test_default_configuration_validates() {
        let config = Configuration::init();
        assert!(config.validate().is_ok());
        assert_eq!(config.tracker.max_swarms_per_shard, 10);
        assert_eq!(config.tracker.sweep_interval, 15);
        assert_eq!(config.tracker.shard_base_port, 6000);
        assert_eq!(config.peer.upload_port, 5700);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let config = Configuration::init();
        let encoded = toml::to_string(&config).unwrap();
        let decoded = Configuration::load(encoded.as_bytes()).unwrap();
        assert_eq!(decoded.peer.part_directory, config.peer.part_directory);
        assert_eq!(decoded.tracker.directory_bind_address, config.tracker.directory_bind_address);
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let mut config = Configuration::init();
        config.log_level = String::from("loud");
        assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
    }

    #[test]
    fn test_zero_connection_pools_rejected() {
        let mut config = Configuration::init();
        config.peer.max_download_connections = 0;
        assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));

        let mut config = Configuration::init();
        config.peer.max_upload_connections = 0;
        assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));

        let mut config = Configuration::init();
        config.tracker.control_workers = 0;
        assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));

        assert!(Configuration::init().validate().is_ok());
    }

    #[test]
    fn test_bad_directory_address_rejected() {
        let mut config = Configuration::init();
        config.peer.directory_address = String::from("not-an-address");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_same_storage_directories_rejected() {
        let mut config = Configuration::init();
        config.peer.complete_directory = config.peer.part_directory.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_storage_directory_regex() {
        assert!(Configuration::validate_value("dir", String::from("part.dir"), String::from(r"^[A-Za-z0-9_.\-/]{1,255}$")).is_ok());
        assert!(Configuration::validate_value("dir", String::from("bad dir"), String::from(r"^[A-Za-z0-9_.\-/]{1,255}$")).is_err());
    }
}
