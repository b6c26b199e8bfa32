use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::tracker_config::TrackerConfig;

const DIRECTORY_NAME_REGEX: &str = r"^[A-Za-z0-9_.\-/]{1,255}$";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_file: None,
            tracker: TrackerConfig {
                directory_bind_address: String::from("0.0.0.0:5600"),
                tracker_bind_ip: String::from("0.0.0.0"),
                shard_base_port: 6000,
                max_swarms_per_shard: 10,
                sweep_interval: 15,
                control_workers: 10,
            },
            peer: PeerConfig {
                directory_address: String::from("127.0.0.1:5600"),
                upload_bind_ip: String::from("0.0.0.0"),
                upload_port: 5700,
                max_upload_connections: 100,
                max_download_connections: 100,
                keep_alive_interval: 1,
                round_timeout: 1200,
                connect_timeout: 10,
                part_directory: String::from("part.dir"),
                complete_directory: String::from("complete.dir"),
            },
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init())
                    .map_err(|e| CustomError::new(&ConfigurationError::EncodeError(e).to_string()))?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit the {path} in the root folder, exiting now...");
                        Err(CustomError::new(&format!("create {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|e| CustomError::new(&e.to_string()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(self.log_level.as_str()).is_none() {
            return Err(ConfigurationError::ValidationError(format!("Unknown log level: \"{}\"", self.log_level)));
        }

        let addresses = vec![
            ("[tracker] directory_bind_address", self.tracker.directory_bind_address.clone()),
            ("[peer] directory_address", self.peer.directory_address.clone()),
        ];
        for (name, value) in addresses {
            if value.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::ValidationError(format!("Error checking {name} [:] \"{value}\" is not a socket address")));
            }
        }

        let ips = vec![
            ("[tracker] tracker_bind_ip", self.tracker.tracker_bind_ip.clone()),
            ("[peer] upload_bind_ip", self.peer.upload_bind_ip.clone()),
        ];
        for (name, value) in ips {
            if value.parse::<std::net::IpAddr>().is_err() {
                return Err(ConfigurationError::ValidationError(format!("Error checking {name} [:] \"{value}\" is not an IP address")));
            }
        }

        let check_map = vec![
            ("[peer] part_directory", self.peer.part_directory.clone(), DIRECTORY_NAME_REGEX.to_string()),
            ("[peer] complete_directory", self.peer.complete_directory.clone(), DIRECTORY_NAME_REGEX.to_string()),
        ];
        for (name, value, regex) in check_map {
            Self::validate_value(name, value, regex)?;
        }

        if self.peer.part_directory == self.peer.complete_directory {
            return Err(ConfigurationError::ValidationError(String::from("[peer] part_directory and complete_directory must differ")));
        }
        if self.tracker.max_swarms_per_shard == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[tracker] max_swarms_per_shard must be at least 1")));
        }
        let pools = vec![
            ("[peer] max_download_connections", self.peer.max_download_connections),
            ("[peer] max_upload_connections", self.peer.max_upload_connections),
            ("[tracker] control_workers", self.tracker.control_workers),
        ];
        for (name, value) in pools {
            if value == 0 {
                return Err(ConfigurationError::ValidationError(format!("{name} must be at least 1")));
            }
        }
        if self.tracker.shard_base_port == 0 {
            return Err(ConfigurationError::ValidationError(String::from("[tracker] shard_base_port must not be 0")));
        }
        if self.tracker.sweep_interval == 0 || self.peer.keep_alive_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("intervals must be at least 1 second")));
        }
        if self.peer.keep_alive_interval >= self.tracker.sweep_interval {
            log::warn!("[VALIDATE CONFIG] keep_alive_interval ({}s) is not shorter than sweep_interval ({}s), peers may be evicted while alive", self.peer.keep_alive_interval, self.tracker.sweep_interval);
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: String, regex: String) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex.as_str())
            .map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        if !regex_check.is_match(value.as_str()) {
            return Err(ConfigurationError::ValidationError(format!("Error checking {} [:] Name: \"{}\" [:] Regex: \"{}\"", name, value, regex_check)));
        }
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}
