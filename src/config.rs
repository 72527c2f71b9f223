pub struct Config {
    // Human-readable device identifier (used as hostname and in reports)
    pub device_name: &'static str,

    // Start as a wireless access point instead of joining an existing network
    pub use_ap_mode: bool,

    // Period between sensor measurements, in milliseconds
    pub measure_interval_ms: u32,

    // SSID advertised in access-point mode
    pub ap_ssid: &'static str,

    // Password for the advertised access point
    pub ap_pass: &'static str,

    // Network to join in station mode (empty = unset)
    pub sta_ssid: &'static str,

    // Password for the station-mode network (empty = unset)
    pub sta_pass: &'static str,

    // Endpoint measurements are reported to (empty = reporting disabled)
    pub report_url: &'static str,
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));

#[cfg(test)]
mod tests {
    use super::CONFIG;

    #[test]
    fn measure_interval_is_positive() {
        assert!(CONFIG.measure_interval_ms > 0);
    }

    #[test]
    fn ap_credentials_present_in_ap_mode() {
        if CONFIG.use_ap_mode {
            assert!(!CONFIG.ap_ssid.is_empty());
            assert!(!CONFIG.ap_pass.is_empty());
        }
    }

    #[test]
    fn shipped_defaults_round_trip() {
        assert_eq!(CONFIG.device_name, "CATYXX");
        assert!(CONFIG.use_ap_mode);
        assert_eq!(CONFIG.measure_interval_ms, 60_000);
        assert_eq!(CONFIG.ap_ssid, "CATYXX");
        assert_eq!(CONFIG.ap_pass, "Password");
        assert_eq!(CONFIG.sta_ssid, "");
        assert_eq!(CONFIG.sta_pass, "");
        assert_eq!(CONFIG.report_url, "");
    }
}
