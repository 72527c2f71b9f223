use std::{env, error::Error, fs, path::Path};

use serde::Deserialize;

#[derive(Deserialize)]
struct RawConfig {
    device_name: String,
    use_ap_mode: bool,
    measure_interval_ms: u32,
    ap_ssid: String,
    ap_pass: String,
    sta_ssid: String,
    sta_pass: String,
    report_url: String,
}

// Catch inconsistent provisioning before a device gets flashed with it.
fn check(raw: &RawConfig) -> Result<(), String> {
    if raw.measure_interval_ms == 0 {
        return Err("measure_interval_ms must be greater than zero".into());
    }
    if raw.use_ap_mode {
        if raw.ap_ssid.is_empty() {
            return Err("ap_ssid must not be empty when use_ap_mode is true".into());
        }
        if raw.ap_pass.is_empty() {
            return Err("ap_pass must not be empty when use_ap_mode is true".into());
        }
    } else if raw.sta_ssid.is_empty() {
        return Err("sta_ssid must not be empty when use_ap_mode is false".into());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if toml changes
    println!("cargo:rerun-if-changed=cfg.toml");

    // Read and parse
    let toml_str = fs::read_to_string("cfg.toml")?;
    let raw: RawConfig = toml::from_str(&toml_str)?;
    check(&raw)?;

    // Generate Rust code
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    let code = format!(
        r#"
        pub const CONFIG: Config = Config {{
            device_name: {name:?},
            use_ap_mode: {ap_mode},
            measure_interval_ms: {interval},
            ap_ssid: {ap_ssid:?},
            ap_pass: {ap_pass:?},
            sta_ssid: {sta_ssid:?},
            sta_pass: {sta_pass:?},
            report_url: {url:?},
        }};
    "#,
        name = raw.device_name,
        ap_mode = raw.use_ap_mode,
        interval = raw.measure_interval_ms,
        ap_ssid = raw.ap_ssid,
        ap_pass = raw.ap_pass,
        sta_ssid = raw.sta_ssid,
        sta_pass = raw.sta_pass,
        url = raw.report_url
    );

    fs::write(dest_path, code)?;
    Ok(())
}
