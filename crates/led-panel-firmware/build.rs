fn main() {
    println!("cargo:rustc-link-arg=-Tlinkall.x");
    println!("cargo:rerun-if-env-changed=WIFI_SSID");
    println!("cargo:rerun-if-env-changed=WIFI_PASSWORD");
    println!("cargo:rerun-if-env-changed=LED_API_HOST");
    println!("cargo:rerun-if-env-changed=LED_API_PORT");
    println!("cargo:rerun-if-env-changed=LED_PANEL_POLL_MS");
}
