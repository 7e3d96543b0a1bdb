use core::str::FromStr;

use embassy_net::{DhcpConfig, IpAddress, Runner, Stack, StackResources, dns::DnsQueryType};
use embassy_time::{Duration, Timer};
use esp_hal::peripherals::WIFI;
use esp_hal::rng::Rng;
use esp_radio::wifi::{Config as WifiConfig, WifiController, WifiDevice};
use heapless::String;
use static_cell::make_static;

use crate::infrastructure::config;

// DHCP, DNS and one HTTP socket at a time
const MAX_CONNECTIONS: usize = 4;

pub(crate) fn init_network_stack(
    wifi_device: WIFI<'static>,
) -> (
    Stack<'static>,
    Runner<'static, WifiDevice<'static>>,
    WifiController<'static>,
) {
    let radio = &*make_static!(esp_radio::init().expect("radio init failed"));
    let (controller, interfaces) = esp_radio::wifi::new(radio, wifi_device, WifiConfig::default())
        .expect("wifi init failed");

    let mut dhcp = DhcpConfig::default();
    dhcp.hostname = String::from_str(config::DEVICE.hostname).ok();

    let resources = make_static!(StackResources::<MAX_CONNECTIONS>::new());
    let (stack, runner) = embassy_net::new(
        interfaces.sta,
        embassy_net::Config::dhcpv4(dhcp),
        resources,
        random_seed(),
    );

    (stack, runner, controller)
}

/// Wait for link and a DHCP lease, returns the lease.
pub(crate) async fn wait_for_connection(stack: Stack<'_>) -> embassy_net::StaticConfigV4 {
    loop {
        if stack.is_link_up()
            && let Some(lease) = stack.config_v4()
        {
            return lease;
        }
        Timer::after(Duration::from_millis(100)).await;
    }
}

/// Resolves a hostname to an IP address
pub(crate) async fn resolve_host(stack: Stack<'_>, host: &str) -> Result<IpAddress, ()> {
    if let Ok(ip) = host.parse::<embassy_net::Ipv4Address>() {
        return Ok(IpAddress::Ipv4(ip));
    }

    let Ok(addresses) = stack.dns_query(host, DnsQueryType::A).await else {
        return Err(());
    };

    addresses.first().copied().ok_or(())
}

fn random_seed() -> u64 {
    let rng = Rng::new();
    u64::from(rng.random()) << 32 | u64::from(rng.random())
}
