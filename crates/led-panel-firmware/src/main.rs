#![no_std]
#![no_main]

mod controllers;
mod infrastructure;

use embassy_executor::Spawner;
use embassy_time::Duration;
use log::info;

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};

use led_panel_core::LedPanelController;
use led_panel_core::net::HttpLedPanelApi;

use crate::controllers::init_button_controller;
use crate::infrastructure::config;
use crate::infrastructure::drivers::{IndicatorPanelView, init_network_stack, wait_for_connection};
use crate::infrastructure::services::{ConsoleNotifier, TcpConnector};
use crate::infrastructure::tasks::{network_runner_task, panel_task, wifi_connection_task};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Wi-Fi driver needs a heap
    esp_alloc::heap_allocator!(size: 72 * 1024);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Panel hardware: both LEDs show as unknown until the first status fetch
    let view = IndicatorPanelView::new(
        led1_indicator_gpio!(peripherals),
        led2_indicator_gpio!(peripherals),
    );
    let clicks = init_button_controller(
        peripherals.IO_MUX,
        led1_button_gpio!(peripherals),
        led2_button_gpio!(peripherals),
    );

    // Initialize network stack and spawn network tasks
    let (stack, runner, controller) = init_network_stack(peripherals.WIFI);
    spawner.spawn(wifi_connection_task(controller)).ok();
    spawner.spawn(network_runner_task(runner)).ok();

    let ip = wait_for_connection(stack).await;
    info!(
        "network: up as {}, LED device at {}:{}",
        ip.address,
        config::PANEL.host,
        config::PANEL.port
    );

    let api = HttpLedPanelApi::new(TcpConnector::new(stack, &config::PANEL), &config::PANEL);
    let panel = LedPanelController::new(api, view, ConsoleNotifier);
    spawner
        .spawn(panel_task(panel, clicks, config::PANEL))
        .ok();

    loop {
        embassy_time::Timer::after(Duration::from_secs(5)).await;
    }
}
