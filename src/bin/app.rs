#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Delay, Duration};

use esp_alloc as _;
use esp_backtrace as _;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};

use montage_headform::controllers::handle_power_button;
use montage_headform::infrastructure::adapters::bind_power_button;
use montage_headform::infrastructure::config::{FIRMWARE, LIGHT};
use montage_headform::infrastructure::drivers::{init_ble_controller, init_pixel_chains};
use montage_headform::infrastructure::tasks::{ble_task, device_task};
use montage_headform::infrastructure::types::HeadformDevice;
use montage_headform::{button_gpio, chain_gpios, mk_static, relay_gpio};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();
    log::info!("montage headform {}", FIRMWARE.version);

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // The BLE controller needs heap (64 KB)
    esp_alloc::heap_allocator!(
        #[unsafe(link_section = ".dram2_uninit")] size: 64 * 1024
    );

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Relay stays off until the button is pressed
    let relay = Output::new(relay_gpio!(peripherals), Level::Low, OutputConfig::default());

    let revision = LIGHT.revision;
    let chains = match init_pixel_chains(
        peripherals.RMT,
        chain_gpios!(peripherals),
        revision.chain_lengths(),
    ) {
        Ok(chains) => chains,
        Err(e) => panic!("startup: {}", e),
    };

    let device = match HeadformDevice::new(revision, chains, relay, Delay) {
        Ok(device) => mk_static!(HeadformDevice, device),
        Err(e) => panic!("startup: {}", e),
    };

    let controller = match init_ble_controller(peripherals.BT) {
        Ok(controller) => controller,
        Err(e) => panic!("startup: {}", e),
    };

    bind_power_button(
        peripherals.IO_MUX,
        button_gpio!(peripherals),
        handle_power_button,
    );

    spawner.spawn(device_task(device)).ok();
    spawner.spawn(ble_task(controller)).ok();

    loop {
        embassy_time::Timer::after(Duration::from_secs(5)).await;
    }
}
