use embassy_futures::join::join;
use embassy_time::Duration;
use trouble_host::prelude::*;

use montage_composer::{MAX_COMMAND_LEN, advertising_payload};

use crate::controllers::link;
use crate::infrastructure::config;
use crate::infrastructure::drivers::BleController;

/// Max number of connections
const CONNECTIONS_MAX: usize = 1;

/// Max number of L2CAP channels
const L2CAP_CHANNELS_MAX: usize = 2; // Signal + att

/// Static random address of the headform
const ADDRESS: [u8; 6] = [0xa6, 0x64, 0x67, 0xf6, 0xb8, 0xf0];

#[gatt_server]
struct Server {
    montage: MontageService,
}

#[gatt_service(uuid = "3322271e-756a-443d-8a9d-2f90c7a73bf5")]
struct MontageService {
    #[characteristic(uuid = "9b7a6e35-cb8d-473b-9346-15507d362aa3", read, write)]
    command: heapless::Vec<u8, MAX_COMMAND_LEN>,
}

/// Task running the BLE host and the command service
///
/// Advertising only starts when the device task asks for it, so a
/// disconnect is always seen by the device before the next client can
/// connect.
#[embassy_executor::task]
pub async fn ble_task(controller: BleController) {
    let mut resources: HostResources<DefaultPacketPool, CONNECTIONS_MAX, L2CAP_CHANNELS_MAX> =
        HostResources::new();
    let stack = trouble_host::new(controller, &mut resources)
        .set_random_address(Address::random(ADDRESS));
    let Host {
        mut peripheral,
        mut runner,
        ..
    } = stack.build();

    let adv_data = match advertising_payload(config::BLE.name, config::BLE.service_uuid) {
        Ok(adv_data) => adv_data,
        Err(e) => panic!("ble: {}", e),
    };

    let server = match Server::new_with_config(GapConfig::Peripheral(PeripheralConfig {
        name: config::BLE.name,
        appearance: &appearance::power_device::GENERIC_POWER_DEVICE,
    })) {
        Ok(server) => server,
        Err(e) => panic!("ble: gatt server registration failed: {:?}", e),
    };

    let host = async {
        match runner.run().await {
            Ok(()) => panic!("ble: host stopped"),
            Err(e) => panic!("ble: host stopped: {:?}", e),
        }
    };

    let service = async {
        loop {
            link::wait_advertise_request().await;
            serve_next_client(&mut peripheral, &server, &adv_data).await;
        }
    };

    join(host, service).await;
}

/// Advertise, accept one client and serve it until it goes away
async fn serve_next_client<'values, C: Controller>(
    peripheral: &mut Peripheral<'values, C, DefaultPacketPool>,
    server: &Server<'values>,
    adv_data: &[u8],
) {
    loop {
        match advertise(peripheral, server, adv_data).await {
            Ok(conn) => {
                link::on_connected().await;
                serve(&conn, server).await;
                link::on_disconnected().await;
                return;
            }
            Err(e) => {
                log::warn!("ble: advertising failed: {:?}", e);
                embassy_time::Timer::after(Duration::from_secs(1)).await;
            }
        }
    }
}

async fn advertise<'values, 'server, C: Controller>(
    peripheral: &mut Peripheral<'values, C, DefaultPacketPool>,
    server: &'server Server<'values>,
    adv_data: &[u8],
) -> Result<GattConnection<'values, 'server, DefaultPacketPool>, BleHostError<C::Error>> {
    let interval = Duration::from_millis(config::BLE.advertising_interval_ms);
    let params = AdvertisementParameters {
        interval_min: interval,
        interval_max: interval,
        ..Default::default()
    };

    let advertiser = peripheral
        .advertise(
            &params,
            Advertisement::ConnectableScannableUndirected {
                adv_data,
                scan_data: &[],
            },
        )
        .await?;
    log::info!("ble: advertising as '{}'", config::BLE.name);

    let conn = advertiser.accept().await?.with_attribute_server(server)?;
    Ok(conn)
}

/// Serve GATT requests until the client disconnects
async fn serve(conn: &GattConnection<'_, '_, DefaultPacketPool>, server: &Server<'_>) {
    let command = &server.montage.command;
    loop {
        match conn.next().await {
            GattConnectionEvent::Disconnected { reason } => {
                log::info!("ble: disconnected: {:?}", reason);
                return;
            }
            GattConnectionEvent::Gatt { event } => {
                if let GattEvent::Write(write) = &event {
                    if write.handle() == command.handle {
                        link::on_command_written(write.data()).await;
                    }
                }

                match event.accept() {
                    Ok(reply) => reply.send().await,
                    Err(e) => log::warn!("ble: gatt reply failed: {:?}", e),
                }
            }
            _ => {}
        }
    }
}
