mod common;

mod tests {
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use montage_composer::{DeviceEvent, DeviceInbox, FOUR_CHAIN, Payload};

    use crate::common::{Effect, device_for, journal};

    const DEPTH: usize = 8;

    type TestInbox = DeviceInbox<NoopRawMutex, DEPTH>;

    fn command(text: &str) -> DeviceEvent {
        DeviceEvent::CommandWritten(Payload::from_slice(text.as_bytes()).unwrap())
    }

    fn fill(inbox: &TestInbox) {
        for _ in 0..DEPTH {
            inbox.try_post(command("bipolar red")).unwrap();
        }
    }

    #[test]
    fn test_events_come_out_in_order() {
        let inbox = TestInbox::new();
        inbox.try_post(DeviceEvent::Connected).unwrap();
        inbox.try_post(command("off")).unwrap();
        inbox.try_post(DeviceEvent::Disconnected).unwrap();

        assert_eq!(block_on(inbox.next()), DeviceEvent::Connected);
        assert_eq!(block_on(inbox.next()), command("off"));
        assert_eq!(block_on(inbox.next()), DeviceEvent::Disconnected);
    }

    #[test]
    fn test_full_queue_rejects_events() {
        let inbox = TestInbox::new();
        fill(&inbox);

        assert_eq!(
            inbox.try_post(DeviceEvent::Disconnected),
            Err(DeviceEvent::Disconnected)
        );
    }

    #[test]
    fn test_button_edge_survives_full_queue() {
        let inbox = TestInbox::new();
        fill(&inbox);

        inbox.button_edge(false);

        assert_eq!(block_on(inbox.next()), DeviceEvent::ButtonReleased);
        for _ in 0..DEPTH {
            assert_eq!(block_on(inbox.next()), command("bipolar red"));
        }
    }

    #[test]
    fn test_latest_button_level_wins() {
        let inbox = TestInbox::new();
        inbox.try_post(DeviceEvent::Connected).unwrap();

        inbox.button_edge(true);
        inbox.button_edge(false);

        assert_eq!(block_on(inbox.next()), DeviceEvent::ButtonReleased);
        assert_eq!(block_on(inbox.next()), DeviceEvent::Connected);
    }

    #[test]
    fn test_release_during_command_burst_cuts_power() {
        let journal = journal();
        let mut device = device_for(&FOUR_CHAIN, &journal);
        device.boot();
        let inbox = TestInbox::new();

        inbox.button_edge(true);
        block_on(device.handle(block_on(inbox.next())));
        assert!(device.power().is_powered());

        fill(&inbox);
        inbox.button_edge(false);
        journal.borrow_mut().clear();

        block_on(device.handle(block_on(inbox.next())));

        assert!(!device.power().is_powered());
        let effects = journal.borrow();
        assert_eq!(effects.last(), Some(&Effect::RelayLow));
        assert!(effects.contains(&Effect::Delay {
            ms: FOUR_CHAIN.settle_delay_ms
        }));
    }
}
