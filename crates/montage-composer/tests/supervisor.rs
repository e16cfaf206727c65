mod common;

mod tests {
    use embassy_futures::block_on;
    use montage_composer::{
        BLACK, FOUR_CHAIN, LinkAction, LinkError, LinkState, LinkSupervisor, PowerSupervisor,
        RenderRequest, Selection,
    };

    use crate::common::{Effect, MockDelay, MockRelay, journal, renderer_for, shown};

    #[test]
    fn test_boot_starts_advertising() {
        let mut link = LinkSupervisor::new();
        assert_eq!(link.state(), LinkState::Idle);
        assert_eq!(link.on_boot(), LinkAction::StartAdvertising);
        assert_eq!(link.state(), LinkState::Advertising);
    }

    #[test]
    fn test_connect_while_advertising() {
        let mut link = LinkSupervisor::new();
        link.on_boot();
        assert_eq!(link.on_connected(), Ok(LinkAction::Nothing));
        assert!(link.is_connected());
    }

    #[test]
    fn test_disconnect_rearms_advertising() {
        let mut link = LinkSupervisor::new();
        link.on_boot();
        link.on_connected().unwrap();

        assert_eq!(link.on_disconnected(), LinkAction::StartAdvertising);
        assert_eq!(link.state(), LinkState::Advertising);
        assert_eq!(link.on_connected(), Ok(LinkAction::Nothing));
    }

    #[test]
    fn test_connect_before_advertising_is_refused() {
        let mut link = LinkSupervisor::new();
        assert_eq!(
            link.on_connected(),
            Err(LinkError::NotAdvertising(LinkState::Idle))
        );
    }

    #[test]
    fn test_second_connect_is_refused() {
        let mut link = LinkSupervisor::new();
        link.on_boot();
        link.on_connected().unwrap();
        assert_eq!(
            link.on_connected(),
            Err(LinkError::NotAdvertising(LinkState::Connected))
        );
        assert!(link.is_connected());
    }

    #[test]
    fn test_repeated_link_loss() {
        let mut link = LinkSupervisor::new();
        link.on_boot();
        for _ in 0..3 {
            link.on_connected().unwrap();
            assert_eq!(link.on_disconnected(), LinkAction::StartAdvertising);
        }
        assert_eq!(link.state(), LinkState::Advertising);
    }

    #[test]
    fn test_button_press_powers_relay() {
        let journal = journal();
        let mut power = PowerSupervisor::new(MockRelay::new(&journal), MockDelay::new(&journal), 3_000);
        assert!(!power.is_powered());

        power.on_button_pressed();

        assert!(power.is_powered());
        assert_eq!(journal.borrow().last(), Some(&Effect::RelayHigh));
    }

    #[test]
    fn test_release_cuts_power_after_off_render() {
        let journal = journal();
        let mut renderer = renderer_for(&FOUR_CHAIN, &journal);
        let Some(Selection::Montage(large)) = FOUR_CHAIN.montages.resolve("large") else {
            panic!("large montage missing");
        };
        renderer.render(&RenderRequest::Montage {
            montage: large,
            color: FOUR_CHAIN.palette().resolve("white").unwrap(),
        });

        let mut power = PowerSupervisor::new(
            MockRelay::new(&journal),
            MockDelay::new(&journal),
            FOUR_CHAIN.settle_delay_ms,
        );
        power.on_button_pressed();
        journal.borrow_mut().clear();

        block_on(power.on_button_released(&mut renderer));

        assert!(!power.is_powered());
        assert_eq!(
            *journal.borrow(),
            vec![
                Effect::Flush { chain: 0, lit: 0 },
                Effect::Flush { chain: 1, lit: 0 },
                Effect::Flush { chain: 2, lit: 0 },
                Effect::Flush { chain: 3, lit: 0 },
                Effect::Delay { ms: 3_000 },
                Effect::RelayLow,
            ]
        );
        assert!(shown(&renderer).iter().flatten().all(|pixel| *pixel == BLACK));
    }
}
