mod tests {
    use montage_composer::{
        CommandError, CommandParser, FOUR_CHAIN, Palette, RenderRequest, Rgb, SINGLE_CHAIN,
        decode,
    };

    fn parser() -> CommandParser<'static> {
        CommandParser::new(&FOUR_CHAIN.montages, Palette::FULL)
    }

    fn parse(text: &str) -> Result<RenderRequest<'static>, CommandError> {
        parser().parse(text)
    }

    #[test]
    fn test_parse_montage_and_color() {
        let request = parse("bipolar red").unwrap();
        let RenderRequest::Montage { montage, color } = request else {
            panic!("expected a montage, got {:?}", request);
        };
        assert_eq!(montage.name, "bipolar");
        assert_eq!(color, Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_parse_off_ignores_second_token() {
        assert_eq!(parse("off xyz"), Ok(RenderRequest::Off));
        assert_eq!(parse("off"), Ok(RenderRequest::Off));
        assert_eq!(parse("OFF teal"), Ok(RenderRequest::Off));
    }

    #[test]
    fn test_parse_single_token_is_malformed() {
        assert_eq!(
            parse("bipolar"),
            Err(CommandError::Malformed { tokens: 1 })
        );
    }

    #[test]
    fn test_parse_empty_is_malformed() {
        assert_eq!(parse(""), Err(CommandError::Malformed { tokens: 0 }));
        assert_eq!(parse("   \t "), Err(CommandError::Malformed { tokens: 0 }));
    }

    #[test]
    fn test_parse_extra_tokens_are_malformed() {
        assert_eq!(
            parse("bipolar red now"),
            Err(CommandError::Malformed { tokens: 3 })
        );
    }

    #[test]
    fn test_parse_unknown_color() {
        assert_eq!(
            parse("bipolar teal"),
            Err(CommandError::UnknownColor("teal".try_into().unwrap()))
        );
    }

    #[test]
    fn test_parse_unknown_montage() {
        assert_eq!(
            parse("unknownmontage red"),
            Err(CommandError::UnknownMontage(
                "unknownmontage".try_into().unwrap()
            ))
        );
    }

    #[test]
    fn test_unknown_montage_reported_before_color() {
        assert!(matches!(
            parse("nowhere teal"),
            Err(CommandError::UnknownMontage(_))
        ));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let request = parse("  Cz_Ref   BLUE ").unwrap();
        assert_eq!(request.name(), "cz_ref");
    }

    #[test]
    fn test_parse_applies_intensity_ceiling() {
        let parser = CommandParser::new(&FOUR_CHAIN.montages, FOUR_CHAIN.palette());
        let Ok(RenderRequest::Montage { color, .. }) = parser.parse("large white") else {
            panic!("expected a montage");
        };
        assert_eq!(color, Rgb { r: 64, g: 64, b: 64 });
    }

    #[test]
    fn test_parse_revision_specific_montages() {
        let single = CommandParser::new(&SINGLE_CHAIN.montages, SINGLE_CHAIN.palette());
        assert!(single.parse("brain_death green").is_ok());
        assert!(matches!(
            single.parse("eci green"),
            Err(CommandError::UnknownMontage(_))
        ));
        assert!(matches!(
            parse("brain_death green"),
            Err(CommandError::UnknownMontage(_))
        ));
    }

    #[test]
    fn test_decode_then_parse() {
        let text = decode(b"hatband purple\0\0").unwrap();
        let Ok(RenderRequest::Montage { montage, color }) = parse(text) else {
            panic!("expected a montage");
        };
        assert_eq!(montage.name, "hatband");
        assert_eq!(color, Rgb { r: 128, g: 0, b: 128 });
    }

    #[test]
    fn test_decode_error_never_reaches_parser() {
        let result = decode(&[0xc3, 0x28]).and_then(|text| parse(text));
        assert_eq!(result, Err(CommandError::Decode));
    }
}
