use hybrid_fleet_optimizer::i18n::{keys, resolve_language, Translator};

#[test]
fn english_strings_resolve() {
    let tr = Translator::new("en-us");
    assert_eq!(tr.language_code(), "en");
    assert_eq!(tr.t(keys::SETTINGS_SAVED), "Settings saved.");
}

#[test]
fn unknown_codes_fall_back_to_korean() {
    let tr = Translator::new("fr");
    assert_eq!(tr.t(keys::SETTINGS_SAVED), "설정이 저장되었습니다.");
}

#[test]
fn portuguese_pack_is_built_in() {
    let tr = Translator::new_with_pack("pt-br", None);
    assert_eq!(
        tr.t(keys::MAIN_MENU_TITLE),
        "\n=== Otimizador de Frota Híbrida ==="
    );
}

#[test]
fn cli_flag_wins_over_config_language() {
    assert_eq!(resolve_language("en", Some("ko")), "en");
    assert_eq!(resolve_language("auto", Some("pt")), "pt-br");
    assert_eq!(resolve_language("ko-kr", None), "ko-kr");
}
