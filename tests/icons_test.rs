use prospector::icons::*;

#[test]
fn test_default_theme() {
    let service = IconService::default();
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_theme_switching() {
    let mut service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.theme(), IconTheme::Emoji);

    service.set_theme(IconTheme::Ascii);
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_emoji_icons() {
    let service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.checked(), "✅");
    assert_eq!(service.unchecked(), "🔳");
    assert_eq!(service.mail(), "📧");
}

#[test]
fn test_unicode_icons() {
    let service = IconService::new(IconTheme::Unicode);
    assert_eq!(service.checked(), "☑");
    assert_eq!(service.unchecked(), "☐");
    assert_eq!(service.connected(), "●");
}

#[test]
fn test_ascii_icons() {
    let service = IconService::new(IconTheme::Ascii);
    assert_eq!(service.checked(), "[x]");
    assert_eq!(service.unchecked(), "[ ]");
    assert_eq!(service.busy(), "...");
}

#[test]
fn test_status_icons_per_theme() {
    let emoji_service = IconService::new(IconTheme::Emoji);
    assert_eq!(emoji_service.connected(), "🟢");
    assert_eq!(emoji_service.disconnected(), "⚪");

    let unicode_service = IconService::new(IconTheme::Unicode);
    assert_eq!(unicode_service.warning(), "⚠");

    let ascii_service = IconService::new(IconTheme::Ascii);
    assert_eq!(ascii_service.disconnected(), "o");
}
