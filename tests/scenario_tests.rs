use hexbridge::core::codec::{supported_ids, REGISTRY};
use hexbridge::domain::model::{ClassifiedRequest, MalformedReason, Reply};
use hexbridge::{Classifier, MessageHandler};

#[test]
fn test_encode_japanese_as_utf8() {
    let handler = MessageHandler::default();

    let reply = handler.handle("こんにちは 8");

    assert_eq!(reply, Reply::text("e38193e38293e381aae381a1e381af"));
}

#[test]
fn test_decode_hex_back_to_japanese() {
    let handler = MessageHandler::default();

    let reply = handler.handle("e38193e38293e381aae381a1e381af");

    assert_eq!(reply, Reply::text("こんにちは"));
}

#[test]
fn test_uppercase_hex_is_accepted() {
    let handler = MessageHandler::default();

    let reply = handler.handle("E38193E38293E381AAE381A1E381AF");

    assert_eq!(reply, Reply::text("こんにちは"));
}

#[test]
fn test_bare_text_offers_every_encoding() {
    let handler = MessageHandler::default();

    let reply = handler.handle("zz");

    match reply {
        Reply::Choice { options, .. } => {
            assert_eq!(options.len(), REGISTRY.len());
            for (option, id) in options.iter().zip(supported_ids()) {
                assert_eq!(option.resubmit, format!("zz {}", id));
            }
            // Resubmitted text routes to an encode request
            for option in &options {
                assert!(matches!(
                    handler.classify(&option.resubmit),
                    ClassifiedRequest::Encode { .. }
                ));
            }
        }
        other => panic!("expected a choice reply, got {:?}", other),
    }
}

#[test]
fn test_unknown_encoding_id_lists_valid_ids() {
    let handler = MessageHandler::default();

    assert_eq!(
        handler.classify("abc xyz"),
        ClassifiedRequest::Malformed(MalformedReason::UnsupportedEncodingId {
            token: "xyz".to_string()
        })
    );

    let reply = handler.handle("abc xyz");
    assert!(reply.options().is_empty());
    for entry in REGISTRY.iter() {
        assert!(
            reply.body().contains(&format!("{} ({})", entry.id, entry.codec.label())),
            "reply should mention {}",
            entry.id
        );
    }
}

#[test]
fn test_empty_message_decodes_to_empty_text() {
    let handler = MessageHandler::default();

    assert_eq!(handler.handle(""), Reply::text(""));
}

#[test]
fn test_message_over_limit_is_rejected() {
    let handler = MessageHandler::new(Classifier::new(10));

    let reply = handler.handle("0123456789xy");

    assert!(reply.body().contains("形式が正しくありません"));
}

#[test]
fn test_hex_over_limit_is_still_decoded() {
    let handler = MessageHandler::new(Classifier::new(10));

    let reply = handler.handle("e38193e38293e381aae381a1e381af");

    assert_eq!(reply, Reply::text("こんにちは"));
}

#[test]
fn test_legacy_option_with_unknown_name_uses_trailing_id() {
    let handler = MessageHandler::default();

    assert_eq!(handler.handle("grep -f file 8"), Reply::text("67726570202d662066696c65"));
}

#[test]
fn test_bytes_outside_jis_x0208_fail_every_decoding() {
    let handler = MessageHandler::default();

    for hex in ["80", "874041"] {
        let reply = handler.handle(hex);
        assert!(
            reply.body().contains("デコードに失敗しました"),
            "{} should not decode: {:?}",
            hex,
            reply
        );
    }
}

#[test]
fn test_nec_special_characters_cannot_encode_as_shift_jis() {
    let handler = MessageHandler::default();

    let reply = handler.handle("① s");

    assert!(reply.body().contains("エンコードに失敗しました"));
}

#[test]
fn test_encode_then_decode_through_handler() {
    let handler = MessageHandler::default();

    for input in ["Hello, World!", "日本語のテキスト", "ﾊﾝｶｸ ｶﾀｶﾅ"] {
        let hex = match handler.handle(&format!("{} 8", input)) {
            Reply::Text { text } => text,
            other => panic!("unexpected reply {:?}", other),
        };
        assert_eq!(handler.handle(&hex), Reply::text(input));
    }
}

#[test]
fn test_shift_jis_hex_is_detected() {
    let handler = MessageHandler::default();

    let hex = match handler.handle("テスト1 s") {
        Reply::Text { text } => text,
        other => panic!("unexpected reply {:?}", other),
    };
    assert_eq!(hex, "83658358836731");

    assert_eq!(handler.handle(&hex), Reply::text("テスト1"));
}

#[test]
fn test_equal_scores_favor_earlier_registry_entry() {
    let handler = MessageHandler::default();

    // Read as UTF-16BE the same bytes are five CJK ideographs, an exact tie
    let hex = match handler.handle("こんにちは s") {
        Reply::Text { text } => text,
        other => panic!("unexpected reply {:?}", other),
    };
    assert_eq!(hex, "82b182f182c982bf82cd");

    assert_eq!(
        handler.handle(&hex),
        Reply::text("\u{82B1}\u{82F1}\u{82C9}\u{82BF}\u{82CD}")
    );
}
