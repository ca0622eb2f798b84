use hexbridge::core::codec::{hex_decode, hex_encode, Codec, REGISTRY};
use hexbridge::core::scorer::{score, ScoreBreakdown};
use hexbridge::core::selector::{rank_candidates, smart_decode};

fn sample_inputs() -> Vec<Vec<u8>> {
    vec![
        vec![],
        b"plain ascii".to_vec(),
        vec![0x00, 0x41, 0x00, 0x42],
        vec![0xFF, 0xFE, 0x41, 0x00],
        vec![0x82, 0xA0, 0x82, 0xA2],
        vec![0xE3, 0x81],
        vec![0xFF],
        (0u8..=255).collect(),
    ]
}

#[test]
fn test_selector_only_returns_real_decodings() {
    for bytes in sample_inputs() {
        if let Some(detection) = smart_decode(&bytes) {
            let direct = detection.encoding.decode(&bytes).unwrap();
            assert_eq!(direct, detection.text, "{:02x?}", bytes);
            assert_eq!(score(&direct), detection.score);
        } else {
            assert!(rank_candidates(&bytes).is_empty());
        }
    }
}

#[test]
fn test_selector_picks_max_score_first_in_order() {
    for bytes in sample_inputs() {
        let candidates = rank_candidates(&bytes);
        let Some(detection) = smart_decode(&bytes) else {
            continue;
        };
        let best = candidates.iter().map(|c| c.score).max().unwrap();
        let first = candidates.iter().find(|c| c.score == best).unwrap();
        assert_eq!(detection.encoding, first.codec);
    }
}

#[test]
fn test_candidates_follow_registry_order() {
    let candidates = rank_candidates(&[]);
    let order: Vec<Codec> = candidates.iter().map(|c| c.codec).collect();
    let registry: Vec<Codec> = REGISTRY.iter().map(|e| e.codec).collect();
    assert_eq!(order, registry);
}

#[test]
fn test_score_is_deterministic() {
    let text = "テスト test 123 😀 \u{0}";
    assert_eq!(score(text), score(text));
    assert_eq!(ScoreBreakdown::of(text).total(), score(text));
}

#[test]
fn test_hex_round_trip() {
    for bytes in sample_inputs() {
        assert_eq!(hex_decode(&hex_encode(&bytes)).unwrap(), bytes);
    }
}

#[test]
fn test_codec_round_trip_for_representable_text() {
    let texts = ["", "ASCII only", "ひらがなとカタカナ", "漢字123", "ｱｲｳｴｵ"];
    for text in texts {
        for entry in REGISTRY.iter() {
            let bytes = entry.codec.encode(text).unwrap();
            assert_eq!(entry.codec.decode(&bytes).unwrap(), text);
        }
    }
    // Emoji survive every UTF codec but not Shift_JIS
    for entry in REGISTRY.iter().filter(|e| e.codec != Codec::ShiftJis) {
        let bytes = entry.codec.encode("🎉").unwrap();
        assert_eq!(entry.codec.decode(&bytes).unwrap(), "🎉");
    }
}
