use std::collections::HashMap;

use super::*;

fn sequential() -> SigilGenerator {
    SigilGenerator::new(SigilOpts {
        parallel: false,
        ..SigilOpts::default()
    })
    .unwrap()
}

#[test]
fn default_opts_match_documented_values() {
    let o = SigilOpts::default();
    assert_eq!(o.default_size, 400);
    assert_eq!(o.max_size, 2048);
    assert_eq!(o.max_phrase_chars, 500);
    assert!(o.parallel);
    assert!(o.threads.is_none() && o.font_path.is_none());
    o.validate().unwrap();
}

#[test]
fn env_overrides_apply_and_bad_values_are_ignored() {
    let vars: HashMap<&str, &str> = [
        ("SIGILCRAFT_FONT_PATH", "/fonts/rune.ttf"),
        ("SIGILCRAFT_THREADS", "3"),
        ("SIGILCRAFT_MAX_SIZE", "not a number"),
        ("SIGILCRAFT_SEQUENTIAL", "True"),
    ]
    .into_iter()
    .collect();
    let o = SigilOpts::default().with_vars(|k| vars.get(k).map(|v| v.to_string()));
    assert_eq!(o.font_path, Some(PathBuf::from("/fonts/rune.ttf")));
    assert_eq!(o.threads, Some(3));
    assert_eq!(o.max_size, 2048);
    assert!(!o.parallel);

    let untouched = SigilOpts::default().with_vars(|_| None);
    assert_eq!(untouched, SigilOpts::default());
}

#[test]
fn opts_deserialize_partially_and_reject_unknown_keys() {
    let o: SigilOpts = serde_json::from_str(r#"{"max_size": 512, "threads": 2}"#).unwrap();
    assert_eq!(o.max_size, 512);
    assert_eq!(o.threads, Some(2));
    assert_eq!(o.default_size, 400);
    assert!(serde_json::from_str::<SigilOpts>(r#"{"vibe": "cosmic"}"#).is_err());
}

#[test]
fn invalid_opts_are_rejected() {
    for bad in [
        SigilOpts {
            max_size: 0,
            ..SigilOpts::default()
        },
        SigilOpts {
            max_size: MAX_SUPPORTED_SIZE + 1,
            ..SigilOpts::default()
        },
        SigilOpts {
            default_size: 4096,
            ..SigilOpts::default()
        },
        SigilOpts {
            threads: Some(0),
            ..SigilOpts::default()
        },
    ] {
        assert!(SigilGenerator::new(bad).is_err());
    }
}

#[test]
fn success_walks_every_stage_in_order() {
    let mut seen = Vec::new();
    let sigil = sequential()
        .generate_observed("LOVE", 24, |s| seen.push(s))
        .unwrap();
    assert_eq!(
        seen,
        vec![
            GenerationStage::Validating,
            GenerationStage::Mapping,
            GenerationStage::Synthesizing,
            GenerationStage::Compositing,
            GenerationStage::Encoding,
            GenerationStage::Done,
        ]
    );
    assert_eq!(sigil.numerology.value(), 9);
    assert_eq!(sigil.letters.as_str(), "LOVE");
    assert_eq!((sigil.width, sigil.height), (48, 48));
}

#[test]
fn letterless_phrase_fails_in_validation() {
    let mut seen = Vec::new();
    let err = sequential()
        .generate_observed("123!!", 24, |s| seen.push(s))
        .unwrap_err();
    assert!(err.is_empty_input());
    assert_eq!(seen, vec![GenerationStage::Validating, GenerationStage::Failed]);
}

#[test]
fn out_of_range_size_fails_before_any_canvas_work() {
    let g = sequential();
    assert!(matches!(g.generate("LOVE", 0), Err(SigilError::Validation(_))));
    assert!(matches!(g.generate("LOVE", 4096), Err(SigilError::Validation(_))));
}

#[test]
fn stage_successors_end_in_terminal_states() {
    let mut s = GenerationStage::Validating;
    let mut steps = 0;
    while let Some(next) = s.next() {
        s = next;
        steps += 1;
    }
    assert_eq!(s, GenerationStage::Done);
    assert_eq!(steps, 5);
    assert!(GenerationStage::Failed.is_terminal());
    assert!(!GenerationStage::Encoding.is_terminal());
}

#[test]
fn rendered_canvas_is_opaque_and_matches_encoded_png() {
    let g = sequential();
    let rendered = g.render_canvas("AAA", 16).unwrap();
    assert!(rendered.canvas.is_opaque());
    assert_eq!(rendered.numerology.value(), 3);
    assert_eq!(rendered.letters.as_str(), "A");

    let sigil = g.generate("AAA", 16).unwrap();
    assert_eq!(sigil.png, encode_png(&rendered.canvas).unwrap());
    assert!(sigil.data_uri().starts_with("data:image/png;base64,iVBOR"));
}

#[test]
fn dedicated_pool_matches_global_pool_and_sequential() {
    let pooled = SigilGenerator::new(SigilOpts {
        threads: Some(2),
        ..SigilOpts::default()
    })
    .unwrap();
    let global = SigilGenerator::new(SigilOpts::default()).unwrap();
    let a = pooled.generate("parity", 20).unwrap();
    let b = global.generate("parity", 20).unwrap();
    let c = sequential().generate("parity", 20).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn generator_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SigilGenerator>();

    let g = Arc::new(sequential());
    let handles: Vec<_> = (0..3)
        .map(|_| {
            let g = Arc::clone(&g);
            std::thread::spawn(move || g.generate("shared", 12).unwrap().png)
        })
        .collect();
    let outs: Vec<Vec<u8>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(outs.windows(2).all(|w| w[0] == w[1]));
}
