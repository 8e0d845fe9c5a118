//! End-to-end conversion scenarios over whole CSS documents.

use recolor::prelude::*;

fn convert(text: &str, format: OutputFormat, css_syntax: bool) -> String {
    convert_text(text, &ConversionConfig::new(format, css_syntax))
}

#[test]
fn test_mixed_document_to_oklch() {
    let css = "\
:root {
  --primary: #6750A4;
  --overlay: rgb(103 80 164 / 0.5);
}
.card { color: hsl(256, 34%, 48%); margin: 10px; }
";
    let expected = "\
:root {
  --primary: oklch(49.55% 0.1305 293.71);
  --overlay: oklch(49.55% 0.1305 293.71 / .5);
}
.card { color: oklch(49.73% 0.1289 293.37); margin: 10px; }
";
    assert_eq!(convert(css, OutputFormat::Oklch, true), expected);
}

#[test]
fn test_mixed_document_to_hex() {
    let css = ".a { c: rgb(255, 0, 0); } .b { c: hsl(120, 100%, 25%); } .c { c: #ABC; }";
    let out = convert(css, OutputFormat::Hex, true);
    assert_eq!(out, ".a { c: #ff0000; } .b { c: #008000; } .c { c: #aabbcc; }");
}

#[test]
fn test_exactly_three_substitutions_interleaved_text_untouched() {
    let css = "pre #112233 mid rgb(1,2,3) more hsl(0, 0%, 0%) post";
    let out = convert(css, OutputFormat::Rgb, true);
    assert_eq!(out, "pre rgb(17, 34, 51) mid rgb(1, 2, 3) more rgb(0, 0, 0) post");
}

#[test]
fn test_bare_syntax_for_custom_properties() {
    assert_eq!(convert("#6750a4", OutputFormat::Rgb, false), "103 80 164");
    assert_eq!(convert("#6750a4", OutputFormat::Hex, false), "6750a4");
    assert_eq!(
        convert("rgb(103, 80, 164)", OutputFormat::Oklch, false),
        "49.55 0.1305 293.71"
    );
}

#[test]
fn test_alpha_presence_preserved_across_notations() {
    let translucent = "rgba(103, 80, 164, 0.5)";
    assert_eq!(convert(translucent, OutputFormat::Hex, true), "#6750a480");
    assert_eq!(
        convert(translucent, OutputFormat::Hsl, true),
        "hsla(256, 34.4%, 47.8%, 0.5)"
    );
    assert_eq!(
        convert(translucent, OutputFormat::Oklch, true),
        "oklch(49.55% 0.1305 293.71 / .5)"
    );

    let opaque = "rgba(103, 80, 164, 1)";
    for format in [OutputFormat::Hex, OutputFormat::Rgb, OutputFormat::Hsl] {
        let out = convert(opaque, format, true);
        assert!(!out.contains('/'), "unexpected alpha in {out:?}");
        assert!(!out.starts_with("rgba"), "unexpected alpha in {out:?}");
        assert!(!out.starts_with("hsla"), "unexpected alpha in {out:?}");
    }
}

#[test]
fn test_oklch_round_trip_stays_close() {
    // oklch -> rgb quantizes to bytes; converting back shifts the
    // displayed digits only slightly
    let rgb = convert("oklch(59.69% 0.154 292.34)", OutputFormat::Rgb, true);
    assert_eq!(rgb, "rgb(131, 106, 210)");
    let back = convert(&rgb, OutputFormat::Oklch, true);
    assert_eq!(back, "oklch(59.65% 0.1541 292.14)");
}

#[test]
fn test_collaborator_retokenization_agrees() {
    // The hover-preview layer re-runs the tokenizer over input and
    // output and aligns the lists index by index.
    let css = "a{c:#f00} b{c:rgb(0, 255, 0)} c{c:oklch(50% 0.1 120)}";
    let input_count = tokens(css).count();
    let output = convert(css, OutputFormat::Hsl, true);
    let output_tokens: Vec<_> = tokens(&output).map(|t| t.text.to_string()).collect();
    assert_eq!(output_tokens.len(), input_count);
    assert!(output_tokens.iter().all(|t| t.starts_with("hsl")));

    // Scanning the same text twice yields the same list
    let again: Vec<_> = tokens(&output).map(|t| t.text.to_string()).collect();
    assert_eq!(output_tokens, again);
}

#[test]
fn test_malformed_tokens_are_identity_transforms() {
    let css = "a: #abcd1; b: rgb(nope); c: hsl(; d: oklch(1 2);";
    let out = convert(css, OutputFormat::Hex, true);
    assert_eq!(out, css);
}

#[test]
fn test_whole_document_without_tokens_is_identity() {
    let css = "/* a comment */ .x { margin: calc(10px + 2em); color: var(--primary); }";
    assert_eq!(convert(css, OutputFormat::Oklch, true), css);
}
