// Host-side checks on the WGSL sources shared by the two pipelines.

static INSTANCED_WGSL: &str = include_str!("../shaders/instanced.wgsl");
static RIBBON_WGSL: &str = include_str!("../shaders/ribbon.wgsl");

fn globals_block(src: &str) -> String {
    let start = src.find("struct Globals").expect("Globals struct");
    let end = start + src[start..].find("};").expect("end of Globals");
    // field names and types only, comments stripped
    src[start..end]
        .lines()
        .map(|l| l.split("//").next().unwrap_or("").trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn both_pipelines_agree_on_the_globals_layout() {
    assert_eq!(globals_block(INSTANCED_WGSL), globals_block(RIBBON_WGSL));
    assert!(globals_block(RIBBON_WGSL).contains("eye: vec4<f32>"));
}

#[test]
fn ribbon_is_opaque_red_satin_with_growth_discard() {
    assert!(RIBBON_WGSL.contains("DEEP_RED"));
    assert!(RIBBON_WGSL.contains("in.uv.x > R.growth"));
    assert!(RIBBON_WGSL.contains("front_facing"));
    assert!(RIBBON_WGSL.contains("vec4<f32>(color, 1.0)"));
}
