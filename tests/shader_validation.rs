//! WGSL shaders shipped with the renderer must parse and validate.

use glyph_swarm::gpu::{BLIT_SHADER, DISC_SHADER};

fn validate_wgsl(code: &str) -> Result<naga::Module, String> {
    let module = naga::front::wgsl::parse_str(code)
        .map_err(|e| format!("WGSL parse error: {}", e.emit_to_string(code)))?;

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .map_err(|e| format!("WGSL validation error: {:?}", e))?;

    Ok(module)
}

fn entry_points(module: &naga::Module) -> Vec<&str> {
    module.entry_points.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn test_disc_shader_validates() {
    let module = validate_wgsl(DISC_SHADER).unwrap();
    let names = entry_points(&module);
    for expected in ["vs_fade", "fs_fade", "vs_disc", "fs_disc"] {
        assert!(names.contains(&expected), "missing {expected}");
    }
}

#[test]
fn test_blit_shader_validates() {
    let module = validate_wgsl(BLIT_SHADER).unwrap();
    assert_eq!(entry_points(&module), ["vs_blit", "fs_blit"]);
}

#[test]
fn test_disc_uniform_block_is_48_bytes() {
    let module = validate_wgsl(DISC_SHADER).unwrap();
    let uniforms = module
        .types
        .iter()
        .find(|(_, ty)| ty.name.as_deref() == Some("Uniforms"))
        .map(|(_, ty)| ty)
        .unwrap();
    match &uniforms.inner {
        naga::TypeInner::Struct { span, .. } => {
            assert_eq!(*span as usize, std::mem::size_of::<glyph_swarm::gpu::Uniforms>());
        }
        other => panic!("unexpected {other:?}"),
    }
}
