//! WGSL program for the device-side displacement hook.

/// Vertex stage displaces y by the same height field as
/// [`WaveSurfaceState::height_at`](super::WaveSurfaceState::height_at); the
/// fragment stage shades flat or with the Fresnel blend per `shading_mode`.
/// Bind [`WaveUniforms`](super::WaveUniforms) at group 0, binding 0.
pub const WAVE_SHADER_WGSL: &str = include_str!("wave.wgsl");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::WaveUniforms;
    use std::mem::{offset_of, size_of};

    fn parse() -> naga::Module {
        naga::front::wgsl::parse_str(WAVE_SHADER_WGSL).expect("wave shader should parse")
    }

    #[test]
    fn test_shader_validates() {
        let module = parse();
        let result = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::empty(),
        )
        .validate(&module);
        assert!(result.is_ok(), "validation failed: {:?}", result.err());
    }

    #[test]
    fn test_shader_entry_points() {
        let module = parse();
        let stages: Vec<(&str, naga::ShaderStage)> = module
            .entry_points
            .iter()
            .map(|ep| (ep.name.as_str(), ep.stage))
            .collect();
        assert!(stages.contains(&("vs_main", naga::ShaderStage::Vertex)));
        assert!(stages.contains(&("fs_main", naga::ShaderStage::Fragment)));
    }

    #[test]
    fn test_uniform_layout_matches_rust_struct() {
        let module = parse();
        let (members, span) = module
            .types
            .iter()
            .find_map(|(_, ty)| match (&ty.name, &ty.inner) {
                (Some(name), naga::TypeInner::Struct { members, span }) if name == "WaveUniforms" => {
                    Some((members.clone(), *span))
                }
                _ => None,
            })
            .expect("WaveUniforms struct in shader");

        assert_eq!(span as usize, size_of::<WaveUniforms>());

        let offset = |name: &str| {
            members
                .iter()
                .find(|m| m.name.as_deref() == Some(name))
                .map(|m| m.offset as usize)
                .expect("member present")
        };
        assert_eq!(offset("view_proj"), offset_of!(WaveUniforms, view_proj));
        assert_eq!(offset("camera_pos"), offset_of!(WaveUniforms, camera_pos));
        assert_eq!(offset("time"), offset_of!(WaveUniforms, time));
        assert_eq!(offset("base_color"), offset_of!(WaveUniforms, base_color));
        assert_eq!(offset("amplitude"), offset_of!(WaveUniforms, amplitude));
        assert_eq!(offset("frequency"), offset_of!(WaveUniforms, frequency));
        assert_eq!(offset("level"), offset_of!(WaveUniforms, level));
        assert_eq!(offset("shading_mode"), offset_of!(WaveUniforms, shading_mode));
    }
}
