use crate::args;
use crate::geo_2d::Point;
use crate::spiral::{
    Parity,
    RendererChoice,
    RenderArgs,
    SolverCfg,
    SpiralSpec,
    WaveguideTemplate,
};
use serde::{Serialize, Deserialize};

/// Arguments for the spiral process, as read from a config file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SpiralArgs {
    /// Waveguide routing template.
    #[serde(default, alias = "wgt")]
    pub template: WaveguideTemplate,

    /// Maximum outer width of the spiral.
    pub width: f64,

    /// Maximum outer height of the spiral.
    pub height: f64,

    /// Target path length.
    pub length: f64,

    /// Gap between parallel runs (defaults to three cladding widths).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,

    /// Side of the input port the spiral body sits on.
    #[serde(default)]
    pub parity: Parity,

    /// Center of the whole spiral.
    #[serde(default)]
    pub center: Point,

    /// Renderer name.
    #[serde(default = "SpiralArgs::default_renderer")]
    pub renderer: String,

    /// Renderer settings.
    #[serde(default)]
    pub render: RenderArgs,

    /// Height solver settings.
    #[serde(default)]
    pub solver: SolverCfg,

    /// Output path for the spiral file (must be json).
    #[serde(default, alias = "output", alias = "out", alias = "o")]
    pub output_path: Option<String>,
}
impl SpiralArgs {
    pub fn default_renderer() -> String {
        "bend".to_string()
    }

    /// Example arguments, used for the `example` command.
    pub fn example() -> Self {
        SpiralArgs{
            template: WaveguideTemplate::default(),
            width: 1000.0,
            height: 1000.0,
            length: 10000.0,
            spacing: None,
            parity: Parity::Right,
            center: Point::zero(),
            renderer: SpiralArgs::default_renderer(),
            render: RenderArgs::default(),
            solver: SolverCfg::default(),
            output_path: Some("OPTIONAL/PATH/TO/OUTPUT/FILE.json".to_string()),
        }
    }
}

/// Spiral target struct.
/// Contains the validated spec, the renderer and the raw arguments.
#[derive(Debug)]
pub struct SpiralTarget {
    /// Validated spiral parameters.
    pub spec: SpiralSpec,
    /// Renderer the waypoints are handed to.
    pub renderer: RendererChoice,
    /// Spiral arguments.
    pub spiral_args: SpiralArgs,
}
impl SpiralTarget {
    /// Construct a spiral target from parsed arguments.
    pub fn from_args(spiral_args: SpiralArgs) -> args::ProcResult<Self> {
        if let Some(output_path) = spiral_args.output_path.as_ref() {
            if !output_path.ends_with(".json") {
                args::err_str("Spiral output path must end with .json")?;
            }
        }

        let spec = SpiralSpec::new(
            &spiral_args.template,
            spiral_args.width,
            spiral_args.height,
            spiral_args.length,
            spiral_args.spacing,
            spiral_args.parity,
            spiral_args.center,
        )?;
        spiral_args.template.validate()?;

        let renderer = RendererChoice::from_name(&spiral_args.renderer, &spiral_args.render)?;

        Ok(SpiralTarget{spec, renderer, spiral_args})
    }

    /// Construct a spiral target from a config file (json, toml or yaml).
    /// `output_path` and `renderer` replace the file's values when given.
    pub fn from_cfg_file(
        cfg_file: &str,
        output_path: Option<&str>,
        renderer: Option<&str>,
    ) -> args::ProcResult<Self> {
        let mut spiral_args: SpiralArgs = crate::io::read_cfg_file(cfg_file)?;
        if let Some(output_path) = output_path {
            spiral_args.output_path = Some(output_path.to_string());
        }
        if let Some(renderer) = renderer {
            spiral_args.renderer = renderer.to_string();
        }
        SpiralTarget::from_args(spiral_args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{CfgFormat, cfg_to_string, parse_cfg_str};
    use crate::spiral::PathRenderer;
    use strum::IntoEnumIterator;

    #[test]
    fn minimal_yaml_fills_defaults() {
        let yaml = "width: 800\nheight: 600\nlength: 6000\n";
        let spiral_args: SpiralArgs = parse_cfg_str(yaml, CfgFormat::Yaml).unwrap();
        assert_eq!(spiral_args.template, WaveguideTemplate::default());
        assert_eq!(spiral_args.parity, Parity::Right);
        assert_eq!(spiral_args.renderer, "bend");
        assert_eq!(spiral_args.solver, SolverCfg::default());

        let target = SpiralTarget::from_args(spiral_args).unwrap();
        assert_eq!(target.spec.spacing, 30.0);
    }

    #[test]
    fn example_survives_every_format() {
        let example = SpiralArgs::example();
        for format in CfgFormat::iter() {
            let buffer = cfg_to_string(&example, format).unwrap();
            let parsed: SpiralArgs = parse_cfg_str(&buffer, format).unwrap();
            assert_eq!(parsed, example, "{:?}", format);
        }
    }

    #[test]
    fn reads_solver_settings() {
        let yaml = "width: 800\nheight: 600\nlength: 6000\nparity: left\nsolver:\n  max_iterations: 7\n";
        let spiral_args: SpiralArgs = parse_cfg_str(yaml, CfgFormat::Yaml).unwrap();
        assert_eq!(spiral_args.solver.max_iterations, 7);
        assert_eq!(spiral_args.parity, Parity::Left);
    }

    #[test]
    fn rejects_bad_output_and_renderer() {
        let mut spiral_args = SpiralArgs::example();
        spiral_args.output_path = Some("spiral.gds".to_string());
        assert!(SpiralTarget::from_args(spiral_args).is_err());

        let mut spiral_args = SpiralArgs::example();
        spiral_args.renderer = "polygon".to_string();
        assert!(SpiralTarget::from_args(spiral_args).is_err());
    }

    #[test]
    fn rejects_huge_arc_segment_count() {
        let mut spiral_args = SpiralArgs::example();
        spiral_args.render.arc_segments = usize::MAX / 2;
        assert!(matches!(
            SpiralTarget::from_args(spiral_args),
            Err(args::ArgError::SpiralError(crate::spiral::SpiralError::InvalidSpec(_)))
        ));
    }

    #[test]
    fn cfg_file_overrides_replace_file_values() {
        let cfg_file = std::env::temp_dir()
            .join(format!("wgspiral-cfg-{}-overrides.yaml", std::process::id()))
            .to_string_lossy()
            .into_owned();
        crate::io::write_to_file(&cfg_file, "width: 1000\nheight: 1000\nlength: 10000\noutput_path: file.json\n").unwrap();

        let target = SpiralTarget::from_cfg_file(&cfg_file, None, None).unwrap();
        assert_eq!(target.spiral_args.output_path.as_deref(), Some("file.json"));
        assert_eq!(target.renderer.get_renderer_name(), "Bend");

        let target = SpiralTarget::from_cfg_file(&cfg_file, Some("cli.json"), Some("manhattan")).unwrap();
        assert_eq!(target.spiral_args.output_path.as_deref(), Some("cli.json"));
        assert_eq!(target.spiral_args.renderer, "manhattan");
        assert_eq!(target.renderer.get_renderer_name(), "Manhattan");

        let _ = std::fs::remove_file(cfg_file);
    }
}
