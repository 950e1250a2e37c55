// tests/scene_config.rs
use symbios_sketch::{
    ConfigError, Scene, SceneError, Style, TurtleConfig, TurtleInterpreter, TurtleOverrides, presets,
};

const SCENE: &str = r#"
output_dir = "renders"

[[system]]
name = "dragon"
axiom = "F"
generations = 4
rules = { F = "F+G", G = "F-G" }
turtle = { angle = 90.0 }
renders = [
    { file = "dragon.svg", style = "rainbow", scale = 3.0 },
    { file = "dragon_plain.svg", style = "plain" },
]

[[system]]
name = "tree"
preset = "tree"
generations = 2
renders = [{ file = "tree.svg", style = "sparkly" }]
"#;

#[test]
fn test_parse_scene() {
    let scene = Scene::from_toml_str(SCENE).unwrap();

    assert_eq!(scene.output_dir.to_str(), Some("renders"));
    assert_eq!(scene.systems.len(), 2);

    let dragon = &scene.systems[0];
    let grammar = dragon.grammar().unwrap();
    assert_eq!(grammar.axiom(), "F");
    assert_eq!(grammar.rule('G'), Some("F-G"));
    assert_eq!(
        dragon.turtle_config().unwrap(),
        TurtleConfig {
            angle_degrees: 90.0,
            ..TurtleConfig::default()
        }
    );
    assert_eq!(dragon.renders[0].style, Style::Rainbow);
    assert_eq!(dragon.renders[0].scale, 3.0);
    // Scale defaults to 10 when omitted.
    assert_eq!(dragon.renders[1].scale, 10.0);

    let tree = &scene.systems[1];
    assert_eq!(tree.grammar().unwrap(), presets::tree_3d().grammar);
    assert_eq!(tree.turtle_config().unwrap().branch_width_factor, 0.8);
    // Unrecognized style names render plain.
    assert_eq!(tree.renders[0].style, Style::Plain);
}

#[test]
fn test_multi_char_rule_key_is_rejected() {
    let source = r#"
[[system]]
name = "bad"
axiom = "F"
rules = { FF = "F" }
"#;
    match Scene::from_toml_str(source) {
        Err(ConfigError::InvalidRuleSymbol { system, key }) => {
            assert_eq!(system, "bad");
            assert_eq!(key, "FF");
        }
        other => panic!("expected InvalidRuleSymbol, got {other:?}"),
    }
}

#[test]
fn test_missing_axiom_and_unknown_preset() {
    let missing = "[[system]]\nname = \"empty\"\n";
    assert!(matches!(
        Scene::from_toml_str(missing),
        Err(ConfigError::MissingAxiom { .. })
    ));

    let unknown = "[[system]]\nname = \"x\"\npreset = \"fern\"\n";
    assert!(matches!(
        Scene::from_toml_str(unknown),
        Err(ConfigError::UnknownPreset { .. })
    ));

    assert!(matches!(
        Scene::from_toml_str("system = 3"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_axiom_overrides_preset() {
    let source = r#"
[[system]]
name = "koch-triangle"
preset = "koch"
axiom = "F--F--F"
"#;
    let scene = Scene::from_toml_str(source).unwrap();
    let grammar = scene.systems[0].grammar().unwrap();
    assert_eq!(grammar.axiom(), "F--F--F");
    assert_eq!(grammar.rule('F'), Some("F+F-F-F+F"));
    assert_eq!(scene.systems[0].turtle_config().unwrap().angle_degrees, 90.0);
}

#[test]
fn test_run_scene_writes_renders() {
    let dir = tempfile::tempdir().unwrap();
    let mut scene = Scene::from_toml_str(SCENE).unwrap();
    scene.output_dir = dir.path().join("nested");

    let written = scene.run().unwrap();

    assert_eq!(written.len(), 3);
    for summary in &written {
        assert!(summary.path.exists(), "{} missing", summary.path.display());
        assert!(summary.segments > 0);
    }
    assert_eq!(written[0].style, Style::Rainbow);
}

#[test]
fn test_empty_geometry_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let source = r#"
[[system]]
name = "nothing"
axiom = "G+G"
renders = [{ file = "nothing.svg" }]
"#;
    let mut scene = Scene::from_toml_str(source).unwrap();
    scene.output_dir = dir.path().to_path_buf();

    let written = scene.run().unwrap();
    assert!(written.is_empty());
    assert!(!dir.path().join("nothing.svg").exists());
}

#[test]
fn test_gallery_is_valid() {
    let scene = Scene::gallery("out");
    scene.validate().unwrap();

    let files: Vec<_> = scene
        .systems
        .iter()
        .flat_map(|s| s.renders.iter().map(|r| r.file.clone()))
        .collect();
    assert_eq!(files.len(), 11);
    for style in Style::ALL {
        assert!(
            scene.systems.iter().flat_map(|s| &s.renders).any(|r| r.style == style),
            "gallery never renders {style}"
        );
    }
}

#[test]
fn test_presets_are_named_uniquely() {
    let all = presets::all();
    for preset in &all {
        assert_eq!(presets::by_name(preset.name).as_ref(), Some(preset));
    }
    assert!(presets::by_name("fern").is_none());
}

#[test]
fn test_example_scene_parses() {
    let scene = Scene::from_toml_str(include_str!("../scenes/example.toml")).unwrap();
    assert_eq!(scene.systems.len(), 3);
    assert_eq!(scene.systems[2].renders[0].style, Style::Depth);
}

fn turtle_error(source: &str) -> (String, &'static str) {
    match Scene::from_toml_str(source) {
        Err(ConfigError::InvalidTurtleParameter { parameter, system, .. }) => (system, parameter),
        other => panic!("expected InvalidTurtleParameter, got {other:?}"),
    }
}

#[test]
fn test_negative_width_factor_is_rejected() {
    let (system, parameter) = turtle_error(
        "[[system]]\nname = \"taper\"\naxiom = \"[F]\"\nturtle = { width_factor = -2.0 }\n",
    );
    assert_eq!(system, "taper");
    assert_eq!(parameter, "width_factor");

    let (_, parameter) =
        turtle_error("[[system]]\nname = \"back\"\naxiom = \"F\"\nturtle = { step = -1.0 }\n");
    assert_eq!(parameter, "step");

    let (_, parameter) =
        turtle_error("[[system]]\nname = \"inf\"\naxiom = \"F\"\nturtle = { angle = inf }\n");
    assert_eq!(parameter, "angle");
}

#[test]
fn test_accepted_turtle_never_draws_negative_width() {
    let scene = Scene::from_toml_str(
        "[[system]]\nname = \"flat\"\naxiom = \"[F[F]]\"\nturtle = { width_factor = 0.0 }\n",
    )
    .unwrap();
    let config = scene.systems[0].turtle_config().unwrap();
    let geometry = TurtleInterpreter::new(config).interpret("[F[F]]");

    assert_eq!(geometry.len(), 2);
    assert!(geometry.iter().all(|s| s.width >= 0.0));
}

#[test]
fn test_bad_render_scale_is_rejected() {
    for scale in ["0.0", "-3.0", "nan"] {
        let source = format!(
            "[[system]]\nname = \"s\"\naxiom = \"F\"\nrenders = [{{ file = \"s.svg\", scale = {scale} }}]\n"
        );
        match Scene::from_toml_str(&source) {
            Err(ConfigError::InvalidRenderScale { system, file, .. }) => {
                assert_eq!(system, "s");
                assert_eq!(file.to_str(), Some("s.svg"));
            }
            other => panic!("scale {scale}: expected InvalidRenderScale, got {other:?}"),
        }
    }
}

#[test]
fn test_run_rejects_invalid_scene_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let mut scene = Scene::gallery(dir.path());
    scene.systems[0].renders[1].scale = -1.0;

    assert!(matches!(
        scene.run(),
        Err(SceneError::Config(ConfigError::InvalidRenderScale { .. }))
    ));
    assert!(!dir.path().join("dragon_original.svg").exists());
}

#[test]
fn test_partial_turtle_table_keeps_preset_values() {
    // The tree preset tapers branches by 0.8; only the angle is overridden here.
    let source = r#"
[[system]]
name = "wide tree"
preset = "tree"
turtle = { angle = 30.0 }
"#;
    let scene = Scene::from_toml_str(source).unwrap();
    let config = scene.systems[0].turtle_config().unwrap();

    assert_eq!(config.angle_degrees, 30.0);
    assert_eq!(config.branch_width_factor, 0.8);
    assert_eq!(config.step_length, presets::tree_3d().turtle.step_length);
}

#[test]
fn test_overrides_apply_field_by_field() {
    let base = TurtleConfig::new(90.0, 2.0).with_branch_width_factor(0.5);
    let overrides = TurtleOverrides {
        step: Some(3.0),
        ..Default::default()
    };
    assert_eq!(
        overrides.apply(base.clone()),
        TurtleConfig::new(90.0, 3.0).with_branch_width_factor(0.5)
    );
    assert_eq!(TurtleOverrides::default().apply(base.clone()), base);
}
