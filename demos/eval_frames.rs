use exprtree::{AllocRegion, Compiler, EngineConfig, FunctionRegistry, Value, Variables};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = EngineConfig::default().with_constant("fps");
    let compiler = Compiler::new(config, FunctionRegistry::with_builtins());

    let mut vars = Variables::new();
    vars.insert("fps", 30.0);
    vars.insert("frame", 0);
    vars.insert("opacity", 0.0);

    // `fps` folds to a literal at compile time; `frame` stays dynamic.
    let mut expr = compiler.compile(
        "opacity = clamp(lerp(0.4, 1.0, frame / fps / 1.5), 0.0, 1.0); opacity > 0.9",
        &vars,
    )?;
    expr.configure_no_alloc()?;
    println!("tree: {expr}");

    for f in [0, 1, 2, 9, 10, 19, 45] {
        vars.insert("frame", f);
        let (bright, stats) = AllocRegion::measure(|| expr.execute(&mut vars));
        let bright = bright?;
        let opacity = vars.get_named("opacity").cloned().unwrap_or(Value::Null);
        println!(
            "frame {f}: opacity={opacity} bright={bright} allocations={}",
            stats.allocations
        );
    }

    Ok(())
}
