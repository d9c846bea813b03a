use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use exprtree::{
    Compiler, EngineConfig, FloatPrecision, FunctionRegistry, IntPrecision, Variables,
};

#[derive(Parser, Debug)]
#[command(name = "exprtree", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile and evaluate one expression.
    Eval(EvalArgs),
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Expression source.
    expr: String,

    /// Bind a variable before evaluation (`name=expr`, evaluated in order).
    #[arg(long = "var", value_name = "NAME=EXPR")]
    vars: Vec<String>,

    /// Engine configuration JSON. Flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Integer literal width.
    #[arg(long = "int")]
    int_precision: Option<IntArg>,

    /// Float literal representation.
    #[arg(long = "float")]
    float_precision: Option<FloatArg>,

    /// Treat a bound variable as a compile-time constant.
    #[arg(long = "const", value_name = "NAME")]
    constants: Vec<String>,

    /// Reject statically known type conflicts at compile time.
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Skip the optimizer.
    #[arg(long, default_value_t = false)]
    no_opt: bool,

    /// Print the postfix form before evaluating.
    #[arg(long, default_value_t = false)]
    postfix: bool,

    /// Print the (optimized) tree before evaluating.
    #[arg(long, default_value_t = false)]
    tree: bool,

    /// Execute this many times in no-allocation mode and report the last result.
    #[arg(long, default_value_t = 1)]
    repeat: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum IntArg {
    I32,
    I64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FloatArg {
    F32,
    F64,
    Decimal,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Eval(args) => cmd_eval(args),
    }
}

fn load_config(args: &EvalArgs) -> anyhow::Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config '{}'", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parse config '{}'", path.display()))?
        }
        None => EngineConfig::default(),
    };
    if let Some(p) = args.int_precision {
        config.int_precision = match p {
            IntArg::I32 => IntPrecision::I32,
            IntArg::I64 => IntPrecision::I64,
        };
    }
    if let Some(p) = args.float_precision {
        config.float_precision = match p {
            FloatArg::F32 => FloatPrecision::F32,
            FloatArg::F64 => FloatPrecision::F64,
            FloatArg::Decimal => FloatPrecision::Decimal,
        };
    }
    config.constants.extend(args.constants.iter().cloned());
    config.strict |= args.strict;
    Ok(config)
}

fn bind_vars(specs: &[String], compiler: &Compiler) -> anyhow::Result<Variables> {
    // Binding values are themselves expressions, compiled without constants so that a
    // later `--const` cannot refer to a name that is not bound yet.
    let binder = Compiler::new(
        EngineConfig {
            constants: Default::default(),
            ..compiler.config().clone()
        },
        compiler.functions().clone(),
    );
    let mut vars = Variables::new();
    for spec in specs {
        let (name, src) = spec
            .split_once('=')
            .with_context(|| format!("--var '{spec}' is not of the form NAME=EXPR"))?;
        let name = name.trim();
        let value = binder
            .compile(src, &vars)
            .and_then(|mut e| e.execute(&mut vars))
            .with_context(|| format!("evaluate --var '{name}'"))?;
        vars.insert(name, value);
    }
    Ok(vars)
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let compiler = Compiler::new(config, FunctionRegistry::with_builtins());
    let mut vars = bind_vars(&args.vars, &compiler)?;

    if args.postfix {
        let rpn = compiler.postfix(&args.expr).context("parse expression")?;
        println!("postfix: {}", rpn.join(" "));
    }

    let mut expr = if args.no_opt {
        compiler.compile_unoptimized(&args.expr, &vars)
    } else {
        compiler.compile(&args.expr, &vars)
    }
    .context("compile expression")?;

    if args.tree {
        println!("tree: {expr}");
    }

    if args.repeat > 1 {
        expr.configure_no_alloc()?;
    }
    let mut result = expr.execute(&mut vars).context("evaluate expression")?;
    for _ in 1..args.repeat {
        result = expr.execute(&mut vars).context("evaluate expression")?;
    }

    println!("{result}");
    Ok(())
}
