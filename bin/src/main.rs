use anyhow::anyhow;
use ast::Ast;
use clap::Parser;
use eval::evaluate;
use log::debug;

#[derive(clap::Parser)]
struct Args {
    /// Only run cases whose rendered expression contains this substring.
    filter: Option<String>,
}

fn run_case(expr: &Ast, expected: &Ast) -> anyhow::Result<()> {
    let result = evaluate(expr);
    println!("test: {:<35} --> {}", expr.to_string(), result);

    let want = evaluate(expected);
    debug!("expected: {} --> {}", expected, want);
    if result != want {
        return Err(anyhow!("TEST FAILED: {} evaluated to {}, expected {}", expr, result, want));
    }
    Ok(())
}

fn cases() -> anyhow::Result<Vec<(Ast, Ast)>> {
    let i = Ast::int;
    let b = Ast::bool_from_bit;
    let invalid = || Ast::int(0) * Ast::boolean(false);

    Ok(vec![
        (i(3), i(3)),
        (i(10) + i(4), i(14)),
        (i(10) - i(4), i(6)),
        (i(10) * i(4), i(40)),
        (i(10) / i(4), i(2)),
        ((i(5) + i(2) - i(3) + i(6)) * i(5), i(50)),
        (b(1)?.equals(b(1)?), b(1)?),
        (b(1)?.equals(b(0)?), b(0)?),
        (b(1)? & b(1)?, b(1)?),
        (b(1)? & b(0)?, b(0)?),
        (b(0)? & b(1)?, b(0)?),
        (b(0)? & b(0)?, b(0)?),
        (b(1)? | b(1)?, b(1)?),
        (b(1)? | b(0)?, b(1)?),
        (b(0)? | b(1)?, b(1)?),
        (b(0)? | b(0)?, b(0)?),
        (!b(0)?, b(1)?),
        (!b(1)?, b(0)?),
        (((i(5) + i(2)) * i(2)).equals(i(14)), b(1)?),
        (((i(5) + i(2)) * i(2)).equals(i(15)), b(0)?),
        (!((i(5) + i(2)) * i(2)).equals(i(15)), b(1)?),
        (i(1) + b(1)?, invalid()),
        (b(1)? - i(1), invalid()),
        (b(1)? * i(1), invalid()),
        (i(1) / b(1)?, invalid()),
        (i(1) & i(1), invalid()),
        (i(1) | i(1), invalid()),
        (i(1).equals(b(1)?), invalid()),
        (!i(1), invalid()),
        (((i(5) + i(2)) * i(2)).equals(b(1)? & b(0)?), invalid()),
    ])
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    for (expr, expected) in cases()? {
        if let Some(filter) = &args.filter {
            if !expr.to_string().contains(filter.as_str()) {
                continue;
            }
        }
        run_case(&expr, &expected)?;
    }

    println!("\nAll tests passed!");
    Ok(())
}
