use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use planar_area::api::{
    circle_area, is_right_triangle, is_right_triangle_eps, sides_form_triangle, triangle_area,
    AreaError,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod record;

use record::{write_record, Build, Record};

#[derive(Parser)]
#[command(name = "planar-area")]
#[command(about = "Circle and triangle areas, triangle classification")]
struct Cmd {
    /// Write the JSON record here instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Area of a circle
    Circle {
        #[arg(long, allow_hyphen_values = true)]
        radius: f64,
    },
    /// Area of a triangle from its side lengths (Heron)
    Triangle {
        #[command(flatten)]
        sides: SidesArgs,
    },
    /// Whether the triangle is right-angled (exact unless --eps is given)
    Right {
        #[command(flatten)]
        sides: SidesArgs,
        #[arg(long)]
        eps: Option<f64>,
    },
    /// Whether the side lengths form a non-degenerate triangle
    Check {
        #[command(flatten)]
        sides: SidesArgs,
    },
    /// Print the library version and the available operations
    Report,
}

#[derive(clap::Args, Clone, Copy, Serialize)]
struct SidesArgs {
    #[arg(long, allow_hyphen_values = true)]
    a: f64,
    #[arg(long, allow_hyphen_values = true)]
    b: f64,
    #[arg(long, allow_hyphen_values = true)]
    c: f64,
}

const OPS: [&str; 4] = ["circle", "triangle", "right", "check"];

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    run(Cmd::parse())
}

fn run(cmd: Cmd) -> Result<()> {
    let record = match cmd.action {
        Action::Report => {
            println!("{}", serde_json::to_string_pretty(&report())?);
            return Ok(());
        }
        action => evaluate(action)?,
    };
    match cmd.out {
        Some(out) => {
            write_record(&out, &record)?;
            tracing::info!(op = record.op, out = %out.display(), "wrote");
        }
        None => println!("{}", serde_json::to_string_pretty(&record)?),
    }
    Ok(())
}

fn evaluate(action: Action) -> Result<Record> {
    let (op, inputs, value) = match action {
        Action::Circle { radius } => {
            tracing::info!(radius, "circle");
            let area = finite("circle", rejected(circle_area(radius))?)?;
            ("circle", json!({ "radius": radius }), json!(area))
        }
        Action::Triangle { sides } => {
            tracing::info!(a = sides.a, b = sides.b, c = sides.c, "triangle");
            let area = finite("triangle", rejected(triangle_area(sides.a, sides.b, sides.c))?)?;
            ("triangle", json!(sides), json!(area))
        }
        Action::Right { sides, eps } => {
            tracing::info!(a = sides.a, b = sides.b, c = sides.c, eps = ?eps, "right");
            let right = match eps {
                Some(eps) => is_right_triangle_eps(sides.a, sides.b, sides.c, eps),
                None => is_right_triangle(sides.a, sides.b, sides.c),
            };
            let inputs = json!({ "a": sides.a, "b": sides.b, "c": sides.c, "eps": eps });
            ("right", inputs, json!(rejected(right)?))
        }
        Action::Check { sides } => {
            tracing::info!(a = sides.a, b = sides.b, c = sides.c, "check");
            let valid = sides_form_triangle(sides.a, sides.b, sides.c);
            ("check", json!(sides), json!(valid))
        }
        Action::Report => bail!("report is not an evaluation"),
    };
    Ok(Record {
        op,
        inputs,
        value,
        build: Build::current(),
    })
}

fn rejected<T>(res: Result<T, AreaError>) -> Result<T> {
    res.map_err(|err| {
        tracing::warn!(reason = err.message(), "rejected");
        anyhow::Error::new(err)
    })
}

/// JSON has no infinity; an overflowing area is an error, not `null`.
fn finite(op: &str, area: f64) -> Result<f64> {
    if !area.is_finite() {
        tracing::warn!(op, "area overflows f64");
        bail!("{op} area overflows f64 (inputs too large)");
    }
    Ok(area)
}

fn report() -> Value {
    json!({
        "tool": "planar-area",
        "build": Build::current(),
        "ops": OPS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sides(a: f64, b: f64, c: f64) -> SidesArgs {
        SidesArgs { a, b, c }
    }

    fn parse(args: &[&str]) -> Cmd {
        Cmd::try_parse_from(std::iter::once("planar-area").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parses_negative_radius() {
        let cmd = parse(&["circle", "--radius", "-1"]);
        assert!(matches!(cmd.action, Action::Circle { radius } if radius == -1.0));
        let err = evaluate(cmd.action).unwrap_err();
        assert!(err.to_string().contains("radius must be greater than 0"));
    }

    #[test]
    fn triangle_record_is_heron_area() {
        let rec = evaluate(Action::Triangle {
            sides: sides(3.0, 4.0, 5.0),
        })
        .unwrap();
        assert_eq!(rec.op, "triangle");
        assert!((rec.value.as_f64().unwrap() - 6.0).abs() < 1e-12);
        assert_eq!(rec.inputs["b"], 4.0);
    }

    #[test]
    fn overflowing_area_is_an_error_not_null() {
        let err = evaluate(Action::Circle { radius: 1e200 }).unwrap_err();
        assert!(err.to_string().contains("overflows"));
        let err = evaluate(Action::Triangle {
            sides: sides(1e200, 1e200, 1e200),
        })
        .unwrap_err();
        assert!(err.to_string().contains("overflows"));
        // Large but representable areas still succeed.
        let rec = evaluate(Action::Circle { radius: 1e150 }).unwrap();
        assert!(rec.value.as_f64().unwrap().is_finite());
    }

    #[test]
    fn right_uses_eps_only_when_given() {
        let s = sides(1.0, 1.0, 2.0_f64.sqrt());
        let exact = evaluate(Action::Right { sides: s, eps: None }).unwrap();
        assert_eq!(exact.value, json!(false));
        let tolerant = evaluate(Action::Right {
            sides: s,
            eps: Some(1e-9),
        })
        .unwrap();
        assert_eq!(tolerant.value, json!(true));
    }

    #[test]
    fn check_never_fails() {
        let rec = evaluate(Action::Check {
            sides: sides(1.0, 1.0, 2.0),
        })
        .unwrap();
        assert_eq!(rec.value, json!(false));
    }

    #[test]
    fn report_lists_ops_and_version() {
        let doc = report();
        assert_eq!(doc["tool"], "planar-area");
        assert_eq!(doc["build"]["version"], planar_area::VERSION);
        assert_eq!(doc["ops"], json!(["circle", "triangle", "right", "check"]));
        run(parse(&["report"])).unwrap();
    }

    #[test]
    fn run_fails_on_invalid_sides() {
        let err = run(parse(&["right", "--a", "1", "--b", "1", "--c", "5"])).unwrap_err();
        assert!(err.to_string().contains("sides do not form a valid triangle"));
    }

    #[test]
    fn run_writes_record_to_out() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("area.json");
        let out_arg = out.to_string_lossy().into_owned();
        run(parse(&["circle", "--radius", "2", "--out", &out_arg])).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["op"], "circle");
        assert_eq!(parsed["inputs"]["radius"], 2.0);
    }
}
