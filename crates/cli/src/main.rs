use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use topocheck::graph::EdgeSetStrategy;
use topocheck::topology::BoundaryNodeRule;
use topocheck::{Geometry, GraphCfg};
use tracing_subscriber::fmt::SubscriberBuilder;

mod doc;
mod provenance;

use doc::{EntryReport, InputDoc, Report};
use provenance::{current_git_rev, write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "topocheck")]
#[command(about = "Simplicity and area-consistency checks for 2D geometry documents")]
struct Cmd {
    /// Optional run tag; propagated to provenance and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Test every geometry for simplicity
    Simple(RunArgs),
    /// Test every polygonal geometry for node and ring consistency
    Area(RunArgs),
    /// Run both predicates
    Check(RunArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct RunArgs {
    /// JSON document with a `geometries` array
    #[arg(long)]
    input: PathBuf,
    /// Report path; a `<stem>.provenance.json` sidecar is written next to it
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = RuleArg::Mod2)]
    rule: RuleArg,
    #[arg(long, value_enum, default_value_t = StrategyArg::Sweep)]
    strategy: StrategyArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum RuleArg {
    Mod2,
    AtMostOne,
    EndPoint,
    Multivalent,
}

impl From<RuleArg> for BoundaryNodeRule {
    fn from(r: RuleArg) -> Self {
        match r {
            RuleArg::Mod2 => BoundaryNodeRule::Mod2,
            RuleArg::AtMostOne => BoundaryNodeRule::AtMostOne,
            RuleArg::EndPoint => BoundaryNodeRule::EndPoint,
            RuleArg::Multivalent => BoundaryNodeRule::Multivalent,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Simple,
    Sweep,
}

impl From<StrategyArg> for EdgeSetStrategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Simple => EdgeSetStrategy::Simple,
            StrategyArg::Sweep => EdgeSetStrategy::Sweep,
        }
    }
}

/// Which predicates a run evaluates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Checks {
    simple: bool,
    area: bool,
}

impl Checks {
    const SIMPLE: Checks = Checks {
        simple: true,
        area: false,
    };
    const AREA: Checks = Checks {
        simple: false,
        area: true,
    };
    const BOTH: Checks = Checks {
        simple: true,
        area: true,
    };

    fn name(self) -> &'static str {
        match (self.simple, self.area) {
            (true, false) => "simple",
            (false, true) => "area",
            _ => "check",
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Simple(args) => run(&args, Checks::SIMPLE, cmd.tag),
        Action::Area(args) => run(&args, Checks::AREA, cmd.tag),
        Action::Check(args) => run(&args, Checks::BOTH, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn run(args: &RunArgs, checks: Checks, tag: Option<String>) -> Result<()> {
    tracing::info!(
        command = checks.name(),
        input = %args.input.display(),
        out = %args.out.display(),
        tag = ?tag,
        "run"
    );
    let input = read_input(&args.input)?;
    let cfg = GraphCfg {
        boundary_rule: args.rule.into(),
        strategy: args.strategy.into(),
        ..GraphCfg::default()
    };
    let report = evaluate(input, checks, cfg, args);

    let failing = report
        .results
        .iter()
        .filter(|r| {
            r.simple.as_ref().is_some_and(|s| !s.is_simple)
                || r.area.as_ref().is_some_and(|a| !a.is_consistent)
        })
        .count();
    tracing::info!(geometries = report.results.len(), failing, "evaluated");

    write_report(&args.out, &report)?;
    let payload = Payload::new(
        checks.name(),
        serde_json::json!({
            "rule": report.rule,
            "strategy": report.strategy,
            "geometries": report.results.len(),
            "failing": failing
        }),
    )
    .with_input(&args.input)
    .with_tag(tag);
    write_sidecar(&args.out, payload)?;
    Ok(())
}

fn read_input(path: &Path) -> Result<InputDoc> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: InputDoc =
        serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))?;
    if doc.geometries.is_empty() {
        bail!("{} contains no geometries", path.display());
    }
    Ok(doc)
}

fn evaluate(input: InputDoc, checks: Checks, cfg: GraphCfg, args: &RunArgs) -> Report {
    let results = input
        .geometries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let id = entry.id.unwrap_or_else(|| i.to_string());
            let geom = Geometry::from(entry.geometry);
            let simple = checks
                .simple
                .then(|| topocheck::ops::is_simple_with(&geom, cfg).into());
            let area = checks
                .area
                .then(|| topocheck::ops::is_consistent_area_with(&geom, cfg).into());
            tracing::debug!(id = %id, "checked");
            EntryReport { id, simple, area }
        })
        .collect();
    Report {
        version: topocheck::VERSION.to_string(),
        rule: format!("{:?}", args.rule),
        strategy: format!("{:?}", args.strategy),
        results,
    }
}

fn write_report(out: &Path, report: &Report) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": current_git_rev(),
        "topocheck_version": topocheck::VERSION,
        "tag": tag,
        "default_cfg": {
            "rule": format!("{:?}", GraphCfg::default().boundary_rule),
            "strategy": format!("{:?}", GraphCfg::default().strategy),
            "indexed_locate_min_rings": GraphCfg::default().indexed_locate_min_rings
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const DOC: &str = r#"{"geometries": [
        {"id": "square", "geometry": {"type": "Polygon", "coordinates": [[[0,0],[10,0],[10,10],[0,10],[0,0]]]}},
        {"id": "bow-tie", "geometry": {"type": "Polygon", "coordinates": [[[0,0],[10,10],[10,0],[0,10],[0,0]]]}},
        {"geometry": {"type": "LineString", "coordinates": [[0,0],[10,10],[10,0],[0,10]]}}
    ]}"#;

    fn args(dir: &Path, rule: RuleArg) -> RunArgs {
        let input = dir.join("in.json");
        fs::write(&input, DOC).unwrap();
        RunArgs {
            input,
            out: dir.join("reports").join("out.json"),
            rule,
            strategy: StrategyArg::Sweep,
        }
    }

    #[test]
    fn check_writes_report_and_sidecar() {
        let dir = tempdir().unwrap();
        let a = args(dir.path(), RuleArg::Mod2);
        run(&a, Checks::BOTH, Some("t".into())).unwrap();

        let report: Report = serde_json::from_slice(&fs::read(&a.out).unwrap()).unwrap();
        assert_eq!(report.rule, "Mod2");
        assert_eq!(report.results.len(), 3);
        let square = &report.results[0];
        assert!(square.area.as_ref().unwrap().is_consistent);
        assert!(square.simple.as_ref().unwrap().is_simple);
        let bow_tie = &report.results[1];
        assert_eq!(bow_tie.area.as_ref().unwrap().invalid_points, vec![[5.0, 5.0]]);
        let crossing = &report.results[2];
        assert_eq!(crossing.id, "2");
        assert_eq!(
            crossing.simple.as_ref().unwrap().non_simple_points,
            vec![[5.0, 5.0]]
        );
        assert!(dir.path().join("reports").join("out.provenance.json").exists());
    }

    #[test]
    fn simple_only_omits_area_section() {
        let dir = tempdir().unwrap();
        let a = args(dir.path(), RuleArg::AtMostOne);
        run(&a, Checks::SIMPLE, None).unwrap();
        let raw: serde_json::Value = serde_json::from_slice(&fs::read(&a.out).unwrap()).unwrap();
        assert!(raw["results"][0].get("area").is_none());
        assert_eq!(raw["rule"], "AtMostOne");
    }

    #[test]
    fn empty_and_malformed_inputs_are_errors() {
        let dir = tempdir().unwrap();
        let empty = dir.path().join("empty.json");
        fs::write(&empty, r#"{"geometries": []}"#).unwrap();
        assert!(read_input(&empty).is_err());
        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{").unwrap();
        let err = read_input(&broken).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
        assert!(read_input(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn cli_parses_rule_and_strategy() {
        let cmd = Cmd::try_parse_from([
            "topocheck",
            "--tag",
            "x",
            "area",
            "--input",
            "a.json",
            "--out",
            "b.json",
            "--rule",
            "at-most-one",
            "--strategy",
            "simple",
        ])
        .unwrap();
        let Action::Area(a) = cmd.action else {
            panic!("expected area");
        };
        assert_eq!(a.rule, RuleArg::AtMostOne);
        assert_eq!(BoundaryNodeRule::from(a.rule), BoundaryNodeRule::AtMostOne);
        assert_eq!(EdgeSetStrategy::from(a.strategy), EdgeSetStrategy::Simple);
        assert_eq!(cmd.tag.as_deref(), Some("x"));
    }
}
