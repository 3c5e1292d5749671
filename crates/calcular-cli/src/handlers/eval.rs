//! Eval command handler

use calcular::core::{parse_keys, Notice, Session};

use crate::commands::{EvalArgs, EvalFormat};
use crate::config::CliConfig;
use crate::error::CliResult;

/// Run a key script non-interactively and print the final display.
///
/// Text output writes the display to stdout and one `advisory:` line
/// per notice to stderr. JSON output writes a single object with the
/// display, the session phase and the collected notices.
pub fn execute_eval(config: &CliConfig, args: &EvalArgs) -> CliResult<()> {
    let keys = parse_keys(&args.script)?;
    tracing::debug!(keys = keys.len(), "running key script");

    let mut session = Session::new();
    let notices = session.feed(keys);

    match args.format {
        EvalFormat::Text => {
            if !config.verbosity.is_quiet() {
                for notice in &notices {
                    eprintln!("advisory: {notice}");
                }
            }
            println!("{}", session.display());
        }
        EvalFormat::Json => {
            println!("{}", render_report(&session, &notices)?);
        }
    }

    Ok(())
}

/// Serialize a finished session as a one-line JSON report.
fn render_report(session: &Session, notices: &[Notice]) -> CliResult<String> {
    let report = serde_json::json!({
        "display": session.display(),
        "phase": session.phase(),
        "notices": notices,
    });
    Ok(serde_json::to_string(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (Session, Vec<Notice>) {
        let keys = parse_keys(script).expect("test script should parse");
        let mut session = Session::new();
        let notices = session.feed(keys);
        (session, notices)
    }

    #[test]
    fn test_script_computes_display() {
        let (session, notices) = run_script("12+8=");
        assert_eq!(session.display(), "20");
        assert!(notices.is_empty());
    }

    #[test]
    fn test_script_collects_notices() {
        let (session, notices) = run_script("9÷0=");
        assert_eq!(session.display(), "0");
        assert_eq!(notices, vec![Notice::DivisionByZero]);
    }

    #[test]
    fn test_script_collects_notices_across_clears() {
        let (_, notices) = run_script("9÷0=c12+=");
        assert_eq!(
            notices,
            vec![Notice::DivisionByZero, Notice::NothingToCompute]
        );
    }

    #[test]
    fn test_report_shape() {
        let (session, notices) = run_script("12+8=");
        let report = render_report(&session, &notices).expect("report should serialize");
        assert_eq!(report, r#"{"display":"20","notices":[],"phase":"result-shown"}"#);
    }

    #[test]
    fn test_report_includes_notices() {
        let (session, notices) = run_script("9÷0=");
        let report = render_report(&session, &notices).expect("report should serialize");
        assert_eq!(
            report,
            r#"{"display":"0","notices":["division-by-zero"],"phase":"result-shown"}"#
        );
    }

    #[test]
    fn test_report_mid_expression_phase() {
        let (session, notices) = run_script("12+");
        let report = render_report(&session, &notices).expect("report should serialize");
        assert_eq!(
            report,
            r#"{"display":"12 + ","notices":[],"phase":"second-operand"}"#
        );
    }
}
