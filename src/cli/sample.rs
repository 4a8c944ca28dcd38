//! Non-interactive sampling.

use super::SampleArgs;
use super::session::Session;
use crate::error::Result;
use crate::presenter::{self, Report};
use std::io::Write;

/// Collect `args.count` readings and print them as text or JSON lines.
///
/// Source and alert-unit errors propagate before anything is collected. An
/// unknown display scale falls back to Celsius; in JSON mode the notice goes
/// to `notices` so stdout stays machine-readable.
pub fn run_sample<W: Write, E: Write>(
    session: &mut Session,
    args: &SampleArgs,
    output: &mut W,
    notices: &mut E,
) -> Result<()> {
    if let Some(source) = &args.source {
        session.select_source(source)?;
    }
    if let Some(scale) = &args.scale {
        session.set_display_scale(scale);
    }
    if let Some(threshold) = args.alert {
        session
            .store()
            .register_listener(threshold, &args.alert_unit)?;
    }

    let (scale, notice) = presenter::resolve_scale(session.display_scale());
    if args.json
        && let Some(notice) = &notice
    {
        writeln!(notices, "{}", notice)?;
    }

    for i in 0..args.count {
        let outcome = session.collect();

        if args.json {
            let report = Report::new(
                session.source_kind().to_string(),
                &outcome.reading,
                scale,
                &outcome.alerts,
            );
            writeln!(output, "{}", report.to_json()?)?;
            continue;
        }

        if i > 0 {
            writeln!(output)?;
        }
        writeln!(output, "{}", session.render())?;
        writeln!(output, "{}", session.render_condition())?;
        for alert in &outcome.alerts {
            writeln!(output, "ALERT: {}", alert)?;
        }
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::WeatherError;
    use assert_matches::assert_matches;

    fn args() -> SampleArgs {
        SampleArgs {
            source: None,
            count: 1,
            scale: None,
            alert: None,
            alert_unit: "Celsius".to_string(),
            json: false,
        }
    }

    fn session() -> Session {
        let mut config = Config::default();
        config.source.seed = Some(5);
        Session::new(&config)
    }

    #[test]
    fn test_text_output() {
        let mut session = session();
        let mut out = Vec::<u8>::new();
        let mut err = Vec::<u8>::new();
        let args = SampleArgs {
            count: 2,
            scale: Some("Fahrenheit".to_string()),
            alert: Some(45.0),
            ..args()
        };

        run_sample(&mut session, &args, &mut out, &mut err).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Latest weather data:").count(), 2);
        assert_eq!(out.matches("°F").count(), 2);
        assert_eq!(out.matches("ALERT:").count(), 2);
        assert!(err.is_empty());
    }

    #[test]
    fn test_json_output_with_fallback_notice() {
        let mut session = session();
        let mut out = Vec::<u8>::new();
        let mut err = Vec::<u8>::new();
        let args = SampleArgs {
            source: Some("sensor".to_string()),
            count: 3,
            scale: Some("Rankine".to_string()),
            json: true,
            ..args()
        };

        run_sample(&mut session, &args, &mut out, &mut err).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        for (i, line) in lines.iter().enumerate() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["source"], "local");
            assert_eq!(value["scale"], "Celsius");
            assert_eq!(value["version"], i as u64 + 1);
        }
        assert!(String::from_utf8(err).unwrap().contains("falling back to Celsius"));
    }

    #[test]
    fn test_bad_source_fails_before_collecting() {
        let mut session = session();
        let args = SampleArgs {
            source: Some("moon".to_string()),
            ..args()
        };
        let result = run_sample(&mut session, &args, &mut Vec::<u8>::new(), &mut Vec::<u8>::new());
        assert_matches!(result, Err(WeatherError::UnknownSource(_)));
        assert_eq!(session.store().current_reading(), None);
    }

    #[test]
    fn test_bad_alert_unit_fails() {
        let mut session = session();
        let args = SampleArgs {
            alert: Some(1.0),
            alert_unit: "Rankine".to_string(),
            ..args()
        };
        let result = run_sample(&mut session, &args, &mut Vec::<u8>::new(), &mut Vec::<u8>::new());
        assert_matches!(result, Err(WeatherError::UnknownScale(_)));
    }
}
